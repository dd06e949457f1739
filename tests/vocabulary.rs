use stubwire::{DataType, Error, Method};

#[test]
fn every_data_type_maps_to_a_fixed_content_type() {
    let expected = [
        (DataType::Json, "application/json; charset=utf-8"),
        (DataType::Html, "text/html; charset=utf-8"),
        (DataType::ImagePng, "image/png"),
        (DataType::Pdf, "application/pdf"),
        (DataType::Mp4, "video/mp4"),
        (DataType::Zip, "application/zip"),
    ];

    for (data_type, header_value) in expected.iter() {
        assert_eq!(data_type.header_value(), *header_value);
        // Same answer on every call.
        assert_eq!(data_type.header_value(), data_type.header_value());
    }
}

#[test]
fn data_types_deserialize_from_their_names() {
    let data_types: Vec<DataType> =
        serde_json::from_str(r#"["json", "html", "imagePNG", "pdf", "mp4", "zip"]"#).unwrap();

    assert_eq!(
        data_types,
        vec![
            DataType::Json,
            DataType::Html,
            DataType::ImagePng,
            DataType::Pdf,
            DataType::Mp4,
            DataType::Zip,
        ]
    );
    assert_eq!(DataType::ImagePng.to_string(), "imagePNG");
}

#[test]
fn methods_parse_from_upper_case_tokens() {
    assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
    assert_eq!("OPTIONS".parse::<Method>().unwrap(), Method::Options);
    assert_eq!("CONNECT".parse::<Method>().unwrap(), Method::Connect);
    assert_eq!(Method::Patch.to_string(), "PATCH");
}

#[test]
fn unknown_or_lower_case_methods_do_not_parse() {
    for token in ["get", "PROPFIND", ""].iter() {
        match token.parse::<Method>() {
            Err(Error::UnsupportedMethod(method)) => assert_eq!(&method, token),
            other => panic!("Expected an unsupported method, got {:?}", other),
        }
    }
}

#[test]
fn methods_convert_to_and_from_http_methods() {
    let method: http::Method = Method::Delete.into();
    assert_eq!(method, http::Method::DELETE);

    assert_eq!(Method::try_from(&http::Method::HEAD).unwrap(), Method::Head);
    let propfind = http::Method::from_bytes(b"PROPFIND").unwrap();
    assert!(Method::try_from(&propfind).is_err());
}

#[test]
fn methods_are_ordered_by_declaration() {
    let mut methods = vec![Method::Delete, Method::Get, Method::Options, Method::Post];
    methods.sort();

    assert_eq!(
        methods,
        vec![Method::Options, Method::Get, Method::Post, Method::Delete]
    );
}
