use http_body_util::Full;
use serde::Deserialize;
use stubwire::http::Bytes;
use stubwire::Request;
use url::Url;

fn get(url: &str) -> Request {
    Request::new(http::Method::GET, Url::parse(url).unwrap())
}

#[test]
fn path_extension_is_taken_from_the_last_path_segment() {
    assert_eq!(
        get("https://example.com/files/report.pdf?download=1").path_extension(),
        Some("pdf")
    );
    assert_eq!(
        get("https://example.com/archive.tar.gz").path_extension(),
        Some("gz")
    );
    assert_eq!(
        get("https://example.com/videos/intro.mp4/").path_extension(),
        Some("mp4")
    );
}

#[test]
fn paths_without_extension_have_none() {
    assert_eq!(get("https://example.com/").path_extension(), None);
    assert_eq!(get("https://example.com/files/").path_extension(), None);
    assert_eq!(get("https://example.com/files/README").path_extension(), None);
    assert_eq!(get("https://example.com/.hidden").path_extension(), None);
    assert_eq!(get("https://example.com/file.").path_extension(), None);
    // The query string is not part of the path.
    assert_eq!(get("https://example.com/files?name=a.pdf").path_extension(), None);
}

#[test]
fn converts_an_http_request() {
    // Arrange
    let request = http::Request::builder()
        .method("PATCH")
        .uri("https://api.example.com/users/1")
        .header("authorization", "Bearer token")
        .body(r#"{"name": "Ada"}"#)
        .unwrap();

    // Act
    let request = Request::try_from(request).unwrap();

    // Assert
    assert_eq!(request.method, http::Method::PATCH);
    assert_eq!(request.url.as_str(), "https://api.example.com/users/1");
    assert_eq!(request.headers["authorization"], "Bearer token");
    assert_eq!(request.body, br#"{"name": "Ada"}"#.to_vec());
}

#[test]
fn origin_form_uris_resolve_against_localhost() {
    let request = http::Request::builder()
        .uri("/hello?name=world")
        .body(Vec::<u8>::new())
        .unwrap();

    let request = Request::try_from(request).unwrap();

    assert_eq!(request.url.as_str(), "http://localhost/hello?name=world");
}

#[tokio::test]
async fn collects_a_streaming_body() {
    // Arrange
    let request = http::Request::builder()
        .method("POST")
        .uri("https://api.example.com/upload.zip")
        .body(Full::new(Bytes::from_static(b"PK\x03\x04")))
        .unwrap();

    // Act
    let request = Request::from_body(request).await.unwrap();

    // Assert
    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.path_extension(), Some("zip"));
    assert_eq!(request.body, b"PK\x03\x04".to_vec());
}

#[test]
fn body_json_deserializes_the_body() {
    #[derive(Deserialize)]
    struct User {
        name: String,
    }

    let mut request = get("https://api.example.com/users");
    request.body = br#"{"name": "Ada"}"#.to_vec();

    let user: User = request.body_json().unwrap();

    assert_eq!(user.name, "Ada");
}

#[test]
fn display_prints_method_url_headers_and_body() {
    let mut request = get("https://api.example.com/users");
    request
        .headers
        .insert("accept", "application/json".parse().unwrap());
    request.body = b"hello".to_vec();

    assert_eq!(
        request.to_string(),
        "GET https://api.example.com/users\naccept: application/json\nhello\n"
    );
}

#[test]
fn display_truncates_large_bodies() {
    let mut request = get("https://api.example.com/upload");
    request.body = vec![b'a'; 10_050];

    let printed = request.to_string();

    assert!(printed.contains("We truncated the body because it was too large: 10050 bytes"));
    assert!(!printed.contains(&"a".repeat(10_001)));
}

#[test]
fn display_prints_the_whole_body_when_the_limit_splits_its_last_character() {
    // Arrange
    let mut request = get("https://api.example.com/upload");
    let body = format!("{}é", "a".repeat(9_999));
    assert_eq!(body.len(), 10_001);
    request.body = body.clone().into_bytes();

    // Act
    let printed = request.to_string();

    // Assert
    assert!(printed.contains(&body));
    assert!(!printed.contains("We truncated the body"));
}

#[test]
fn display_reports_binary_bodies() {
    let mut request = get("https://api.example.com/upload");
    request.body = vec![0xff, 0xfe, 0x00];

    assert!(request
        .to_string()
        .contains("Body is likely binary (invalid utf-8) size is 3 bytes"));
}
