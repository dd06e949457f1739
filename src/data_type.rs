use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a [`Mock`] serves.
///
/// Each variant maps to exactly one `Content-Type` header value, see [`DataType::header_value`].
///
/// [`Mock`]: crate::Mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "imagePNG")]
    ImagePng,
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "mp4")]
    Mp4,
    #[serde(rename = "zip")]
    Zip,
}

impl DataType {
    /// The `Content-Type` value every [`Mock`] of this kind responds with.
    ///
    /// [`Mock`]: crate::Mock
    pub fn header_value(&self) -> &'static str {
        match self {
            DataType::Json => "application/json; charset=utf-8",
            DataType::Html => "text/html; charset=utf-8",
            DataType::ImagePng => "image/png",
            DataType::Pdf => "application/pdf",
            DataType::Mp4 => "video/mp4",
            DataType::Zip => "application/zip",
        }
    }

    /// Name used in synthesized mock URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Json => "json",
            DataType::Html => "html",
            DataType::ImagePng => "imagePNG",
            DataType::Pdf => "pdf",
            DataType::Mp4 => "mp4",
            DataType::Zip => "zip",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
