//! Error Types
//!
//! Local validation failures block a request and are shown inline in the
//! editor. Client failures abort the request and are surfaced as an alert.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a form is refused before any request is sent.
/// The `Display` text is what the editor shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Label and Metadata are required")]
    MissingFields,
    #[error("Image file is required")]
    MissingFile,
    #[error("Selected file must be an image")]
    NotAnImage,
    #[error("The image file of an existing record cannot be replaced")]
    FileReplacement,
}

/// Failures talking to the backend or the browser
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("browser error: {0}")]
    Browser(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
