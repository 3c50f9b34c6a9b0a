//! Backend Command Wrappers
//!
//! Bindings to the image metadata REST service. `ImageApi` is the seam the
//! collection controller talks to; `HttpImageApi` implements it with reqwest,
//! which runs on `fetch` in the browser.

mod image;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::ClientResult;
use crate::models::{ImageRecord, NewImage, RecordId, UpdateImageMetadata};

/// Remote image record collection
///
/// Futures are not `Send`: in the browser they hold JS handles.
#[async_trait(?Send)]
pub trait ImageApi {
    /// `GET /image_metadata`
    async fn list(&self) -> ClientResult<Vec<ImageRecord>>;

    /// `POST /image_metadata` as multipart form data
    async fn create(&self, image: &NewImage) -> ClientResult<()>;

    /// `PUT /image_metadata/{id}` with label and metadata only
    async fn update(&self, id: RecordId, body: &UpdateImageMetadata<'_>) -> ClientResult<()>;

    /// `DELETE /image_metadata/{id}`
    async fn delete(&self, id: RecordId) -> ClientResult<()>;

    /// `GET /image_metadata_export_h5`, returned as opaque bytes
    async fn export(&self) -> ClientResult<Vec<u8>>;

    /// Image source for a record's stored binary
    fn image_url(&self, id: RecordId) -> String;
}

/// reqwest-backed client for the service
#[derive(Clone, Debug)]
pub struct HttpImageApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpImageApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}
