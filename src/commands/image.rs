//! Image Commands
//!
//! HTTP calls behind `ImageApi`. Only status 200 counts as success.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};

use super::{HttpImageApi, ImageApi};
use crate::config::{EXPORT_PATH, RECORDS_PATH};
use crate::error::{ClientError, ClientResult};
use crate::models::{ImageRecord, NewImage, RecordId, UpdateImageMetadata};

fn expect_ok(response: Response) -> ClientResult<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(ClientError::Status(status.as_u16())),
    }
}

fn upload_form(image: &NewImage) -> ClientResult<Form> {
    let part = Part::bytes(image.file.bytes.clone())
        .file_name(image.file.name.clone())
        .mime_str(&image.file.mime)?;
    Ok(Form::new()
        .part("file", part)
        .text("label", image.label.clone())
        .text("image_metadata", image.image_metadata.clone()))
}

#[async_trait(?Send)]
impl ImageApi for HttpImageApi {
    async fn list(&self) -> ClientResult<Vec<ImageRecord>> {
        let response = self.client.get(self.config.url(RECORDS_PATH)).send().await?;
        let body = expect_ok(response)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, image: &NewImage) -> ClientResult<()> {
        let form = upload_form(image)?;
        let response = self
            .client
            .post(self.config.url(RECORDS_PATH))
            .multipart(form)
            .send()
            .await?;
        expect_ok(response)?;
        Ok(())
    }

    async fn update(&self, id: RecordId, body: &UpdateImageMetadata<'_>) -> ClientResult<()> {
        let response = self
            .client
            .put(self.config.record_url(id))
            .json(body)
            .send()
            .await?;
        expect_ok(response)?;
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let response = self.client.delete(self.config.record_url(id)).send().await?;
        expect_ok(response)?;
        Ok(())
    }

    async fn export(&self) -> ClientResult<Vec<u8>> {
        let response = self.client.get(self.config.url(EXPORT_PATH)).send().await?;
        let bytes = expect_ok(response)?.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn image_url(&self, id: RecordId) -> String {
        self.config.record_url(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::UploadFile;

    #[test]
    fn test_image_url_addresses_record() {
        let api = HttpImageApi::new(ApiConfig::default());
        assert_eq!(api.image_url(5), "http://localhost:8000/image_metadata/5");
    }

    #[test]
    fn test_upload_form_rejects_malformed_mime() {
        let image = NewImage {
            file: UploadFile::new("cat.png", "not a mime", vec![1, 2, 3]),
            label: "cat".to_string(),
            image_metadata: "m1".to_string(),
        };
        assert!(matches!(upload_form(&image), Err(ClientError::Transport(_))));
    }

    #[test]
    fn test_upload_form_accepts_image() {
        let image = NewImage {
            file: UploadFile::new("cat.png", "image/png", vec![1, 2, 3]),
            label: "cat".to_string(),
            image_metadata: "m1".to_string(),
        };
        assert!(upload_form(&image).is_ok());
    }
}
