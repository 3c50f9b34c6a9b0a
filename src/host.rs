//! Browser Host
//!
//! The side effects a collection operation has outside its own state:
//! blocking alerts and client-side file saves. Picked files are read here too.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::error::{ClientError, ClientResult};
use crate::models::UploadFile;

pub trait Host {
    /// Show a blocking alert dialog
    fn alert(&self, message: &str);

    /// Hand `bytes` to the user as a download named `file_name`
    fn save_file(&self, file_name: &str, bytes: &[u8]) -> ClientResult<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        match shown {
            Some(Ok(())) => {}
            Some(Err(err)) => log::error!("alert failed ({:?}): {}", err, message),
            None => log::error!("no window for alert: {}", message),
        }
    }

    fn save_file(&self, file_name: &str, bytes: &[u8]) -> ClientResult<()> {
        let window = web_sys::window().ok_or_else(|| ClientError::Browser("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ClientError::Browser("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| ClientError::Browser("no document body".into()))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let blob = Blob::new_with_u8_array_sequence(&parts)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(|_| ClientError::Browser("<a> is not an anchor element".into()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        Url::revoke_object_url(&url)?;
        Ok(())
    }
}

/// Read a picked file into memory
pub async fn read_upload(file: &web_sys::File) -> ClientResult<UploadFile> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile::new(file.name(), file.type_(), bytes))
}
