//! Collection Controller
//!
//! Owns the synchronization between the in-memory record list and the remote
//! collection. Every operation is a single round trip that ends either in a
//! state change or in an alert; nothing is retried.


use log::{debug, error, info, warn};

use crate::commands::ImageApi;
use crate::config::EXPORT_FILE_NAME;
use crate::editor;
use crate::error::{ClientError, ClientResult, ValidationError};
use crate::host::Host;
use crate::models::{ImageRecord, RecordId, UpdateImageMetadata, UploadFile};
use crate::store::{PendingTarget, StateCell};

/// How an operation ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Request succeeded and its result is reflected in state
    Applied,
    /// Refused locally, nothing sent
    Invalid,
    /// Same target already has a request outstanding, nothing sent
    Busy,
    /// Request failed and the user was alerted
    Failed,
    /// List arrived after a newer fetch was issued and was dropped
    Stale,
}

#[derive(Clone, Copy, Debug)]
enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn alert_message(self, err: &ClientError) -> String {
        let (verb, gerund) = match self {
            Mutation::Create => ("create", "creating"),
            Mutation::Update => ("update", "updating"),
            Mutation::Delete => ("delete", "deleting"),
        };
        match err {
            ClientError::Status(_) => format!("Failed to {} image", verb),
            _ => format!("Error {} image", gerund),
        }
    }
}

/// The collection view's operations over an API, a host and a state cell
#[derive(Clone)]
pub struct Collection<A, H, S> {
    api: A,
    host: H,
    state: S,
}

impl<A: ImageApi, H: Host, S: StateCell> Collection<A, H, S> {
    pub fn new(api: A, host: H, state: S) -> Self {
        Self { api, host, state }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn image_url(&self, id: RecordId) -> String {
        self.api.image_url(id)
    }

    /// Replace the list with the server's. On failure the list is untouched.
    pub async fn fetch_all(&self) -> Outcome {
        let generation = self.state.modify(|s| s.begin_fetch());
        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                if self.state.modify(|s| s.apply_fetch(generation, records)) {
                    info!("loaded {} images", count);
                    Outcome::Applied
                } else {
                    debug!("dropping list from superseded fetch #{}", generation);
                    Outcome::Stale
                }
            }
            Err(err) => {
                error!("Error fetching images: {}", err);
                self.host.alert("Failed to load images");
                Outcome::Failed
            }
        }
    }

    pub async fn create(&self, file: Option<UploadFile>, label: String, metadata: String) -> Outcome {
        let image = match editor::validate_new(file, label, metadata) {
            Ok(image) => image,
            Err(err) => return self.refuse(err),
        };
        let target = PendingTarget::NewRecord;
        if !self.claim(target) {
            return Outcome::Busy;
        }
        let result = self.api.create(&image).await;
        self.state.modify(|s| s.finish(target));
        self.settle(Mutation::Create, result).await
    }

    /// Send new label and metadata for `id`. The stored image is never replaced.
    pub async fn update(&self, id: RecordId, label: String, metadata: String) -> Outcome {
        if let Err(err) = editor::validate_fields(&label, &metadata) {
            return self.refuse(err);
        }
        let target = PendingTarget::Record(id);
        if !self.claim(target) {
            return Outcome::Busy;
        }
        let body = UpdateImageMetadata {
            label: &label,
            image_metadata: &metadata,
        };
        let result = self.api.update(id, &body).await;
        self.state.modify(|s| s.finish(target));
        self.settle(Mutation::Update, result).await
    }

    /// Delete `id` and filter it out locally; no refetch
    pub async fn delete(&self, id: RecordId) -> Outcome {
        let target = PendingTarget::Record(id);
        if !self.claim(target) {
            return Outcome::Busy;
        }
        let result = self.api.delete(id).await;
        self.state.modify(|s| s.finish(target));
        match result {
            Ok(()) => {
                self.state.modify(|s| s.remove_record(id));
                info!("deleted image #{}", id);
                Outcome::Applied
            }
            Err(err) => self.fail(Mutation::Delete, &err),
        }
    }

    /// Download the opaque export artifact under the fixed file name
    pub async fn export_all(&self) -> Outcome {
        let saved = match self.api.export().await {
            Ok(bytes) => {
                info!("export received ({} bytes)", bytes.len());
                self.host.save_file(EXPORT_FILE_NAME, &bytes)
            }
            Err(err) => Err(err),
        };
        match saved {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                error!("Error exporting data: {}", err);
                self.host.alert("Failed to export data");
                Outcome::Failed
            }
        }
    }

    /// Submit the editor form as a create or an update depending on its mode
    pub async fn submit(&self) -> Outcome {
        let (target, form) = self.state.peek(|s| {
            (s.editor.target.as_ref().map(|record| record.id), s.editor.form.clone())
        });
        match target {
            Some(id) => self.update(id, form.label, form.metadata).await,
            None => self.create(form.file, form.label, form.metadata).await,
        }
    }

    pub fn open_editor_for_create(&self) {
        self.state.modify(|s| s.editor.open_for_create());
    }

    pub fn open_editor_for_edit(&self, record: ImageRecord) {
        self.state.modify(|s| s.editor.open_for_edit(record));
    }

    pub fn close_editor(&self) {
        self.state.modify(|s| s.editor.close());
    }

    pub fn set_label(&self, label: String) {
        self.state.modify(|s| s.editor.form.label = label);
    }

    pub fn set_metadata(&self, metadata: String) {
        self.state.modify(|s| s.editor.form.metadata = metadata);
    }

    pub fn attach_file(&self, file: Option<UploadFile>) -> Result<(), ValidationError> {
        let attached = self.state.modify(|s| s.editor.attach_file(file));
        if let Err(err) = &attached {
            warn!("file not attached: {}", err);
        }
        attached
    }

    /// Attach the result of reading a picked file. `None` means the picker
    /// was cleared. A failed read alerts and keeps the current file.
    pub fn attach_upload(&self, read: Option<ClientResult<UploadFile>>) -> Outcome {
        let file = match read {
            Some(Ok(file)) => Some(file),
            Some(Err(err)) => {
                error!("Error reading picked file: {}", err);
                self.host.alert("Failed to read image file");
                return Outcome::Failed;
            }
            None => None,
        };
        match self.attach_file(file) {
            Ok(()) => Outcome::Applied,
            Err(err) => self.refuse(err),
        }
    }

    fn refuse(&self, err: ValidationError) -> Outcome {
        debug!("form refused: {}", err);
        self.state.modify(|s| s.editor.reject(&err));
        Outcome::Invalid
    }

    fn claim(&self, target: PendingTarget) -> bool {
        let claimed = self.state.modify(|s| s.begin(target));
        if !claimed {
            warn!("{:?} already has a request in flight, ignoring", target);
        }
        claimed
    }

    async fn settle(&self, mutation: Mutation, result: Result<(), ClientError>) -> Outcome {
        match result {
            Ok(()) => {
                info!("{:?} succeeded, refreshing list", mutation);
                self.fetch_all().await;
                self.close_editor();
                Outcome::Applied
            }
            Err(err) => self.fail(mutation, &err),
        }
    }

    fn fail(&self, mutation: Mutation, err: &ClientError) -> Outcome {
        error!("{:?} failed: {}", mutation, err);
        self.host.alert(&mutation.alert_message(err));
        Outcome::Failed
    }
}
