//! Record Editor State
//!
//! Field state and visibility of the modal editor, plus the checks a form
//! must pass before it may be submitted.
//!
//! Visibility is `Closed -> Open(create) -> Closed` or
//! `Closed -> Open(edit, record) -> Closed`. A failed submission keeps the
//! editor open; only the shared `error` message records that anything went
//! wrong.

use crate::error::ValidationError;
use crate::models::{ImageRecord, NewImage, UploadFile};

/// Fields the user types into
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorForm {
    pub label: String,
    pub metadata: String,
    pub file: Option<UploadFile>,
}

impl EditorForm {
    fn seeded(record: &ImageRecord) -> Self {
        Self {
            label: record.label.clone(),
            metadata: record.image_metadata.clone(),
            file: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub open: bool,
    /// Record being edited; `None` means create mode
    pub target: Option<ImageRecord>,
    pub form: EditorForm,
    /// Validation message shown below the fields
    pub error: Option<String>,
}

impl EditorState {
    pub fn open_for_create(&mut self) {
        self.target = None;
        self.form.clear();
        self.error = None;
        self.open = true;
    }

    pub fn open_for_edit(&mut self, record: ImageRecord) {
        self.form = EditorForm::seeded(&record);
        self.target = Some(record);
        self.error = None;
        self.open = true;
    }

    /// Close and discard unsaved edits
    pub fn close(&mut self) {
        self.open = false;
        self.target = None;
        self.form.clear();
        self.error = None;
    }

    pub fn is_create(&self) -> bool {
        self.target.is_none()
    }

    /// The file picker only exists while creating
    pub fn accepts_file(&self) -> bool {
        self.is_create()
    }

    /// Attach (or clear) the picked file. Rejected in edit mode.
    pub fn attach_file(&mut self, file: Option<UploadFile>) -> Result<(), ValidationError> {
        if !self.accepts_file() {
            return Err(ValidationError::FileReplacement);
        }
        self.form.file = file;
        Ok(())
    }

    pub fn reject(&mut self, error: &ValidationError) {
        self.error = Some(error.to_string());
    }

    pub fn title(&self) -> &'static str {
        if self.is_create() { "Create New Image" } else { "Edit Image" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_create() { "Create" } else { "Update" }
    }
}

/// Label and metadata are both required. Whitespace is content and is sent as typed.
pub fn validate_fields(label: &str, metadata: &str) -> Result<(), ValidationError> {
    if label.is_empty() || metadata.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Everything a create request needs, checked in the order the user sees it
pub fn validate_new(
    file: Option<UploadFile>,
    label: String,
    metadata: String,
) -> Result<NewImage, ValidationError> {
    validate_fields(&label, &metadata)?;
    let file = file.ok_or(ValidationError::MissingFile)?;
    if !file.is_image() {
        return Err(ValidationError::NotAnImage);
    }
    Ok(NewImage {
        file,
        label,
        image_metadata: metadata,
    })
}
