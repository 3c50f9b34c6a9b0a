//! Frontend Models
//!
//! Data structures matching the image metadata service.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned record identifier
pub type RecordId = u32;

/// Image record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: RecordId,
    pub label: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_metadata: String,
    pub image_path: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// File picked in the browser, read fully into memory
#[derive(Clone, PartialEq, Default)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated create payload, sent as multipart form data
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub file: UploadFile,
    pub label: String,
    pub image_metadata: String,
}

/// Update body. Carries no file: stored images are never replaced.
#[derive(Debug, Serialize)]
pub struct UpdateImageMetadata<'a> {
    pub label: &'a str,
    pub image_metadata: &'a str,
}

/// Render a server timestamp as `YYYY-MM-DD HH:MM:SS`, or verbatim if unparseable
pub fn display_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset.naive_local().format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_service_json() {
        let json = r#"[{
            "id": 1,
            "label": "cat",
            "image_metadata": "m1",
            "image_path": "app/images/cat.png",
            "created_at": "2024-10-01T08:30:00",
            "updated_at": "2024-10-02T09:00:00.123456"
        }]"#;
        let records: Vec<ImageRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].label, "cat");
        assert_eq!(records[0].image_path, "app/images/cat.png");
    }

    #[test]
    fn test_null_metadata_reads_as_empty() {
        let json = r#"{"id": 7, "label": "dog", "image_metadata": null, "image_path": "p"}"#;
        let record: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.image_metadata, "");
        assert_eq!(record.created_at, "");
    }

    #[test]
    fn test_update_body_has_no_file() {
        let body = UpdateImageMetadata { label: "cat", image_metadata: "m2" };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"label": "cat", "image_metadata": "m2"}));
    }

    #[test]
    fn test_display_timestamp() {
        assert_eq!(display_timestamp("2024-10-01T08:30:00.654321"), "2024-10-01 08:30:00");
        assert_eq!(display_timestamp("2024-10-01T08:30:00+02:00"), "2024-10-01 08:30:00");
        assert_eq!(display_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_image_mime_check() {
        assert!(UploadFile::new("a.png", "image/png", vec![1]).is_image());
        assert!(!UploadFile::new("a.txt", "text/plain", vec![1]).is_image());
        assert!(!UploadFile::new("a", "", vec![]).is_image());
    }
}
