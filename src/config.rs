//! Client Configuration
//!
//! Backend origin, fixed REST routes and logging settings.

use log::LevelFilter;

/// Collection route; single records live under `/image_metadata/{id}`
pub const RECORDS_PATH: &str = "/image_metadata";
/// Bulk export route
pub const EXPORT_PATH: &str = "/image_metadata_export_h5";
/// File name the export artifact is saved under
pub const EXPORT_FILE_NAME: &str = "images_metadata_with_images.h5";

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the image metadata service is reached
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join a route onto the origin without doubling the slash
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn record_url(&self, id: u32) -> String {
        self.url(&format!("{}/{}", RECORDS_PATH, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.url(RECORDS_PATH), "http://localhost:8000/image_metadata");
        assert_eq!(config.url(EXPORT_PATH), "http://localhost:8000/image_metadata_export_h5");
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let config = ApiConfig::new("http://images.local/");
        assert_eq!(config.record_url(42), "http://images.local/image_metadata/42");
    }
}
