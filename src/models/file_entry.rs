use serde::Serialize;

/// One child of a listed directory, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "is_dir")]
    pub is_directory: bool,
    /// Byte size, only for regular files whose metadata was readable.
    pub size: Option<u64>,
    /// Seconds since the epoch, absent when metadata could not be read.
    #[serde(rename = "modified")]
    pub modified_at: Option<f64>,
}

impl FileEntry {
    pub fn directory(name: &str, path: &str, modified_at: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            is_directory: true,
            size: None,
            modified_at,
        }
    }

    pub fn file(name: &str, path: &str, size: Option<u64>, modified_at: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            is_directory: false,
            size,
            modified_at,
        }
    }
}
