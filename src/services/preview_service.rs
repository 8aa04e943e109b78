use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::models::preview::{MediaKind, Preview, PreviewKind};
use crate::safety::validate_path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "ico"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "avi"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a", "aac"];
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "log", "md", "csv", "json", "xml", "yaml", "yml", "ini", "cfg", "conf", // Source
    "py", "js", "ts", "java", "c", "cpp", "h", // Markup / style / script
    "html", "htm", "css", "sh", "bat",
];

pub fn classify(path: &Path) -> PreviewKind {
    let Some(ext) = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
    else {
        return PreviewKind::Unsupported;
    };
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        PreviewKind::Media(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        PreviewKind::Media(MediaKind::Video)
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        PreviewKind::Media(MediaKind::Audio)
    } else if ext == "pdf" {
        PreviewKind::Media(MediaKind::Pdf)
    } else if TEXT_EXTENSIONS.contains(&ext) {
        PreviewKind::Text
    } else {
        PreviewKind::Unsupported
    }
}

fn content_type(path: &Path, media: MediaKind) -> String {
    match media {
        MediaKind::Pdf => "application/pdf".to_string(),
        _ => mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string(),
    }
}

/// Renders `path` for preview. Files without a renderer come back as
/// [`Preview::Unsupported`] without being read.
pub fn preview(path: &str) -> Result<Preview, AppError> {
    validate_path(path)?;
    let file_path = Path::new(path);
    let metadata = fs::metadata(file_path).map_err(|e| AppError::from_io(e, path))?;
    if metadata.is_dir() {
        return Ok(Preview::Unsupported);
    }

    match classify(file_path) {
        PreviewKind::Media(media) => {
            let bytes = fs::read(file_path).map_err(|e| AppError::from_io(e, path))?;
            Ok(Preview::Binary {
                media,
                content_type: content_type(file_path, media),
                bytes,
            })
        }
        PreviewKind::Text => {
            let bytes = fs::read(file_path).map_err(|e| AppError::from_io(e, path))?;
            Ok(Preview::Text(String::from_utf8_lossy(&bytes).into_owned()))
        }
        PreviewKind::Unsupported => Ok(Preview::Unsupported),
    }
}
