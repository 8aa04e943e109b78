use serde::Serialize;

/// Media served as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Pdf,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

/// How a path is rendered, decided purely from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Media(MediaKind),
    Text,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Binary {
        media: MediaKind,
        content_type: String,
        bytes: Vec<u8>,
    },
    Text(String),
    /// No renderer for this file; not an error.
    Unsupported,
}

impl Preview {
    pub fn kind(&self) -> PreviewKind {
        match self {
            Self::Binary { media, .. } => PreviewKind::Media(*media),
            Self::Text(_) => PreviewKind::Text,
            Self::Unsupported => PreviewKind::Unsupported,
        }
    }
}
