use serde::{Deserialize, Serialize};

/// Filter tags accepted by the listing `filter` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Images,
    Videos,
    Audio,
    Pdf,
    Documents,
    Code,
    Archive,
}

const IMAGE_SUFFIXES: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp", ".svg", ".ico", ".tiff", ".heic",
];
const VIDEO_SUFFIXES: &[&str] = &[".mp4", ".mkv", ".mov", ".avi", ".webm", ".wmv", ".flv", ".m4v"];
const AUDIO_SUFFIXES: &[&str] = &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a", ".wma", ".opus"];
const PDF_SUFFIXES: &[&str] = &[".pdf"];
const DOCUMENT_SUFFIXES: &[&str] = &[
    ".doc", ".docx", ".odt", ".rtf", ".txt", ".md", // Spreadsheets
    ".xls", ".xlsx", ".ods", ".csv", // Slides
    ".ppt", ".pptx", ".odp",
];
const CODE_SUFFIXES: &[&str] = &[
    ".py", ".js", ".ts", ".jsx", ".tsx", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".go", ".rs",
    ".rb", ".php", // Markup / config
    ".html", ".css", ".json", ".xml", ".yaml", ".yml", ".toml", ".sh",
];
const ARCHIVE_SUFFIXES: &[&str] = &[".zip", ".tar", ".gz", ".tgz", ".bz2", ".xz", ".7z", ".rar"];

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Images,
        Self::Videos,
        Self::Audio,
        Self::Pdf,
        Self::Documents,
        Self::Code,
        Self::Archive,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Documents => "documents",
            Self::Code => "code",
            Self::Archive => "archive",
        }
    }

    /// Lower-case suffixes, leading dot included.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Images => IMAGE_SUFFIXES,
            Self::Videos => VIDEO_SUFFIXES,
            Self::Audio => AUDIO_SUFFIXES,
            Self::Pdf => PDF_SUFFIXES,
            Self::Documents => DOCUMENT_SUFFIXES,
            Self::Code => CODE_SUFFIXES,
            Self::Archive => ARCHIVE_SUFFIXES,
        }
    }

    pub fn matches(self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.suffixes().iter().any(|suffix| lower.ends_with(suffix))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == wanted)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// OR across tags; an empty tag set lets everything through.
pub fn matches_any(name: &str, tags: &[Category]) -> bool {
    tags.is_empty() || tags.iter().any(|tag| tag.matches(name))
}
