use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::file_entry::FileEntry;
use crate::services::taxonomy::Category;

/// Entries per page. Not caller-configurable.
pub const PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Date,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Size => write!(f, "size"),
            Self::Date => write!(f, "date"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "date" => Ok(Self::Date),
            _ => Err(format!("unknown sort key: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("unknown sort order: {s}")),
        }
    }
}

/// Validated per-request listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// 1-based page number, always >= 1.
    pub page: usize,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub filter_tags: Vec<Category>,
    /// Lower-cased search term; empty matches everything.
    pub search: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            filter_tags: Vec::new(),
            search: String::new(),
        }
    }
}

impl ListingQuery {
    /// Builds a query from raw request text. Unknown sort keys, orders and
    /// tags fall back or drop out; only a non-numeric page is rejected.
    pub fn from_raw(
        page: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
        filter: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            page: parse_page(page)?,
            sort_key: sort.and_then(|s| s.parse().ok()).unwrap_or_default(),
            sort_order: order.and_then(|s| s.parse().ok()).unwrap_or_default(),
            filter_tags: filter.map(parse_tags).unwrap_or_default(),
            search: search.map(|s| s.trim().to_lowercase()).unwrap_or_default(),
        })
    }
}

fn parse_page(raw: Option<&str>) -> Result<usize, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };
    let page: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("page must be an integer: {raw}")))?;
    Ok(usize::try_from(page.max(1)).unwrap_or(usize::MAX))
}

fn parse_tags(raw: &str) -> Vec<Category> {
    let mut tags = Vec::new();
    for tag in raw.split(',').filter_map(|t| t.parse::<Category>().ok()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// One page of a directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub path: String,
    pub items: Vec<FileEntry>,
    pub page: usize,
    pub per_page: usize,
    /// Count after search and filtering, before pagination.
    pub total: usize,
}
