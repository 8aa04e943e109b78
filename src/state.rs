use std::sync::Arc;

use crate::config::Config;
use crate::services::enumerator::{DirectoryEnumerator, LocalEnumerator};

/// Read-only per-process state shared by every request.
pub struct AppState {
    pub default_root: String,
    pub allow_protected_delete: bool,
    pub enumerator: Arc<dyn DirectoryEnumerator>,
}

impl AppState {
    pub fn new(default_root: impl Into<String>, allow_protected_delete: bool) -> Self {
        Self {
            default_root: default_root.into(),
            allow_protected_delete,
            enumerator: Arc::new(LocalEnumerator),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_root(), config.allow_protected_delete)
    }

    pub fn with_enumerator(mut self, enumerator: Arc<dyn DirectoryEnumerator>) -> Self {
        self.enumerator = enumerator;
        self
    }
}
