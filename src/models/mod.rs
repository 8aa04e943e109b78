pub mod file_entry;
pub mod listing;
pub mod preview;
