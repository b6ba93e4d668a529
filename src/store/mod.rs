//! Local state: history, recent verses, favorites, templates and a draft,
//! persisted as JSON files in one directory.

mod json_file;
mod local;
mod recent;
mod records;

pub use json_file::JsonFile;
pub use local::{LocalState, HISTORY_CAPACITY, RECENT_CAPACITY, TEMPLATE_CAPACITY};
pub use recent::RecentList;
pub use records::{Draft, HistoryEntry, SavedTemplate};

/// A stored record with an identity used for de-duplication.
pub trait Keyed {
    /// Identity of the record.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for crate::bible::Verse {
    fn key(&self) -> &str {
        &self.reference
    }
}
