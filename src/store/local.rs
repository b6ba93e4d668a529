//! The local state directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Draft, HistoryEntry, JsonFile, Keyed, RecentList, SavedTemplate};
use crate::bible::Verse;
use crate::error::Result;

/// Generated documents kept in history.
pub const HISTORY_CAPACITY: usize = 10;

/// Recently viewed verses kept.
pub const RECENT_CAPACITY: usize = 20;

/// Saved templates kept.
pub const TEMPLATE_CAPACITY: usize = 20;

const HISTORY_FILE: &str = "history.json";
const RECENT_FILE: &str = "bible-recent.json";
const FAVORITES_FILE: &str = "bible-favorites.json";
const TEMPLATES_FILE: &str = "templates.json";
const DRAFT_FILE: &str = "draft.json";

/// Per-user state stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct LocalState {
    dir: PathBuf,
}

impl LocalState {
    /// Open a state directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::debug!("local state in {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file<T: Serialize + DeserializeOwned>(&self, name: &str) -> JsonFile<T> {
        JsonFile::new(self.dir.join(name))
    }

    fn list<T>(&self, name: &str, capacity: usize) -> Result<RecentList<T>>
    where
        T: Keyed + Serialize + DeserializeOwned,
    {
        let items = self.file::<Vec<T>>(name).load()?.unwrap_or_default();
        Ok(RecentList::from_vec(items, capacity))
    }

    fn push<T>(&self, name: &str, capacity: usize, item: T) -> Result<Vec<T>>
    where
        T: Keyed + Serialize + DeserializeOwned,
    {
        let mut list = self.list(name, capacity)?;
        list.push(item);
        let items = list.into_vec();
        self.file(name).save(&items)?;
        Ok(items)
    }

    /// Generated documents, newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        let mut entries = self
            .file::<Vec<HistoryEntry>>(HISTORY_FILE)
            .load()?
            .unwrap_or_default();
        entries.truncate(HISTORY_CAPACITY);
        Ok(entries)
    }

    /// Add a document to history. Entries sharing a title are all kept.
    pub fn record_history(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.history()?;
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);
        self.file(HISTORY_FILE).save(&entries)?;
        Ok(entries)
    }

    /// Forget all history.
    pub fn clear_history(&self) -> Result<bool> {
        self.file::<Vec<HistoryEntry>>(HISTORY_FILE).remove()
    }

    /// Recently viewed verses, newest first.
    pub fn recent_verses(&self) -> Result<Vec<Verse>> {
        Ok(self.list(RECENT_FILE, RECENT_CAPACITY)?.into_vec())
    }

    /// Record a viewed verse.
    pub fn record_verse(&self, verse: Verse) -> Result<Vec<Verse>> {
        self.push(RECENT_FILE, RECENT_CAPACITY, verse)
    }

    /// Favorite references, in the order they were added.
    pub fn favorites(&self) -> Result<Vec<String>> {
        Ok(self
            .file::<Vec<String>>(FAVORITES_FILE)
            .load()?
            .unwrap_or_default())
    }

    pub fn is_favorite(&self, reference: &str) -> Result<bool> {
        Ok(self.favorites()?.iter().any(|f| f == reference))
    }

    /// Add a reference to favorites, or remove it if present. Returns
    /// whether the reference is a favorite afterwards.
    pub fn toggle_favorite(&self, reference: &str) -> Result<bool> {
        let mut favorites = self.favorites()?;
        let added = match favorites.iter().position(|f| f == reference) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(reference.to_string());
                true
            }
        };
        self.file(FAVORITES_FILE).save(&favorites)?;
        Ok(added)
    }

    /// Saved templates, newest first.
    pub fn templates(&self) -> Result<Vec<SavedTemplate>> {
        Ok(self.list(TEMPLATES_FILE, TEMPLATE_CAPACITY)?.into_vec())
    }

    /// Find a template by name.
    pub fn template(&self, name: &str) -> Result<Option<SavedTemplate>> {
        Ok(self.list::<SavedTemplate>(TEMPLATES_FILE, TEMPLATE_CAPACITY)?
            .get(name)
            .cloned())
    }

    /// Save a template, replacing one with the same name.
    pub fn save_template(&self, template: SavedTemplate) -> Result<Vec<SavedTemplate>> {
        self.push(TEMPLATES_FILE, TEMPLATE_CAPACITY, template)
    }

    /// Delete a template. Returns false when no template had the name.
    pub fn delete_template(&self, name: &str) -> Result<bool> {
        let mut list = self.list::<SavedTemplate>(TEMPLATES_FILE, TEMPLATE_CAPACITY)?;
        if list.remove(name).is_none() {
            return Ok(false);
        }
        self.file(TEMPLATES_FILE).save(&list.into_vec())?;
        Ok(true)
    }

    /// The saved draft, if any.
    pub fn draft(&self) -> Result<Option<Draft>> {
        self.file(DRAFT_FILE).load()
    }

    /// Save the draft, replacing any previous one.
    pub fn save_draft(&self, draft: &Draft) -> Result<()> {
        self.file(DRAFT_FILE).save(draft)
    }

    /// Discard the draft. Returns false when there was none.
    pub fn clear_draft(&self) -> Result<bool> {
        self.file::<Draft>(DRAFT_FILE).remove()
    }
}
