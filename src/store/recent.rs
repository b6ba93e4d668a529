//! Bounded most-recent-first lists.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A most-recent-first list holding at most `capacity` records.
///
/// Pushing a record whose key is already present moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Keyed> RecentList<T> {
    /// Create an empty list.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Wrap stored records, dropping duplicates and anything past capacity.
    pub fn from_vec(items: Vec<T>, capacity: usize) -> Self {
        let mut list = Self::new(capacity);
        for item in items {
            if !list.contains(item.key()) {
                list.items.push(item);
            }
        }
        list.items.truncate(capacity);
        list
    }

    /// Insert a record at the front, replacing any record with the same key.
    pub fn push(&mut self, item: T) {
        self.items.retain(|existing| existing.key() != item.key());
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }

    /// Remove the record with a key.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(index))
    }

    /// Get the record with a key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records, newest first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
