//! In-memory entry store
//!
//! Holds the committed entries in insertion order together with the single
//! active draft. All mutation goes through this type.

use crate::domain::{Draft, DraftValidator, Entry, EntryId, EntryInput};
use chrono::Utc;

#[derive(Debug)]
pub struct EntryStore {
    entries: Vec<Entry>,
    draft: Draft,
    next_id: u64,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        EntryStore {
            entries: Vec::new(),
            draft: Draft::default(),
            next_id: 1,
        }
    }

    /// Append a new entry built from `input` and return it.
    ///
    /// The caller is expected to have checked the input with
    /// [`DraftValidator::is_submittable`].
    pub fn add(&mut self, input: EntryInput) -> Entry {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;

        let entry = Entry::from_input(id, input, Utc::now());
        tracing::debug!(id = id.value(), place = entry.place(), "entry added");
        self.entries.push(entry.clone());
        entry
    }

    /// Remove the entry with `id`. Returns false if no such entry exists.
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(id = id.value(), "entry removed");
                true
            }
            None => {
                tracing::debug!(id = id.value(), "remove ignored, no such entry");
                false
            }
        }
    }

    /// Entries in insertion order
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Discard the current draft and return the fresh default one
    pub fn reset_draft(&mut self) -> &Draft {
        self.draft = Draft::default();
        &self.draft
    }

    /// Commit the draft if it passes validation.
    ///
    /// On success the draft is reset. Otherwise store and draft are untouched.
    pub fn commit_draft(&mut self) -> Option<Entry> {
        if !DraftValidator::is_submittable(&self.draft) {
            return None;
        }
        let input = std::mem::take(&mut self.draft);
        Some(self.add(input))
    }
}
