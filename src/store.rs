//! Collection State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through `Collection` (see `crate::collection`), which reaches the state
//! via the `StateCell` seam so it can be driven without a reactive runtime.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::editor::EditorState;
use crate::models::{ImageRecord, RecordId};

/// What a mutating request is about, for the in-flight guard
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PendingTarget {
    NewRecord,
    Record(RecordId),
}

/// State of the collection view with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CollectionState {
    /// Records in server response order
    pub records: Vec<ImageRecord>,
    pub editor: EditorState,
    /// Targets with a mutating request outstanding
    pub in_flight: BTreeSet<PendingTarget>,
    /// Generation of the most recently issued list fetch
    pub fetch_generation: u64,
    /// Generation whose list is currently shown
    pub applied_generation: u64,
}

impl CollectionState {
    pub fn replace_records(&mut self, records: Vec<ImageRecord>) {
        self.records = records;
    }

    pub fn remove_record(&mut self, id: RecordId) {
        self.records.retain(|record| record.id != id);
    }

    /// Claim a target. Returns false if a request for it is already pending.
    pub fn begin(&mut self, target: PendingTarget) -> bool {
        self.in_flight.insert(target)
    }

    pub fn finish(&mut self, target: PendingTarget) {
        self.in_flight.remove(&target);
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply a fetched list unless a newer one has already been applied.
    /// A newer fetch that fails does not block an older success.
    pub fn apply_fetch(&mut self, generation: u64, records: Vec<ImageRecord>) -> bool {
        if generation <= self.applied_generation {
            return false;
        }
        self.applied_generation = generation;
        self.replace_records(records);
        true
    }
}

/// Type alias for the store
pub type AppStore = Store<CollectionState>;

/// Read and write access to the collection state
pub trait StateCell {
    /// Read without subscribing the caller
    fn peek<R>(&self, f: impl FnOnce(&CollectionState) -> R) -> R;

    fn modify<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R;
}

impl StateCell for AppStore {
    fn peek<R>(&self, f: impl FnOnce(&CollectionState) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}
