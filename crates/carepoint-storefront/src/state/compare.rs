//! # Compare State

use std::sync::{Arc, Mutex};

use carepoint_core::CompareList;

/// Shared compare-list state for the session.
#[derive(Debug, Clone)]
pub struct CompareState {
    compare: Arc<Mutex<CompareList>>,
}

impl CompareState {
    pub fn new() -> Self {
        CompareState {
            compare: Arc::new(Mutex::new(CompareList::default())),
        }
    }

    /// Creates compare state hydrated from a persisted list.
    pub fn from_list(compare: CompareList) -> Self {
        CompareState {
            compare: Arc::new(Mutex::new(compare)),
        }
    }

    pub fn with_list<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CompareList) -> R,
    {
        let compare = self.compare.lock().expect("Compare mutex poisoned");
        f(&compare)
    }

    pub fn with_list_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CompareList) -> R,
    {
        let mut compare = self.compare.lock().expect("Compare mutex poisoned");
        f(&mut compare)
    }
}

impl Default for CompareState {
    fn default() -> Self {
        Self::new()
    }
}
