//! Event sink abstraction over the data layer.
//!
//! A tag-management runtime consumes an ordered, append-only sequence of
//! entries (the browser-global `dataLayer` in a web deployment). The core
//! never reads the sink back, so the seam is a single append operation;
//! production adapters forward entries to the real page-global, and
//! [`MemoryDataLayer`] backs tests and native consumers.

use serde_json::Value;
use std::sync::Mutex;

/// An append-only, ordered event sink.
///
/// Implementations must preserve append order: the clearing sentinel pushed
/// before an `ecommerce` event has to land immediately before it.
pub trait EventSink: Send + Sync {
    /// Appends one entry to the sink.
    fn push(&self, entry: Value);
}

/// An in-memory data layer.
///
/// Grows without bound for its lifetime, mirroring the page-global it stands
/// in for. Entries are observable through [`entries`](Self::entries), which
/// tests use to assert on emitted events.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::events::{EventSink, MemoryDataLayer};
/// use serde_json::json;
///
/// let layer = MemoryDataLayer::new();
/// layer.push(json!({"event": "view_item"}));
/// assert_eq!(layer.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDataLayer {
    entries: Mutex<Vec<Value>>,
}

impl MemoryDataLayer {
    /// Creates an empty data layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all entries in append order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<Value> {
        self.entries.lock().expect("data layer lock poisoned").clone()
    }

    /// Returns the number of entries.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("data layer lock poisoned").len()
    }

    /// Returns `true` if no entries have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryDataLayer {
    fn push(&self, entry: Value) {
        self.entries
            .lock()
            .expect("data layer lock poisoned")
            .push(entry);
    }
}
