use chrono::Utc;

use crate::io::kv::{ITEMS_KEY, KvStore};
use crate::model::filter::Filter;
use crate::model::item::Item;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item text is empty")]
    EmptyText,
}

/// The authoritative in-memory item collection, persisted wholesale through
/// a key-value store after every mutation. The view layer never touches the
/// items directly — everything goes through these operations.
pub struct ItemStore {
    items: Vec<Item>,
    kv: Box<dyn KvStore>,
}

impl ItemStore {
    /// Load the collection from the key-value store. Absent or malformed
    /// data is an empty collection, never an error.
    pub fn load(kv: Box<dyn KvStore>) -> Self {
        let items = kv
            .load(ITEMS_KEY)
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        ItemStore { items, kv }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed (drives the task counter)
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// The filtered projection, newest first. Ties on the timestamp fall
    /// back to id order so the projection is deterministic.
    pub fn projection(&self, filter: Filter) -> Vec<&Item> {
        let mut shown: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| filter.matches(item.completed))
            .collect();
        shown.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        shown
    }

    /// Add a new item from user input. The text is trimmed; empty or
    /// whitespace-only input is rejected and nothing changes.
    pub fn add(&mut self, text: &str) -> Result<Item, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let item = Item::new(self.fresh_id(), text.to_string(), Utc::now());
        self.items.push(item.clone());
        self.persist();
        Ok(item)
    }

    /// Flip the completed flag for `id`. Missing ids are a no-op.
    pub fn toggle(&mut self, id: i64) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.completed = !item.completed;
        self.persist();
    }

    /// Remove the item with `id`. Missing ids are a no-op.
    pub fn delete(&mut self, id: i64) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Remove every completed item, preserving the relative order of the
    /// survivors.
    pub fn clear_completed(&mut self) {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Move the item at position `from` in the current projection for
    /// `filter` to position `to`, permuting the underlying collection.
    /// Out-of-range indices and `from == to` are no-ops.
    ///
    /// The projection itself stays sorted newest-first, so the gesture is a
    /// best-effort session affordance rather than a durable ordering.
    pub fn reorder(&mut self, filter: Filter, from: usize, to: usize) {
        let shown: Vec<i64> = self
            .projection(filter)
            .iter()
            .map(|item| item.id)
            .collect();
        if from == to || from >= shown.len() || to >= shown.len() {
            return;
        }
        let src_id = shown[from];
        let dst_id = shown[to];

        let Some(src_pos) = self.items.iter().position(|item| item.id == src_id) else {
            return;
        };
        let moved = self.items.remove(src_pos);
        let dst_pos = self
            .items
            .iter()
            .position(|item| item.id == dst_id)
            .unwrap_or(self.items.len());
        self.items.insert(dst_pos, moved);
        self.persist();
    }

    /// A unique id derived from the current time (epoch milliseconds),
    /// bumped past the newest existing id when the clock collides.
    fn fresh_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        if now > max { now } else { max + 1 }
    }

    /// Write the whole collection back to the key-value store. Best-effort:
    /// the in-memory state stays authoritative for the session, so a failed
    /// write is swallowed rather than surfaced.
    fn persist(&mut self) {
        if let Ok(text) = serde_json::to_string(&self.items) {
            let _ = self.kv.save(ITEMS_KEY, &text);
        }
    }
}
