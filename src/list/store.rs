//! The keyed collection store.
//!
//! [`KeyedCollectionStore`] owns the ordered pairing of stable item keys to
//! item values. Keys and values live in two arrays kept in lock-step: every
//! mutator updates both inside one `&mut self` call, so no state with
//! mismatched lengths is ever observable. Display order, key order and
//! value order are always the same order.
//!
//! # Example
//!
//! ```
//! use formquill::list::keys::SequentialKeys;
//! use formquill::list::store::KeyedCollectionStore;
//! use formquill::value::Value;
//!
//! let mut store = KeyedCollectionStore::with_values(
//!     Box::new(SequentialKeys::new()),
//!     vec![Value::from("a"), Value::from("b")],
//! );
//!
//! store.insert(Value::from("x"), true);
//! assert_eq!(
//!     store.values(),
//!     &[Value::from("x"), Value::from("a"), Value::from("b")]
//! );
//!
//! let from = store.keys()[2].clone();
//! let to = store.keys()[0].clone();
//! store.reorder(&from, &to);
//! assert_eq!(
//!     store.values(),
//!     &[Value::from("b"), Value::from("x"), Value::from("a")]
//! );
//! ```

use log::debug;

use super::keys::{ItemKey, KeyGenerator};
use crate::value::Value;

/// Ordered, keyed item storage for a list widget.
pub struct KeyedCollectionStore {
    keys: Vec<ItemKey>,
    values: Vec<Value>,
    keygen: Box<dyn KeyGenerator>,
}

impl std::fmt::Debug for KeyedCollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedCollectionStore")
            .field("keys", &self.keys)
            .field("values", &self.values)
            .finish()
    }
}

impl KeyedCollectionStore {
    /// Creates an empty store drawing keys from the given generator.
    pub fn new(keygen: Box<dyn KeyGenerator>) -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            keygen,
        }
    }

    /// Creates a store seeded from an initial value sequence, generating
    /// one fresh key per element.
    pub fn with_values(keygen: Box<dyn KeyGenerator>, values: Vec<Value>) -> Self {
        let mut store = Self::new(keygen);
        store.keys = values.iter().map(|_| store.keygen.next_key()).collect();
        store.values = values;
        store
    }

    /// Inserts a value under a freshly generated key, at the top or the
    /// bottom, and returns the new ordered value sequence.
    pub fn insert(&mut self, value: Value, at_top: bool) -> &[Value] {
        let key = self.keygen.next_key();
        if at_top {
            self.keys.insert(0, key);
            self.values.insert(0, value);
        } else {
            self.keys.push(key);
            self.values.push(value);
        }
        &self.values
    }

    /// Removes the pair at `index`, preserving the relative order of the
    /// rest. An out-of-range index is a no-op: UI events may be dispatched
    /// against a snapshot that is already stale, and must not corrupt
    /// state. Returns whether anything was removed.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            debug!(
                "remove index {} out of range for {} items",
                index,
                self.values.len()
            );
            return false;
        }
        self.keys.remove(index);
        self.values.remove(index);
        true
    }

    /// Moves the item identified by `from` to the position of the item
    /// identified by `to`, shifting the elements between them by one. Keys
    /// and values are permuted by the same index mapping. A self-move or a
    /// key no longer present is a no-op. Returns whether the order changed.
    pub fn reorder(&mut self, from: &ItemKey, to: &ItemKey) -> bool {
        if from == to {
            return false;
        }
        let (Some(from_index), Some(to_index)) = (self.index_of(from), self.index_of(to))
        else {
            debug!("reorder references a key no longer present");
            return false;
        };

        array_move(&mut self.keys, from_index, to_index);
        array_move(&mut self.values, from_index, to_index);
        true
    }

    /// Discards every key and generates fresh ones for a replacement value
    /// sequence. Used when the owning form resets the value wholesale;
    /// item identity is intentionally not carried across a reset.
    pub fn reseed(&mut self, values: Vec<Value>) {
        self.keys = values.iter().map(|_| self.keygen.next_key()).collect();
        self.values = values;
    }

    /// Returns the position of a key, if it is still present.
    pub fn index_of(&self, key: &ItemKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// The ordered value sequence (the projection handed to subscribers).
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The ordered key sequence.
    pub fn keys(&self) -> &[ItemKey] {
        &self.keys
    }

    /// Iterates the ordered `(key, value)` pairs.
    pub fn items(&self) -> impl Iterator<Item = (&ItemKey, &Value)> {
        self.keys.iter().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Moves `items[from]` to position `to`, shifting the elements between the
/// two positions by one to fill the gap. The insertion index is interpreted
/// against the array after removal.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}
