//! Stable item identity.
//!
//! Every list item is tracked by an opaque [`ItemKey`] assigned at creation
//! and never changed or reused. Key generation sits behind a trait so tests
//! can use a deterministic counter while production uses random UUIDs.

use uuid::Uuid;

/// An opaque, stable identifier for one list item.
///
/// Keys compare by value and are safe to hand to an external drag-event
/// source as element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source of fresh, unique item keys.
pub trait KeyGenerator {
    fn next_key(&mut self) -> ItemKey;
}

/// Production key source: random version-4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidKeys;

impl KeyGenerator for UuidKeys {
    fn next_key(&mut self) -> ItemKey {
        ItemKey(Uuid::new_v4().to_string())
    }
}

/// Deterministic key source for tests: `item-0`, `item-1`, ...
#[derive(Debug, Default)]
pub struct SequentialKeys {
    next: u64,
}

impl SequentialKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyGenerator for SequentialKeys {
    fn next_key(&mut self) -> ItemKey {
        let key = ItemKey(format!("item-{}", self.next));
        self.next += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_keys_are_distinct_and_ordered() {
        let mut keys = SequentialKeys::new();
        assert_eq!(keys.next_key().as_str(), "item-0");
        assert_eq!(keys.next_key().as_str(), "item-1");
        assert_eq!(keys.next_key().as_str(), "item-2");
    }

    #[test]
    fn test_uuid_keys_are_distinct() {
        let mut keys = UuidKeys;
        let a = keys.next_key();
        let b = keys.next_key();
        assert_ne!(a, b);
    }
}
