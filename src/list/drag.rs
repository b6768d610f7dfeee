//! Drag-end events from an external gesture source.
//!
//! The core knows nothing about pointer tracking or animation; a completed
//! drag arrives as a pair of item keys. [`DragEnd::movement`] is the single
//! place the event vocabulary is checked before it reaches the store.

use super::keys::ItemKey;

/// A completed drag gesture: the dragged item and where it was dropped.
///
/// The destination is absent when the drop landed outside any target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: ItemKey,
    pub destination: Option<ItemKey>,
}

impl DragEnd {
    pub fn new(source: ItemKey, destination: Option<ItemKey>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Builds an event from raw element ids as a gesture library reports
    /// them.
    pub fn from_ids(source: &str, destination: Option<&str>) -> Self {
        Self {
            source: ItemKey::new(source),
            destination: destination.map(ItemKey::new),
        }
    }

    /// Returns the `(from, to)` keys when the event describes an actual
    /// move. A missing destination or a drop back onto the source yields
    /// `None`.
    pub fn movement(&self) -> Option<(&ItemKey, &ItemKey)> {
        match &self.destination {
            Some(destination) if *destination != self.source => {
                Some((&self.source, destination))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_requires_destination() {
        let event = DragEnd::from_ids("a", None);
        assert_eq!(event.movement(), None);
    }

    #[test]
    fn test_movement_ignores_drop_on_self() {
        let event = DragEnd::from_ids("a", Some("a"));
        assert_eq!(event.movement(), None);
    }

    #[test]
    fn test_movement_yields_pair() {
        let event = DragEnd::from_ids("a", Some("b"));
        let (from, to) = event.movement().unwrap();
        assert_eq!(from.as_str(), "a");
        assert_eq!(to.as_str(), "b");
    }
}
