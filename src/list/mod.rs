//! The list widget controller.
//!
//! [`ListWidget`] is the top-level piece that binds a list field definition
//! to editable state: it owns the keyed collection store, the collapse
//! flag and the subscriber lists, and exposes the discrete operations the
//! editing surface dispatches: add, add-by-type, remove, drag-end,
//! collapse toggle, reset. Every mutation updates the store and notifies
//! subscribers in the same synchronous step; there is no separate
//! re-derivation that could observe a stale key/value pairing.
//!
//! A widget built on a schema node with neither nested fields nor type
//! variants is inert: it renders nothing and accepts no mutations. A
//! malformed definition must never take the editing surface down with it.
//!
//! # Example
//!
//! ```
//! use formquill::list::keys::SequentialKeys;
//! use formquill::list::ListWidget;
//! use formquill::schema::{Field, ListField, WidgetKind};
//!
//! let field = ListField::new(Field::object(
//!     "authors",
//!     vec![Field::scalar("name", WidgetKind::String)],
//! ));
//! let mut widget = ListWidget::new(field, None, Box::new(SequentialKeys::new()));
//!
//! widget.handle_add();
//! assert_eq!(widget.len(), 1);
//! assert!(!widget.is_collapsed());
//! ```

pub mod drag;
pub mod emitter;
pub mod keys;
pub mod store;

use crate::defaults::{resolve_variant, synthesize};
use crate::i18n::Translate;
use crate::schema::{FieldControl, ListField};
use crate::value::Value;

use self::drag::DragEnd;
use self::emitter::{ChangeEmitter, CollapseEmitter};
use self::keys::{ItemKey, KeyGenerator};
use self::store::KeyedCollectionStore;

/// How a list's items are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Homogeneous items built from one nested field list
    Multiple,
    /// Heterogeneous items conforming to one of several named variants
    Mixed,
}

/// Schema-bound, keyed, reorderable list state.
#[derive(Debug)]
pub struct ListWidget {
    field: ListField,
    kind: Option<ListKind>,
    store: KeyedCollectionStore,
    collapsed: bool,
    changes: ChangeEmitter,
    collapse_events: CollapseEmitter,
}

impl ListWidget {
    /// Mounts a widget: detects the list kind from the schema and seeds the
    /// store from the initial value, one fresh key per element. An absent
    /// initial value seeds an empty collection.
    pub fn new(
        field: ListField,
        initial: Option<Vec<Value>>,
        keygen: Box<dyn KeyGenerator>,
    ) -> Self {
        let kind = match &field.schema.control {
            FieldControl::ObjectFields(_) => Some(ListKind::Multiple),
            FieldControl::TypedVariants(_) => Some(ListKind::Mixed),
            FieldControl::Scalar(_) => None,
        };
        let collapsed = field.options.collapsed;
        let store = KeyedCollectionStore::with_values(keygen, initial.unwrap_or_default());

        Self {
            field,
            kind,
            store,
            collapsed,
            changes: ChangeEmitter::new(),
            collapse_events: CollapseEmitter::new(),
        }
    }

    /// The detected item shape, or `None` for an inert widget.
    pub fn kind(&self) -> Option<ListKind> {
        self.kind
    }

    /// Whether the schema node could not be interpreted as a list.
    pub fn is_inert(&self) -> bool {
        self.kind.is_none()
    }

    /// Registers a subscriber for the ordered value sequence.
    pub fn on_change(&mut self, listener: impl FnMut(&[Value]) + 'static) {
        self.changes.subscribe(listener);
    }

    /// Registers a subscriber for collapse-state changes.
    pub fn on_collapse_toggle(&mut self, listener: impl FnMut(bool) + 'static) {
        self.collapse_events.subscribe(listener);
    }

    /// Adds a default-valued item to a homogeneous list.
    pub fn handle_add(&mut self) {
        if self.kind != Some(ListKind::Multiple) {
            return;
        }
        let FieldControl::ObjectFields(fields) = &self.field.schema.control else {
            return;
        };
        let item = synthesize(fields);
        self.add_value(item);
    }

    /// Adds a default-valued item of the named type to a mixed list.
    ///
    /// An unknown type name still inserts an (empty) item to fill in.
    pub fn handle_add_type(&mut self, type_name: &str) {
        if self.kind != Some(ListKind::Mixed) {
            return;
        }
        let FieldControl::TypedVariants(variants) = &self.field.schema.control else {
            return;
        };
        let item = resolve_variant(variants, type_name, &self.field.options.type_key);
        self.add_value(item);
    }

    /// Inserts a value per the `add_to_top` option, forces the list open
    /// and notifies subscribers. Both add paths route through here, so the
    /// force-open rule cannot be bypassed.
    pub fn add_value(&mut self, value: Value) {
        if self.is_inert() {
            return;
        }
        self.store.insert(value, self.field.options.add_to_top);
        if self.collapsed {
            self.collapsed = false;
            self.collapse_events.emit(false);
        }
        self.changes.emit(self.store.values());
    }

    /// Removes the item at `index`. A stale index is a no-op and does not
    /// notify.
    pub fn handle_remove(&mut self, index: usize) {
        if self.is_inert() {
            return;
        }
        if self.store.remove_at(index) {
            self.changes.emit(self.store.values());
        }
    }

    /// Applies a completed drag gesture. Events that describe no actual
    /// move, or reference keys no longer present, change nothing and do
    /// not notify.
    pub fn handle_drag_end(&mut self, event: &DragEnd) {
        if self.is_inert() {
            return;
        }
        let Some((from, to)) = event.movement() else {
            return;
        };
        if self.store.reorder(from, to) {
            self.changes.emit(self.store.values());
        }
    }

    /// Flips the collapse flag and notifies collapse subscribers.
    pub fn toggle_collapsed(&mut self) {
        if self.is_inert() {
            return;
        }
        self.collapsed = !self.collapsed;
        self.collapse_events.emit(self.collapsed);
    }

    /// Replaces the value wholesale, discarding all item identity and
    /// generating fresh keys, then notifies subscribers. This is the
    /// resync path for programmatic resets from the owning form.
    pub fn reset(&mut self, values: Option<Vec<Value>>) {
        if self.is_inert() {
            return;
        }
        self.store.reseed(values.unwrap_or_default());
        self.changes.emit(self.store.values());
    }

    /// The ordered value sequence.
    pub fn values(&self) -> &[Value] {
        self.store.values()
    }

    /// The ordered item keys, in display order.
    pub fn keys(&self) -> &[ItemKey] {
        self.store.keys()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the surface should offer an add button.
    pub fn allow_add(&self) -> bool {
        self.field.options.allow_add
    }

    /// The configured label, falling back to the field name.
    pub fn label(&self) -> &str {
        self.field.schema.display_label()
    }

    /// The singular label, falling back to the plural one.
    pub fn label_singular(&self) -> &str {
        self.field
            .options
            .label_singular
            .as_deref()
            .unwrap_or_else(|| self.label())
    }

    /// The header line: item count plus the fitting label form.
    pub fn heading(&self) -> String {
        let label = if self.len() == 1 {
            self.label_singular()
        } else {
            self.label()
        };
        format!("{} {}", self.len(), label)
    }

    /// The add-button text, resolved through the translation lookup.
    pub fn add_label(&self, t: &dyn Translate) -> String {
        format!("{} {}", t.t("list.add"), self.label_singular())
    }
}
