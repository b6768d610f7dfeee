//! FormQuill - schema-driven form state with keyed, reorderable list
//! controllers.
//!
//! The crate binds recursive field definitions ([`schema`]) to editable
//! values ([`value`]) and keeps list-style widgets consistent while they
//! are mutated: every item carries a stable key assigned at creation, order
//! is authoritative across keys and values, new items get schema-derived
//! defaults ([`defaults`]), and every committed mutation is pushed to the
//! owning form as a complete replacement value sequence ([`list`]).
//!
//! # Example
//!
//! ```
//! use formquill::list::drag::DragEnd;
//! use formquill::list::keys::SequentialKeys;
//! use formquill::list::ListWidget;
//! use formquill::schema::loader::parse_list_field;
//!
//! let field = parse_list_field(
//!     r#"
//! name: authors
//! fields:
//!   - name: name
//!     widget: string
//! "#,
//! )
//! .unwrap();
//!
//! let mut widget = ListWidget::new(field, None, Box::new(SequentialKeys::new()));
//! widget.handle_add();
//! widget.handle_add();
//!
//! let keys = widget.keys().to_vec();
//! widget.handle_drag_end(&DragEnd::new(keys[0].clone(), Some(keys[1].clone())));
//! assert_eq!(widget.len(), 2);
//! ```

pub mod defaults;
pub mod i18n;
pub mod list;
pub mod schema;
pub mod value;

pub use list::ListWidget;
pub use schema::{Field, FieldControl, ListField, ListOptions, VariantDef, WidgetKind};
pub use value::{Number, Value};
