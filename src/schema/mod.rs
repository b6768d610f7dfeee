//! Field definitions for schema-driven widgets.
//!
//! A widget is configured by a recursive [`Field`] description: each field
//! names itself, optionally carries a literal default, and is one of three
//! shapes: a scalar leaf, a list of nested fields (object-shaped items), or
//! a set of named type variants (mixed-type items). The shape is a tagged
//! enum, so a definition can never claim to be two shapes at once.
//!
//! # Example
//!
//! ```
//! use formquill::schema::{Field, FieldControl, WidgetKind};
//!
//! let authors = Field::object(
//!     "authors",
//!     vec![
//!         Field::scalar("name", WidgetKind::String),
//!         Field::scalar("active", WidgetKind::Boolean),
//!     ],
//! );
//!
//! assert!(matches!(authors.control, FieldControl::ObjectFields(_)));
//! ```

pub mod loader;

use serde::Deserialize;

use crate::value::Value;

/// The scalar semantics of a leaf field.
///
/// Kinds outside the known set are preserved by name; they synthesize no
/// default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    String,
    Text,
    Boolean,
    Number,
    Other(String),
}

impl WidgetKind {
    /// Maps a widget name from a field definition to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => WidgetKind::String,
            "text" => WidgetKind::Text,
            "boolean" => WidgetKind::Boolean,
            "number" => WidgetKind::Number,
            other => WidgetKind::Other(other.to_string()),
        }
    }

    /// Returns the widget name as written in a field definition.
    pub fn name(&self) -> &str {
        match self {
            WidgetKind::String => "string",
            WidgetKind::Text => "text",
            WidgetKind::Boolean => "boolean",
            WidgetKind::Number => "number",
            WidgetKind::Other(name) => name,
        }
    }
}

/// The shape of a field: scalar leaf, nested object fields, or named type
/// variants.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    /// A scalar leaf with the given widget semantics
    Scalar(WidgetKind),
    /// Object-shaped items built from an ordered list of nested fields
    ObjectFields(Vec<Field>),
    /// Mixed-type items conforming to one of several named variants
    TypedVariants(Vec<VariantDef>),
}

/// One named, typed field in a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Identifier, unique among siblings
    pub name: String,
    /// Display label; the name is used when absent
    pub label: Option<String>,
    /// Literal default from the field definition
    pub default: Option<Value>,
    /// The field's shape
    pub control: FieldControl,
}

impl Field {
    /// Creates a scalar leaf field.
    pub fn scalar(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            default: None,
            control: FieldControl::Scalar(kind),
        }
    }

    /// Creates a scalar leaf field with a literal default.
    pub fn scalar_with_default(
        name: impl Into<String>,
        kind: WidgetKind,
        default: Value,
    ) -> Self {
        Self {
            name: name.into(),
            label: None,
            default: Some(default),
            control: FieldControl::Scalar(kind),
        }
    }

    /// Creates a field whose items are objects built from nested fields.
    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            label: None,
            default: None,
            control: FieldControl::ObjectFields(fields),
        }
    }

    /// Creates a field whose items conform to one of several named variants.
    pub fn typed(name: impl Into<String>, variants: Vec<VariantDef>) -> Self {
        Self {
            name: name.into(),
            label: None,
            default: None,
            control: FieldControl::TypedVariants(variants),
        }
    }

    /// Returns the display label, falling back to the field name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// One named variant of a mixed-type list.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDef {
    /// The type name stored under the discriminator key
    pub name: String,
    /// Display label; the name is used when absent
    pub label: Option<String>,
    /// The fields an item of this type is built from
    pub fields: Vec<Field>,
}

impl VariantDef {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            label: None,
            fields,
        }
    }
}

/// Behavioral options of a list widget.
///
/// All fields have defaults matching the original editing surface, so a
/// definition only spells out what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListOptions {
    /// Whether the add button is offered at all
    #[serde(default = "default_allow_add")]
    pub allow_add: bool,

    /// Insert new items at the top instead of the bottom
    #[serde(default)]
    pub add_to_top: bool,

    /// Initial collapse state of the list body
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,

    /// Label used when the list holds exactly one item
    #[serde(default)]
    pub label_singular: Option<String>,

    /// Field name the selected variant's type name is stored under
    #[serde(default = "default_type_key")]
    pub type_key: String,
}

/// Returns the default for offering the add button.
fn default_allow_add() -> bool {
    true
}

/// Returns the default initial collapse state.
fn default_collapsed() -> bool {
    true
}

/// Returns the default discriminator key for mixed-type lists.
fn default_type_key() -> String {
    "type".to_string()
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            allow_add: default_allow_add(),
            add_to_top: false,
            collapsed: default_collapsed(),
            label_singular: None,
            type_key: default_type_key(),
        }
    }
}

/// A complete list-widget definition: the item schema plus its options.
#[derive(Debug, Clone, PartialEq)]
pub struct ListField {
    pub schema: Field,
    pub options: ListOptions,
}

impl ListField {
    /// Wraps a field with default options.
    pub fn new(schema: Field) -> Self {
        Self {
            schema,
            options: ListOptions::default(),
        }
    }

    /// Wraps a field with explicit options.
    pub fn with_options(schema: Field, options: ListOptions) -> Self {
        Self { schema, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_kind_round_trip() {
        assert_eq!(WidgetKind::from_name("string"), WidgetKind::String);
        assert_eq!(WidgetKind::from_name("text"), WidgetKind::Text);
        assert_eq!(WidgetKind::from_name("boolean"), WidgetKind::Boolean);
        assert_eq!(WidgetKind::from_name("number"), WidgetKind::Number);
        assert_eq!(
            WidgetKind::from_name("markdown"),
            WidgetKind::Other("markdown".to_string())
        );
        assert_eq!(WidgetKind::from_name("markdown").name(), "markdown");
        assert_eq!(WidgetKind::Boolean.name(), "boolean");
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let mut field = Field::scalar("title", WidgetKind::String);
        assert_eq!(field.display_label(), "title");

        field.label = Some("Title".to_string());
        assert_eq!(field.display_label(), "Title");
    }

    #[test]
    fn test_list_options_defaults() {
        let options = ListOptions::default();
        assert!(options.allow_add);
        assert!(!options.add_to_top);
        assert!(options.collapsed);
        assert_eq!(options.label_singular, None);
        assert_eq!(options.type_key, "type");
    }
}
