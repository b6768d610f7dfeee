//! Field-definition loading.
//!
//! Widget schemas arrive as YAML, the same shape the surrounding editing
//! surface is configured with: a map with `name`, an optional `widget`
//! kind, an optional literal `default`, and either nested `fields` or named
//! `types`. This module parses those definitions into [`Field`] and
//! [`ListField`] values.
//!
//! ```
//! use formquill::schema::loader::parse_list_field;
//!
//! let list = parse_list_field(
//!     r#"
//! name: authors
//! label_singular: author
//! fields:
//!   - name: name
//!     widget: string
//!   - name: active
//!     widget: boolean
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(list.schema.name, "authors");
//! assert_eq!(list.options.label_singular.as_deref(), Some("author"));
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Field, FieldControl, ListField, ListOptions, VariantDef, WidgetKind};
use crate::value::Value;

/// Raw field definition as written in YAML, before shape validation.
#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(default)]
    widget: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    default: Option<serde_yaml::Value>,
    #[serde(default)]
    fields: Option<Vec<RawField>>,
    #[serde(default)]
    types: Option<Vec<RawVariant>>,
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

impl RawField {
    /// Validates the shape and converts to the in-memory schema.
    fn into_field(self) -> Result<Field> {
        let control = match (self.fields, self.types) {
            (Some(_), Some(_)) => {
                bail!("field '{}' declares both 'fields' and 'types'", self.name)
            }
            (Some(fields), None) => FieldControl::ObjectFields(
                fields
                    .into_iter()
                    .map(RawField::into_field)
                    .collect::<Result<Vec<_>>>()?,
            ),
            (None, Some(types)) => FieldControl::TypedVariants(
                types
                    .into_iter()
                    .map(RawVariant::into_variant)
                    .collect::<Result<Vec<_>>>()?,
            ),
            (None, None) => {
                let kind = WidgetKind::from_name(self.widget.as_deref().unwrap_or("string"));
                FieldControl::Scalar(kind)
            }
        };

        Ok(Field {
            name: self.name,
            label: self.label,
            default: self.default.as_ref().map(Value::from_yaml),
            control,
        })
    }
}

impl RawVariant {
    fn into_variant(self) -> Result<VariantDef> {
        Ok(VariantDef {
            name: self.name,
            label: self.label,
            fields: self
                .fields
                .into_iter()
                .map(RawField::into_field)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

/// Parses a single YAML field definition.
pub fn parse_field(content: &str) -> Result<Field> {
    let raw: RawField =
        serde_yaml::from_str(content).context("Failed to parse field definition")?;
    raw.into_field()
}

/// Parses a YAML list-widget definition: the field schema plus its options.
///
/// Option keys (`allow_add`, `add_to_top`, `collapsed`, `label_singular`,
/// `type_key`) sit on the same map as the schema keys and all have
/// defaults.
pub fn parse_list_field(content: &str) -> Result<ListField> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(content).context("Failed to parse list field definition")?;

    let raw: RawField = serde_yaml::from_value(document.clone())
        .context("Failed to parse list field definition")?;
    let options: ListOptions =
        serde_yaml::from_value(document).context("Failed to parse list options")?;

    Ok(ListField {
        schema: raw.into_field()?,
        options,
    })
}

/// Loads and parses a list-widget definition from a YAML file.
pub fn load_list_field<P: AsRef<Path>>(path: P) -> Result<ListField> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    parse_list_field(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn test_parse_scalar_field() {
        let field = parse_field("name: title\nwidget: string\n").unwrap();
        assert_eq!(field.name, "title");
        assert_eq!(field.control, FieldControl::Scalar(WidgetKind::String));
        assert_eq!(field.default, None);
    }

    #[test]
    fn test_widget_defaults_to_string() {
        let field = parse_field("name: title\n").unwrap();
        assert_eq!(field.control, FieldControl::Scalar(WidgetKind::String));
    }

    #[test]
    fn test_parse_literal_default() {
        let field = parse_field("name: count\nwidget: number\ndefault: 5\n").unwrap();
        assert_eq!(field.default, Some(Value::Number(Number::Integer(5))));
    }

    #[test]
    fn test_parse_nested_fields() {
        let field = parse_field(
            r#"
name: author
fields:
  - name: name
    widget: string
  - name: bio
    widget: text
"#,
        )
        .unwrap();

        match field.control {
            FieldControl::ObjectFields(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].name, "name");
                assert_eq!(fields[1].control, FieldControl::Scalar(WidgetKind::Text));
            }
            other => panic!("expected object fields, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_typed_variants() {
        let field = parse_field(
            r#"
name: sections
types:
  - name: hero
    fields:
      - name: subtitle
        widget: string
  - name: gallery
    fields:
      - name: images
        widget: image
"#,
        )
        .unwrap();

        match field.control {
            FieldControl::TypedVariants(variants) => {
                assert_eq!(variants.len(), 2);
                assert_eq!(variants[0].name, "hero");
                assert_eq!(
                    variants[1].fields[0].control,
                    FieldControl::Scalar(WidgetKind::Other("image".to_string()))
                );
            }
            other => panic!("expected typed variants, got {:?}", other),
        }
    }

    #[test]
    fn test_both_fields_and_types_rejected() {
        let err = parse_field(
            r#"
name: broken
fields:
  - name: a
types:
  - name: b
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
