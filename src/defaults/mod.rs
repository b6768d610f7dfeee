//! Default-value synthesis for newly inserted items.
//!
//! When a list widget adds an item, the item's starting value is derived
//! from the field schema: literal defaults are taken verbatim, scalar
//! fields without one get the zero value of their widget kind, and nested
//! field lists are synthesized recursively. The functions here are pure;
//! the same schema always yields the same value.
//!
//! # Example
//!
//! ```
//! use formquill::defaults::synthesize;
//! use formquill::schema::{Field, WidgetKind};
//! use formquill::value::{Number, Value};
//!
//! let item = synthesize(&[
//!     Field::scalar("count", WidgetKind::Number),
//!     Field::scalar("active", WidgetKind::Boolean),
//! ]);
//!
//! let fields = item.as_object().unwrap();
//! assert_eq!(fields["count"], Value::Number(Number::Integer(0)));
//! assert_eq!(fields["active"], Value::Boolean(false));
//! ```

use indexmap::IndexMap;
use log::debug;

use crate::schema::{Field, FieldControl, VariantDef, WidgetKind};
use crate::value::{Number, Value};

/// Synthesizes the default item value for an ordered field list.
///
/// The result is an object keyed by field name, built by folding over the
/// fields in order:
///
/// - a field with nested fields is synthesized recursively; the result is
///   assigned under the field's name only when non-empty, otherwise the key
///   is omitted entirely so emptiness checks downstream treat it as absent;
/// - a scalar field with a non-empty literal default gets it verbatim;
/// - a scalar field without one gets the zero value of its kind:
///   `string`/`text` the empty string, `boolean` false, `number` zero;
///   kinds outside that set synthesize nothing and the key is omitted;
/// - a nested mixed-type field has no single default shape; its key is
///   omitted.
pub fn synthesize(fields: &[Field]) -> Value {
    synthesize_with_seed(fields, IndexMap::new())
}

/// Synthesizes into a pre-populated accumulator.
///
/// The seed entries survive even when the fields produce no output of
/// their own; [`resolve_variant`] relies on this to keep the type
/// discriminator on otherwise-empty items.
pub fn synthesize_with_seed(fields: &[Field], seed: IndexMap<String, Value>) -> Value {
    let mut out = seed;

    for field in fields {
        match &field.control {
            FieldControl::ObjectFields(nested) => {
                let sub = synthesize(nested);
                if !sub.is_empty() {
                    out.insert(field.name.clone(), sub);
                }
            }
            FieldControl::TypedVariants(_) => {}
            FieldControl::Scalar(kind) => match &field.default {
                Some(default) if !default.is_empty() => {
                    out.insert(field.name.clone(), default.clone());
                }
                _ => {
                    if let Some(zero) = zero_value(kind) {
                        out.insert(field.name.clone(), zero);
                    }
                }
            },
        }
    }

    Value::Object(out)
}

/// Resolves a mixed-type list's variant name to a default item value.
///
/// The lookup is an exact name match. A miss degrades to an empty object,
/// so the caller still gets a visible item to fill in. On a hit the variant's
/// fields are synthesized over a seed that already carries
/// `{type_key: type_name}`, so the discriminator is always present on the
/// result.
pub fn resolve_variant(variants: &[VariantDef], type_name: &str, type_key: &str) -> Value {
    let Some(variant) = variants.iter().find(|v| v.name == type_name) else {
        debug!("no list item type named '{}'", type_name);
        return Value::empty_object();
    };

    let mut seed = IndexMap::new();
    seed.insert(
        type_key.to_string(),
        Value::String(type_name.to_string()),
    );
    synthesize_with_seed(&variant.fields, seed)
}

/// Returns the zero value for a scalar widget kind, if it has one.
fn zero_value(kind: &WidgetKind) -> Option<Value> {
    match kind {
        WidgetKind::String | WidgetKind::Text => Some(Value::String(String::new())),
        WidgetKind::Boolean => Some(Value::Boolean(false)),
        WidgetKind::Number => Some(Value::Number(Number::Integer(0))),
        WidgetKind::Other(_) => None,
    }
}
