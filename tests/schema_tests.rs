// Integration tests for field-definition parsing and loading
use std::io::Write;

use formquill::schema::loader::{load_list_field, parse_field, parse_list_field};
use formquill::schema::{FieldControl, WidgetKind};
use formquill::value::Value;

const SECTIONS_YAML: &str = "\
name: sections
label: Sections
label_singular: section
add_to_top: true
collapsed: false
type_key: kind
types:
  - name: hero
    fields:
      - name: subtitle
        widget: string
  - name: quote
    fields:
      - name: text
        widget: text
      - name: attribution
        widget: string
";

#[test]
fn test_parse_list_field_reads_schema_and_options() {
    let list = parse_list_field(SECTIONS_YAML).unwrap();

    assert_eq!(list.schema.name, "sections");
    assert_eq!(list.schema.label.as_deref(), Some("Sections"));
    match &list.schema.control {
        FieldControl::TypedVariants(variants) => {
            assert_eq!(variants.len(), 2);
            assert_eq!(variants[1].fields.len(), 2);
        }
        other => panic!("expected typed variants, got {:?}", other),
    }

    assert!(list.options.allow_add);
    assert!(list.options.add_to_top);
    assert!(!list.options.collapsed);
    assert_eq!(list.options.label_singular.as_deref(), Some("section"));
    assert_eq!(list.options.type_key, "kind");
}

#[test]
fn test_option_defaults_when_unspecified() {
    let list = parse_list_field(
        r#"
name: tags
fields:
  - name: tag
"#,
    )
    .unwrap();

    assert!(list.options.allow_add);
    assert!(!list.options.add_to_top);
    assert!(list.options.collapsed);
    assert_eq!(list.options.label_singular, None);
    assert_eq!(list.options.type_key, "type");
}

#[test]
fn test_parse_field_with_nested_defaults() {
    let field = parse_field(
        r#"
name: seo
fields:
  - name: title
    widget: string
    default: Untitled
  - name: noindex
    widget: boolean
"#,
    )
    .unwrap();

    let FieldControl::ObjectFields(fields) = &field.control else {
        panic!("expected object fields");
    };
    assert_eq!(fields[0].default, Some(Value::from("Untitled")));
    assert_eq!(fields[1].control, FieldControl::Scalar(WidgetKind::Boolean));
}

#[test]
fn test_unknown_widget_kind_is_preserved_by_name() {
    let field = parse_field("name: cover\nwidget: image\n").unwrap();
    assert_eq!(
        field.control,
        FieldControl::Scalar(WidgetKind::Other("image".to_string()))
    );
}

#[test]
fn test_declaring_fields_and_types_together_is_rejected() {
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
    assert!(err.to_string().contains("both 'fields' and 'types'"));
}

#[test]
fn test_invalid_yaml_reports_context() {
    let err = parse_list_field("name: [unclosed").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse"));
}

#[test]
fn test_load_list_field_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SECTIONS_YAML.as_bytes()).unwrap();

    let list = load_list_field(file.path()).unwrap();
    assert_eq!(list.schema.name, "sections");
    assert_eq!(list.options.type_key, "kind");
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = load_list_field("/nonexistent/widget.yml").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/widget.yml"));
}
