use crate::core::form::schema::{FieldKind, Visibility, schema_for};
use crate::models::record::RecordKind;
use crate::utils::table::Table;

/// Printable description of the form fields of a kind.
pub fn describe_fields(kind: RecordKind) -> Table {
    let mut table = Table::new(vec!["Field", "Label", "Type", "Required", "Shown"]);

    for spec in schema_for(kind) {
        let kind_label = match spec.kind {
            FieldKind::Text => "text".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::Date => "date".to_string(),
            FieldKind::Choice(options) => format!("one of: {}", options.join(" | ")),
            FieldKind::MultiSelect(options) => format!("any of: {}", options.join(", ")),
            FieldKind::Derived => "computed".to_string(),
        };
        let shown = match spec.visible {
            Visibility::Always => "always".to_string(),
            Visibility::When { field, equals } => format!("{field} = {equals}"),
        };

        table.add_row(vec![
            spec.key.to_string(),
            spec.label.to_string(),
            kind_label,
            if spec.required { "yes" } else { "" }.to_string(),
            shown,
        ]);
    }
    table
}
