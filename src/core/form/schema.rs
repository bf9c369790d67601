//! Static description of the fields a record form collects.

use super::values::FieldValues;
use crate::errors::AppResult;
use crate::models::choice::normalize;
use crate::models::record::RecordKind;
use crate::models::species::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Choice(&'static [&'static str]),
    MultiSelect(&'static [&'static str]),
    /// Computed from other fields, never entered.
    Derived,
}

/// How raw input is matched onto one of a choice field's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMatch {
    /// Case and separators are ignored.
    Label,
    /// Labels, plus the short species names ("cow", "pig", "ewe").
    Species,
}

impl ChoiceMatch {
    pub fn resolve(self, options: &[&'static str], value: &str) -> Option<&'static str> {
        let wanted = normalize(value);
        options
            .iter()
            .copied()
            .find(|o| normalize(o) == wanted)
            .or_else(|| match self {
                ChoiceMatch::Label => None,
                ChoiceMatch::Species => Species::parse(value)
                    .map(|s| s.label())
                    .filter(|label| options.contains(label)),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    When {
        field: &'static str,
        equals: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub visible: Visibility,
    pub matching: ChoiceMatch,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            visible: Visibility::Always,
            matching: ChoiceMatch::Label,
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldKind::Choice(options))
    }

    pub const fn multi(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldKind::MultiSelect(options))
    }

    pub const fn derived(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Derived)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accept species aliases as well as the labels.
    pub const fn species_aliases(mut self) -> Self {
        self.matching = ChoiceMatch::Species;
        self
    }

    /// Show (and validate) the field only when `field` currently equals `equals`.
    pub const fn when(mut self, field: &'static str, equals: &'static str) -> Self {
        self.visible = Visibility::When { field, equals };
        self
    }

    pub fn is_visible(&self, values: &FieldValues) -> bool {
        match self.visible {
            Visibility::Always => true,
            Visibility::When { field, equals } => values
                .get(field)
                .is_some_and(|v| v.eq_ignore_ascii_case(equals)),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self.kind, FieldKind::Derived)
    }
}

/// A record type that can be built from, and flattened back into, form fields.
pub trait FormRecord: Sized {
    fn schema() -> &'static [FieldSpec];

    /// Build the record from validated field values.
    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self>;

    /// Flatten into field values (derived fields excluded).
    fn to_fields(&self) -> FieldValues;
}

pub fn schema_for(kind: RecordKind) -> &'static [FieldSpec] {
    use crate::models::{
        breeding::BreedingRecord, feeding::FeedingRecord, health::HealthRecord,
        inventory::InventoryItem, livestock::Animal, production::ProductionRecord,
    };

    match kind {
        RecordKind::Livestock => Animal::schema(),
        RecordKind::Breeding => BreedingRecord::schema(),
        RecordKind::Health => HealthRecord::schema(),
        RecordKind::Feeding => FeedingRecord::schema(),
        RecordKind::Production => ProductionRecord::schema(),
        RecordKind::Inventory => InventoryItem::schema(),
    }
}

pub fn field_spec(kind: RecordKind, key: &str) -> Option<&'static FieldSpec> {
    schema_for(kind).iter().find(|f| f.key == key)
}
