//! Record form as an explicit state value plus a pure reducer.
//!
//! `reduce(state, action)` never mutates its input. Derived fields are
//! recomputed after every change; hidden conditional fields are neither
//! validated nor carried into the built record.

pub mod schema;
pub mod values;

use crate::core::calculator::numeric::sanitize_numeric;
use crate::errors::{AppError, AppResult};
use crate::models::breeding::{BreedingRecord, BreedingStatus};
use crate::models::feeding::FeedingRecord;
use crate::models::health::HealthRecord;
use crate::models::inventory::InventoryItem;
use crate::models::livestock::Animal;
use crate::models::production::ProductionRecord;
use crate::models::record::{FarmRecord, Record, RecordKind};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use schema::{FieldKind, FieldSpec, FormRecord, field_spec, schema_for};
use values::FieldValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetField { key: String, value: String },
    /// Date picker callback.
    PickDate { key: String, date: NaiveDate },
    /// Add or remove one value of a multi-select field.
    ToggleChoice { key: String, value: String },
    Submit,
    /// Back to the values the form was opened with.
    Reset,
}

impl FormAction {
    pub fn set(key: &str, value: &str) -> Self {
        FormAction::SetField {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Parse a `key=value` assignment as given on the command line.
    pub fn parse_assignment(s: &str) -> AppResult<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| AppError::InvalidField(format!("expected key=value, got '{s}'")))?;
        if key.trim().is_empty() {
            return Err(AppError::InvalidField(s.to_string()));
        }
        Ok(Self::set(key.trim(), value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub kind: RecordKind,
    pub id: Option<String>,
    pub phase: FormPhase,
    pub errors: Vec<String>,
    values: FieldValues,
    initial: FieldValues,
}

impl FormState {
    /// Empty form for a new record.
    pub fn new(kind: RecordKind) -> Self {
        Self::seeded(kind, None, FieldValues::new())
    }

    /// Edit form pre-filled from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self::seeded(
            record.kind(),
            Some(record.id().to_string()),
            record_to_fields(record),
        )
    }

    fn seeded(kind: RecordKind, id: Option<String>, mut values: FieldValues) -> Self {
        derive_fields(kind, &mut values);
        Self {
            kind,
            id,
            phase: FormPhase::Editing,
            errors: Vec::new(),
            initial: values.clone(),
            values,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key)
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        schema_for(self.kind)
    }

    /// Fields currently shown, in schema order.
    pub fn visible_fields(&self) -> Vec<&'static FieldSpec> {
        self.schema()
            .iter()
            .filter(|f| f.is_visible(&self.values))
            .collect()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Values of visible, non-derived fields only.
    fn visible_values(&self) -> FieldValues {
        self.visible_fields()
            .into_iter()
            .filter(|f| !f.is_derived())
            .filter_map(|f| self.values.get(f.key).map(|v| (f.key, v.to_string())))
            .collect()
    }
}

/// Apply one action and return the next state.
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    next.errors.clear();

    match action {
        FormAction::SetField { key, value } => match editable_spec(state.kind, &key) {
            Ok(spec) => {
                let stored = match spec.kind {
                    FieldKind::Number => sanitize_numeric(&value),
                    FieldKind::Choice(options) => canonical_choice(spec, options, &value),
                    FieldKind::MultiSelect(options) => value
                        .split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(|v| canonical_choice(spec, options, v))
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => value.trim().to_string(),
                };
                if stored.is_empty() {
                    next.values.remove(spec.key);
                } else {
                    next.values.set(spec.key, stored);
                }
                touch(&mut next);
            }
            Err(e) => next.errors.push(e),
        },

        FormAction::PickDate { key, date } => match editable_spec(state.kind, &key) {
            Ok(spec) if spec.kind == FieldKind::Date => {
                next.values.put_date(spec.key, Some(date));
                touch(&mut next);
            }
            Ok(spec) => next.errors.push(format!("{} is not a date field", spec.label)),
            Err(e) => next.errors.push(e),
        },

        FormAction::ToggleChoice { key, value } => match editable_spec(state.kind, &key) {
            Ok(spec) => match spec.kind {
                FieldKind::MultiSelect(options) => {
                    let value = canonical_choice(spec, options, &value);
                    let mut items = next.values.list(spec.key);
                    if let Some(pos) = items.iter().position(|v| *v == value) {
                        items.remove(pos);
                    } else {
                        items.push(value);
                    }
                    if items.is_empty() {
                        next.values.remove(spec.key);
                    } else {
                        next.values.set(spec.key, items.join(", "));
                    }
                    touch(&mut next);
                }
                _ => next
                    .errors
                    .push(format!("{} is not a multi-select field", spec.label)),
            },
            Err(e) => next.errors.push(e),
        },

        FormAction::Submit => {
            let errors = validate(&next);
            if errors.is_empty() {
                next.phase = FormPhase::Submitted;
            } else {
                next.phase = FormPhase::Editing;
                next.errors = errors;
            }
        }

        FormAction::Reset => {
            next.values = next.initial.clone();
            next.phase = FormPhase::Editing;
        }
    }

    next
}

/// Fold a sequence of actions.
pub fn reduce_all<I: IntoIterator<Item = FormAction>>(state: &FormState, actions: I) -> FormState {
    actions
        .into_iter()
        .fold(state.clone(), |s, a| reduce(&s, a))
}

/// Apply every action, submit, and build the record.
///
/// Errors raised by individual edits and by validation are collected into
/// a single `AppError::Validation`.
pub fn submit_with<I: IntoIterator<Item = FormAction>>(
    state: &FormState,
    actions: I,
) -> AppResult<Record> {
    let mut current = state.clone();
    let mut errors = Vec::new();

    for action in actions {
        current = reduce(&current, action);
        errors.extend(current.errors.iter().cloned());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let submitted = reduce(&current, FormAction::Submit);
    if !submitted.errors.is_empty() {
        return Err(AppError::Validation(submitted.errors));
    }
    build_record(&submitted)
}

/// Build the typed record from a submitted form.
pub fn build_record(state: &FormState) -> AppResult<Record> {
    if !state.is_submitted() {
        return Err(AppError::FormNotSubmitted(state.kind.to_string()));
    }
    let id = state
        .id
        .as_deref()
        .ok_or_else(|| AppError::FormNotSubmitted("record id not assigned".into()))?;

    record_from_fields(state.kind, id, &state.visible_values())
}

// -----------------------------
// Internals
// -----------------------------

/// Any edit after submission goes back to editing.
fn touch(state: &mut FormState) {
    state.phase = FormPhase::Editing;
    derive_fields(state.kind, &mut state.values);
}

fn editable_spec(kind: RecordKind, key: &str) -> Result<&'static FieldSpec, String> {
    match field_spec(kind, key) {
        None => Err(format!("unknown field '{key}' for {kind}")),
        Some(spec) if spec.is_derived() => Err(format!("{} is computed and cannot be set", spec.label)),
        Some(spec) => Ok(spec),
    }
}

/// Known inputs become their label; anything else is kept for validation
/// to reject.
fn canonical_choice(spec: &FieldSpec, options: &[&'static str], value: &str) -> String {
    spec.matching
        .resolve(options, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.trim().to_string())
}

fn is_option(options: &[&str], value: &str) -> bool {
    options.iter().any(|o| *o == value)
}

fn validate(state: &FormState) -> Vec<String> {
    let mut errors = Vec::new();

    for spec in state.visible_fields() {
        let value = state.values.get(spec.key);

        let Some(value) = value else {
            if spec.required {
                errors.push(format!("{} is required", spec.label));
            }
            continue;
        };

        match spec.kind {
            FieldKind::Number => {
                if value.parse::<f64>().is_err() {
                    errors.push(format!("{} must be a number", spec.label));
                }
            }
            FieldKind::Date => {
                if parse_date(value).is_none() {
                    errors.push(format!("{} must be a date (YYYY-MM-DD)", spec.label));
                }
            }
            FieldKind::Choice(options) => {
                if !is_option(options, value) {
                    errors.push(format!(
                        "{} must be one of: {}",
                        spec.label,
                        options.join(", ")
                    ));
                }
            }
            FieldKind::MultiSelect(options) => {
                for item in state.values.list(spec.key) {
                    if !is_option(options, &item) {
                        errors.push(format!("{}: '{}' is not a valid choice", spec.label, item));
                    }
                }
            }
            FieldKind::Text | FieldKind::Derived => {}
        }
    }

    if !errors.is_empty() {
        return errors;
    }

    if let Some(e) = check_transition(state) {
        errors.push(e);
        return errors;
    }

    // Cross-field rules live in the record constructors.
    let probe_id = state.id.as_deref().unwrap_or("");
    if let Err(e) = record_from_fields(state.kind, probe_id, &state.visible_values()) {
        errors.push(e.to_string());
    }

    errors
}

fn check_transition(state: &FormState) -> Option<String> {
    if state.kind != RecordKind::Breeding {
        return None;
    }
    let from = state.initial.get("status").and_then(BreedingStatus::parse)?;
    let to = state.values.get("status").and_then(BreedingStatus::parse)?;
    from.transition(to).err().map(|e| e.to_string())
}

fn derive_fields(kind: RecordKind, values: &mut FieldValues) {
    match kind {
        RecordKind::Breeding => BreedingRecord::derive_fields(values),
        RecordKind::Production => ProductionRecord::derive_fields(values),
        _ => {}
    }
}

fn record_from_fields(kind: RecordKind, id: &str, values: &FieldValues) -> AppResult<Record> {
    Ok(match kind {
        RecordKind::Livestock => Record::Livestock(Animal::from_fields(id, values)?),
        RecordKind::Breeding => Record::Breeding(BreedingRecord::from_fields(id, values)?),
        RecordKind::Health => Record::Health(HealthRecord::from_fields(id, values)?),
        RecordKind::Feeding => Record::Feeding(FeedingRecord::from_fields(id, values)?),
        RecordKind::Production => Record::Production(ProductionRecord::from_fields(id, values)?),
        RecordKind::Inventory => Record::Inventory(InventoryItem::from_fields(id, values)?),
    })
}

fn record_to_fields(record: &Record) -> FieldValues {
    match record {
        Record::Livestock(r) => r.to_fields(),
        Record::Breeding(r) => r.to_fields(),
        Record::Health(r) => r.to_fields(),
        Record::Feeding(r) => r.to_fields(),
        Record::Production(r) => r.to_fields(),
        Record::Inventory(r) => r.to_fields(),
    }
}
