use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use super::species::Species;
use crate::core::calculator::gestation;
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    BreedingMethod {
        Natural => "Natural",
        Artificial => "Artificial",
    }
}

choice_enum! {
    /// Lifecycle of a breeding event.
    ///
    /// `Served → Pregnant | Failed`, `Pregnant → Delivered | Aborted`.
    /// `Delivered`, `Failed` and `Aborted` are terminal.
    BreedingStatus {
        Served => "Served",
        Pregnant => "Pregnant",
        Delivered => "Delivered",
        Failed => "Failed",
        Aborted => "Aborted",
    }
}

impl BreedingStatus {
    pub fn can_transition_to(&self, next: BreedingStatus) -> bool {
        use BreedingStatus::*;

        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (Served, Pregnant) | (Served, Failed) | (Pregnant, Delivered) | (Pregnant, Aborted)
        )
    }

    pub fn transition(self, next: BreedingStatus) -> AppResult<BreedingStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::InvalidTransition {
                from: self.label().to_string(),
                to: next.label().to_string(),
            })
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BreedingStatus::Delivered | BreedingStatus::Failed | BreedingStatus::Aborted
        )
    }
}

/// Only present once the status reaches `Delivered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub birth_date: NaiveDate,
    pub offspring_count: u32,
    pub live_births: u32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingRecord {
    pub id: String,
    pub animal_id: String,
    pub species: Species,
    pub sire_id: String,
    pub method: BreedingMethod,
    pub service_date: NaiveDate,
    pub status: BreedingStatus,
    pub birth: Option<BirthDetails>,
    #[serde(default)]
    pub notes: String,
}

impl BreedingRecord {
    pub fn gestation_days(&self) -> u32 {
        self.species.gestation_days()
    }

    pub fn expected_birth_date(&self) -> Option<NaiveDate> {
        gestation::expected_birth_date(self.service_date, self.gestation_days())
    }

    /// Days left until the expected birth date, negative when overdue.
    pub fn days_to_due(&self, today: NaiveDate) -> Option<i64> {
        self.expected_birth_date()
            .map(|due| (due - today).num_days())
    }

    /// Recompute `gestation_days` and `expected_birth_date` from species
    /// and service date. Unknown species or date clears both.
    pub fn derive_fields(values: &mut FieldValues) {
        let days = values.get("species").and_then(gestation::gestation_days);
        let service = values.opt_date("service_date").ok().flatten();

        match days {
            Some(d) => values.set("gestation_days", d.to_string()),
            None => values.remove("gestation_days"),
        }

        match days
            .zip(service)
            .and_then(|(d, s)| gestation::expected_birth_date(s, d))
        {
            Some(due) => values.put_date("expected_birth_date", Some(due)),
            None => values.remove("expected_birth_date"),
        }
    }
}

const DELIVERED: &str = "Delivered";

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("animal_id", "Dam tag").required(),
    FieldSpec::choice("species", "Species", Species::LABELS)
        .species_aliases()
        .required(),
    FieldSpec::text("sire_id", "Sire tag"),
    FieldSpec::choice("method", "Method", BreedingMethod::LABELS).required(),
    FieldSpec::date("service_date", "Service date").required(),
    FieldSpec::derived("gestation_days", "Gestation (days)"),
    FieldSpec::derived("expected_birth_date", "Expected birth date"),
    FieldSpec::choice("status", "Status", BreedingStatus::LABELS).required(),
    FieldSpec::date("birth_date", "Birth date")
        .required()
        .when("status", DELIVERED),
    FieldSpec::number("offspring_count", "Offspring")
        .required()
        .when("status", DELIVERED),
    FieldSpec::number("live_births", "Live births").when("status", DELIVERED),
    FieldSpec::text("birth_notes", "Birth notes").when("status", DELIVERED),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for BreedingRecord {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        let service_date = values.date("service_date")?;
        let status = values.choice("status", BreedingStatus::parse)?;

        let birth = if status == BreedingStatus::Delivered {
            let birth_date = values.date("birth_date")?;
            if birth_date < service_date {
                return Err(AppError::InvalidField(
                    "birth_date cannot precede service_date".into(),
                ));
            }

            let offspring_count = values.count("offspring_count")?.unwrap_or(0);
            let live_births = values.count("live_births")?.unwrap_or(offspring_count);
            if live_births > offspring_count {
                return Err(AppError::InvalidField(
                    "live_births cannot exceed offspring_count".into(),
                ));
            }

            Some(BirthDetails {
                birth_date,
                offspring_count,
                live_births,
                notes: values.text("birth_notes"),
            })
        } else {
            None
        };

        Ok(Self {
            id: id.to_string(),
            animal_id: values.text("animal_id"),
            species: values.choice("species", Species::parse)?,
            sire_id: values.text("sire_id"),
            method: values.choice("method", BreedingMethod::parse)?,
            service_date,
            status,
            birth,
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.put_text("animal_id", &self.animal_id);
        v.set("species", self.species.label());
        v.put_text("sire_id", &self.sire_id);
        v.set("method", self.method.label());
        v.put_date("service_date", Some(self.service_date));
        v.set("status", self.status.label());
        if let Some(b) = &self.birth {
            v.put_date("birth_date", Some(b.birth_date));
            v.set("offspring_count", b.offspring_count.to_string());
            v.set("live_births", b.live_births.to_string());
            v.put_text("birth_notes", &b.notes);
        }
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for BreedingRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Breeding
    }

    fn date(&self) -> NaiveDate {
        self.service_date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.animal_id.as_str(),
            self.sire_id.as_str(),
        ]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "species" => Some(self.species.label().to_string()),
            "method" => Some(self.method.label().to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}
