use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    HealthEvent {
        Vaccination => "Vaccination",
        Treatment => "Treatment",
        Deworming => "Deworming",
        Checkup => "Checkup",
        Surgery => "Surgery",
    }
}

choice_enum! {
    HealthStatus {
        Scheduled => "Scheduled",
        Completed => "Completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub animal_id: String,
    pub date: NaiveDate,
    pub event: HealthEvent,
    pub condition: String,
    pub treatment: String,
    pub veterinarian: String,
    pub cost: Option<f64>,
    pub status: HealthStatus,
    #[serde(default)]
    pub notes: String,
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("animal_id", "Animal tag").required(),
    FieldSpec::date("date", "Date").required(),
    FieldSpec::choice("event", "Event", HealthEvent::LABELS).required(),
    FieldSpec::text("condition", "Condition"),
    FieldSpec::text("treatment", "Treatment / product"),
    FieldSpec::text("veterinarian", "Veterinarian"),
    FieldSpec::number("cost", "Cost"),
    FieldSpec::choice("status", "Status", HealthStatus::LABELS),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for HealthRecord {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        Ok(Self {
            id: id.to_string(),
            animal_id: values.text("animal_id"),
            date: values.date("date")?,
            event: values.choice("event", HealthEvent::parse)?,
            condition: values.text("condition"),
            treatment: values.text("treatment"),
            veterinarian: values.text("veterinarian"),
            cost: values.opt_number("cost")?,
            status: values
                .opt_choice("status", HealthStatus::parse)?
                .unwrap_or(HealthStatus::Completed),
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.put_text("animal_id", &self.animal_id);
        v.put_date("date", Some(self.date));
        v.set("event", self.event.label());
        v.put_text("condition", &self.condition);
        v.put_text("treatment", &self.treatment);
        v.put_text("veterinarian", &self.veterinarian);
        v.put_number("cost", self.cost);
        v.set("status", self.status.label());
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for HealthRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Health
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.animal_id.as_str(),
            self.condition.as_str(),
            self.veterinarian.as_str(),
        ]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "event" => Some(self.event.label().to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}
