use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use super::species::Species;
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    FeedType {
        Hay => "Hay",
        Silage => "Silage",
        Concentrate => "Concentrate",
        Pasture => "Pasture",
        Mineral => "Mineral",
    }
}

choice_enum! {
    FeedingStrategy {
        Grazing => "Grazing",
        Rationed => "Rationed",
        FreeChoice => "Free Choice",
        Supplemental => "Supplemental",
    }
}

choice_enum! {
    FeedingPurpose {
        Maintenance => "Maintenance",
        Growth => "Growth",
        Lactation => "Lactation",
        Fattening => "Fattening",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingRecord {
    pub id: String,
    pub feed_type: FeedType,
    pub date: NaiveDate,
    pub quantity_kg: f64,
    pub cost: Option<f64>,
    pub supplier: String,
    pub strategy: FeedingStrategy,
    pub purpose: FeedingPurpose,
    #[serde(default)]
    pub fed_to: Vec<Species>,
    #[serde(default)]
    pub notes: String,
}

impl FeedingRecord {
    pub fn cost_per_kg(&self) -> Option<f64> {
        match self.cost {
            Some(c) if self.quantity_kg > 0.0 => Some(c / self.quantity_kg),
            _ => None,
        }
    }
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::choice("feed_type", "Feed type", FeedType::LABELS).required(),
    FieldSpec::date("date", "Date").required(),
    FieldSpec::number("quantity_kg", "Quantity (kg)").required(),
    FieldSpec::number("cost", "Cost"),
    FieldSpec::text("supplier", "Supplier"),
    FieldSpec::choice("strategy", "Strategy", FeedingStrategy::LABELS).required(),
    FieldSpec::choice("purpose", "Purpose", FeedingPurpose::LABELS).required(),
    FieldSpec::multi("fed_to", "Fed to", Species::LABELS).species_aliases(),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for FeedingRecord {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        let fed_to = values
            .list("fed_to")
            .iter()
            .map(|s| {
                Species::parse(s).ok_or_else(|| AppError::InvalidChoice {
                    field: "fed_to".into(),
                    value: s.clone(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            id: id.to_string(),
            feed_type: values.choice("feed_type", FeedType::parse)?,
            date: values.date("date")?,
            quantity_kg: values.number("quantity_kg")?,
            cost: values.opt_number("cost")?,
            supplier: values.text("supplier"),
            strategy: values.choice("strategy", FeedingStrategy::parse)?,
            purpose: values.choice("purpose", FeedingPurpose::parse)?,
            fed_to,
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.set("feed_type", self.feed_type.label());
        v.put_date("date", Some(self.date));
        v.put_number("quantity_kg", Some(self.quantity_kg));
        v.put_number("cost", self.cost);
        v.put_text("supplier", &self.supplier);
        v.set("strategy", self.strategy.label());
        v.set("purpose", self.purpose.label());
        let fed_to: Vec<&str> = self.fed_to.iter().map(|s| s.label()).collect();
        v.put_text("fed_to", &fed_to.join(", "));
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for FeedingRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Feeding
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.feed_type.label(),
            self.supplier.as_str(),
        ]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "feed_type" => Some(self.feed_type.label().to_string()),
            "strategy" => Some(self.strategy.label().to_string()),
            "purpose" => Some(self.purpose.label().to_string()),
            _ => None,
        }
    }
}
