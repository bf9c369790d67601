use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use super::species::Species;
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    Sex {
        Male => "Male",
        Female => "Female",
    }
}

choice_enum! {
    /// What the animal is kept for.
    Purpose {
        Dairy => "Dairy",
        Meat => "Meat",
        Breeding => "Breeding",
        Wool => "Wool",
        Eggs => "Eggs",
    }
}

choice_enum! {
    AnimalStatus {
        Active => "Active",
        Sold => "Sold",
        Deceased => "Deceased",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub tag: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub purpose: Purpose,
    pub status: AnimalStatus,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("tag", "Ear tag").required(),
    FieldSpec::text("name", "Name"),
    FieldSpec::choice("species", "Species", Species::LABELS)
        .species_aliases()
        .required(),
    FieldSpec::text("breed", "Breed"),
    FieldSpec::choice("sex", "Sex", Sex::LABELS).required(),
    FieldSpec::date("birth_date", "Birth date").required(),
    FieldSpec::choice("purpose", "Purpose", Purpose::LABELS).required(),
    FieldSpec::choice("status", "Status", AnimalStatus::LABELS),
    FieldSpec::number("weight_kg", "Weight (kg)"),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for Animal {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        Ok(Self {
            id: id.to_string(),
            tag: values.text("tag"),
            name: values.text("name"),
            species: values.choice("species", Species::parse)?,
            breed: values.text("breed"),
            sex: values.choice("sex", Sex::parse)?,
            birth_date: values.date("birth_date")?,
            purpose: values.choice("purpose", Purpose::parse)?,
            status: values
                .opt_choice("status", AnimalStatus::parse)?
                .unwrap_or(AnimalStatus::Active),
            weight_kg: values.opt_number("weight_kg")?,
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.put_text("tag", &self.tag);
        v.put_text("name", &self.name);
        v.set("species", self.species.label());
        v.put_text("breed", &self.breed);
        v.set("sex", self.sex.label());
        v.put_date("birth_date", Some(self.birth_date));
        v.set("purpose", self.purpose.label());
        v.set("status", self.status.label());
        v.put_number("weight_kg", self.weight_kg);
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for Animal {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Livestock
    }

    fn date(&self) -> NaiveDate {
        self.birth_date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.tag.as_str(),
            self.name.as_str(),
            self.breed.as_str(),
        ]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "species" => Some(self.species.label().to_string()),
            "sex" => Some(self.sex.label().to_string()),
            "purpose" => Some(self.purpose.label().to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}
