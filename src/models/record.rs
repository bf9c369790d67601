//! The `Record` sum type and the `FarmRecord` trait shared by every domain.

use super::breeding::BreedingRecord;
use super::feeding::FeedingRecord;
use super::health::HealthRecord;
use super::inventory::InventoryItem;
use super::livestock::Animal;
use super::production::ProductionRecord;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Livestock,
    Breeding,
    Health,
    Feeding,
    Production,
    Inventory,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Livestock,
        RecordKind::Breeding,
        RecordKind::Health,
        RecordKind::Feeding,
        RecordKind::Production,
        RecordKind::Inventory,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordKind::Livestock => "livestock",
            RecordKind::Breeding => "breeding",
            RecordKind::Health => "health",
            RecordKind::Feeding => "feeding",
            RecordKind::Production => "production",
            RecordKind::Inventory => "inventory",
        }
    }

    /// Prefix of generated record ids (e.g. `BR-0007`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RecordKind::Livestock => "LV",
            RecordKind::Breeding => "BR",
            RecordKind::Health => "HL",
            RecordKind::Feeding => "FD",
            RecordKind::Production => "PR",
            RecordKind::Inventory => "IN",
        }
    }

    /// Categorical dimensions accepted by `list --filter`.
    pub fn dimensions(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Livestock => &["species", "sex", "purpose", "status"],
            RecordKind::Breeding => &["species", "method", "status"],
            RecordKind::Health => &["event", "status"],
            RecordKind::Feeding => &["feed_type", "strategy", "purpose"],
            RecordKind::Production => &["product", "unit"],
            RecordKind::Inventory => &["category", "stock"],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Behaviour every record exposes to the list, search and detail views.
pub trait FarmRecord {
    fn id(&self) -> &str;

    fn kind(&self) -> RecordKind;

    /// Primary date used for sorting and range filters.
    fn date(&self) -> NaiveDate;

    /// Identifier and name fields matched by the text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical dimension, `None` when unset or unknown.
    fn dimension(&self, dim: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Livestock(Animal),
    Breeding(BreedingRecord),
    Health(HealthRecord),
    Feeding(FeedingRecord),
    Production(ProductionRecord),
    Inventory(InventoryItem),
}

impl Record {
    fn inner(&self) -> &dyn FarmRecord {
        match self {
            Record::Livestock(r) => r,
            Record::Breeding(r) => r,
            Record::Health(r) => r,
            Record::Feeding(r) => r,
            Record::Production(r) => r,
            Record::Inventory(r) => r,
        }
    }

    pub fn notes(&self) -> &str {
        match self {
            Record::Livestock(r) => &r.notes,
            Record::Breeding(r) => &r.notes,
            Record::Health(r) => &r.notes,
            Record::Feeding(r) => &r.notes,
            Record::Production(r) => &r.notes,
            Record::Inventory(r) => &r.notes,
        }
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }
}

impl FarmRecord for Record {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn kind(&self) -> RecordKind {
        self.inner().kind()
    }

    fn date(&self) -> NaiveDate {
        self.inner().date()
    }

    fn search_fields(&self) -> Vec<&str> {
        self.inner().search_fields()
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        self.inner().dimension(dim)
    }
}
