use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    InventoryCategory {
        Feed => "Feed",
        Medicine => "Medicine",
        Equipment => "Equipment",
        Machinery => "Machinery",
        Supplies => "Supplies",
    }
}

choice_enum! {
    /// Derived from quantity and reorder level, never stored.
    StockStatus {
        InStock => "In Stock",
        Low => "Low",
        Out => "Out",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: f64,
    pub unit: String,
    pub purchase_date: NaiveDate,
    pub unit_cost: Option<f64>,
    pub reorder_level: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= 0.0 {
            StockStatus::Out
        } else if self.reorder_level.is_some_and(|lvl| self.quantity <= lvl) {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    pub fn total_value(&self) -> Option<f64> {
        self.unit_cost.map(|c| c * self.quantity)
    }
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("name", "Item").required(),
    FieldSpec::choice("category", "Category", InventoryCategory::LABELS).required(),
    FieldSpec::number("quantity", "Quantity").required(),
    FieldSpec::text("unit", "Unit"),
    FieldSpec::date("purchase_date", "Purchase date").required(),
    FieldSpec::number("unit_cost", "Unit cost"),
    FieldSpec::number("reorder_level", "Reorder level"),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for InventoryItem {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        Ok(Self {
            id: id.to_string(),
            name: values.text("name"),
            category: values.choice("category", InventoryCategory::parse)?,
            quantity: values.number("quantity")?,
            unit: values.get("unit").unwrap_or("pcs").to_string(),
            purchase_date: values.date("purchase_date")?,
            unit_cost: values.opt_number("unit_cost")?,
            reorder_level: values.opt_number("reorder_level")?,
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.put_text("name", &self.name);
        v.set("category", self.category.label());
        v.put_number("quantity", Some(self.quantity));
        v.put_text("unit", &self.unit);
        v.put_date("purchase_date", Some(self.purchase_date));
        v.put_number("unit_cost", self.unit_cost);
        v.put_number("reorder_level", self.reorder_level);
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Inventory
    }

    fn date(&self) -> NaiveDate {
        self.purchase_date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str()]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "category" => Some(self.category.label().to_string()),
            "stock" => Some(self.stock_status().label().to_string()),
            _ => None,
        }
    }
}
