use super::choice::choice_enum;
use super::record::{FarmRecord, RecordKind};
use crate::core::calculator::{display, profit, rates};
use crate::core::form::schema::{FieldSpec, FormRecord};
use crate::core::form::values::FieldValues;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

choice_enum! {
    Product {
        Milk => "Milk",
        Eggs => "Eggs",
        Meat => "Meat",
        Wool => "Wool",
    }
}

impl Product {
    pub fn default_unit(&self) -> &'static str {
        match self {
            Product::Milk => "l",
            Product::Eggs => "pcs",
            Product::Meat | Product::Wool => "kg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: String,
    pub animal_id: String,
    pub date: NaiveDate,
    pub product: Product,
    pub quantity: f64,
    pub unit: String,
    pub head_count: Option<u32>,
    pub market_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub weight_gain_kg: Option<f64>,
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl ProductionRecord {
    pub fn profit(&self) -> Option<f64> {
        profit::profit(self.sale_price, self.market_price)
    }

    /// Quantity per head.
    pub fn production_rate(&self) -> Option<f64> {
        rates::production_rate(Some(self.quantity), self.head_count)
    }

    /// Weight gained per day between the record date and the sale date.
    pub fn weight_gain_rate(&self) -> Option<f64> {
        rates::weight_gain_rate(self.weight_gain_kg, self.date, self.sale_date)
    }

    pub fn derive_fields(values: &mut FieldValues) {
        let sale = values.opt_number("sale_price").ok().flatten();
        let market = values.opt_number("market_price").ok().flatten();

        match profit::profit(sale, market) {
            Some(p) => values.set("profit", display::two_decimals(Some(p), "")),
            None => values.remove("profit"),
        }
    }
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("animal_id", "Animal / herd").required(),
    FieldSpec::date("date", "Date").required(),
    FieldSpec::choice("product", "Product", Product::LABELS).required(),
    FieldSpec::number("quantity", "Quantity").required(),
    FieldSpec::text("unit", "Unit"),
    FieldSpec::number("head_count", "Head count"),
    FieldSpec::number("market_price", "Market price"),
    FieldSpec::number("sale_price", "Sale price"),
    FieldSpec::derived("profit", "Profit"),
    FieldSpec::number("weight_gain_kg", "Weight gain (kg)"),
    FieldSpec::date("sale_date", "Sale date"),
    FieldSpec::text("notes", "Notes"),
];

impl FormRecord for ProductionRecord {
    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn from_fields(id: &str, values: &FieldValues) -> AppResult<Self> {
        let product = values.choice("product", Product::parse)?;
        let unit = values
            .get("unit")
            .unwrap_or(product.default_unit())
            .to_string();

        Ok(Self {
            id: id.to_string(),
            animal_id: values.text("animal_id"),
            date: values.date("date")?,
            product,
            quantity: values.number("quantity")?,
            unit,
            head_count: values.count("head_count")?,
            market_price: values.opt_number("market_price")?,
            sale_price: values.opt_number("sale_price")?,
            weight_gain_kg: values.opt_number("weight_gain_kg")?,
            sale_date: values.opt_date("sale_date")?,
            notes: values.text("notes"),
        })
    }

    fn to_fields(&self) -> FieldValues {
        let mut v = FieldValues::new();
        v.put_text("animal_id", &self.animal_id);
        v.put_date("date", Some(self.date));
        v.set("product", self.product.label());
        v.put_number("quantity", Some(self.quantity));
        v.put_text("unit", &self.unit);
        if let Some(h) = self.head_count {
            v.set("head_count", h.to_string());
        }
        v.put_number("market_price", self.market_price);
        v.put_number("sale_price", self.sale_price);
        v.put_number("weight_gain_kg", self.weight_gain_kg);
        v.put_date("sale_date", self.sale_date);
        v.put_text("notes", &self.notes);
        v
    }
}

impl FarmRecord for ProductionRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Production
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.animal_id.as_str()]
    }

    fn dimension(&self, dim: &str) -> Option<String> {
        match dim {
            "product" => Some(self.product.label().to_string()),
            "unit" => Some(self.unit.clone()),
            _ => None,
        }
    }
}
