use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    DairyCow,
    Goat,
    Swine,
    Sheep,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::DairyCow,
        Species::Goat,
        Species::Swine,
        Species::Sheep,
    ];

    /// Parse user input: display names, codes and short aliases, any case.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "dairy cow" | "dairycow" | "cow" | "cattle" => Some(Species::DairyCow),
            "goat" => Some(Species::Goat),
            "swine" | "pig" | "sow" => Some(Species::Swine),
            "sheep" | "ewe" => Some(Species::Sheep),
            _ => None,
        }
    }

    /// Fixed gestation length in days.
    pub fn gestation_days(&self) -> u32 {
        match self {
            Species::DairyCow => 280,
            Species::Goat => 150,
            Species::Swine => 114,
            Species::Sheep => 152,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::DairyCow => "Dairy Cow",
            Species::Goat => "Goat",
            Species::Swine => "Swine",
            Species::Sheep => "Sheep",
        }
    }

    pub const LABELS: &'static [&'static str] = &["Dairy Cow", "Goat", "Swine", "Sheep"];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
