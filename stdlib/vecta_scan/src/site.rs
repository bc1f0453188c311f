use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight used for any class the table does not know.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Container classes the detector is trained on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BreedingSite {
    Bottle,
    #[serde(rename = "Coconut-husk", alias = "Coconut-Exocarp")]
    CoconutHusk,
    #[serde(rename = "Drain-Inlet")]
    DrainInlet,
    Tire,
    Vase,
}

impl BreedingSite {
    pub const ALL: [BreedingSite; 5] = [
        BreedingSite::Bottle,
        BreedingSite::CoconutHusk,
        BreedingSite::DrainInlet,
        BreedingSite::Tire,
        BreedingSite::Vase,
    ];

    /// Match a detector label. Exact and case-sensitive; `Coconut-Exocarp`
    /// is the label the trained model emits for husks.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Bottle" => Some(BreedingSite::Bottle),
            "Coconut-husk" | "Coconut-Exocarp" => Some(BreedingSite::CoconutHusk),
            "Drain-Inlet" => Some(BreedingSite::DrainInlet),
            "Tire" => Some(BreedingSite::Tire),
            "Vase" => Some(BreedingSite::Vase),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreedingSite::Bottle => "Bottle",
            BreedingSite::CoconutHusk => "Coconut-husk",
            BreedingSite::DrainInlet => "Drain-Inlet",
            BreedingSite::Tire => "Tire",
            BreedingSite::Vase => "Vase",
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            BreedingSite::Bottle => 2.0,
            BreedingSite::CoconutHusk => 1.5,
            BreedingSite::DrainInlet => 2.5,
            BreedingSite::Tire => 2.5,
            BreedingSite::Vase => 1.5,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            BreedingSite::Tire => "Remove or cover old tires",
            BreedingSite::Bottle => "Dispose of bottles properly",
            BreedingSite::Vase => "Change vase water regularly",
            BreedingSite::DrainInlet => "Clear clogged drains",
            BreedingSite::CoconutHusk => "Remove coconut shells",
        }
    }
}

impl fmt::Display for BreedingSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity weight for any detector label, known or not.
pub fn weight(class_name: &str) -> f64 {
    match BreedingSite::from_label(class_name) {
        Some(site) => site.weight(),
        None => {
            log::trace!("no weight for class {class_name:?}, using {DEFAULT_WEIGHT}");
            DEFAULT_WEIGHT
        }
    }
}
