//! Logical field categories and their known column aliases.

use std::fmt;

use serde::{Deserialize, Serialize};

const NAME_ALIASES: &[&str] = &[
    "shmmitzrach",
    "שם_המוצר",
    "שם_המזון",
    "שם",
    "product_name",
    "name",
    "שם המזון",
    "שם מזון",
    "שם המוצר",
    "מזון",
    "תאור",
];

const CALORIES_ALIASES: &[&str] = &[
    "food_energy",
    "קלוריות",
    "calories",
    "אנרגיה",
    "energy",
    "קלוריות_ל_100_גרם",
    "ערך קלורי",
    "אנרגיה למזון",
];

const PROTEIN_ALIASES: &[&str] = &["protein", "חלבון", "proteins", "חלבונים", "חלבון כולל"];

const CARBS_ALIASES: &[&str] = &[
    "carbohydrates",
    "פחמימות",
    "carbs",
    "סוכרים",
    "sugars",
    "פחמימות כולל",
    "total_carbohydrates",
];

const FAT_ALIASES: &[&str] = &[
    "total_fat",
    "שומן",
    "fat",
    "fats",
    "שומנים",
    "שומן_רווי",
    "saturated_fat",
    "שומן כולל",
];

/// One of the five canonical attributes extracted from a food record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl FieldCategory {
    /// All categories in display order.
    pub const ALL: [FieldCategory; 5] = [
        Self::Name,
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
    ];

    /// Known column names for this category, most preferred first.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Name => NAME_ALIASES,
            Self::Calories => CALORIES_ALIASES,
            Self::Protein => PROTEIN_ALIASES,
            Self::Carbs => CARBS_ALIASES,
            Self::Fat => FAT_ALIASES,
        }
    }

    /// Column header shown above this category in result tables.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Name => "שם המזון",
            Self::Calories => "קלוריות",
            Self::Protein => "חלבון",
            Self::Carbs => "פחמימות",
            Self::Fat => "שומן",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
