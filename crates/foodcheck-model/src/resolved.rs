//! Per-record derived views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::CellValue;

/// Dietary classification of a food record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Restricted,
}

impl Verdict {
    #[must_use]
    pub const fn from_approved(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Restricted
        }
    }

    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Short status marker used in tables.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Approved => "✓",
            Self::Restricted => "✗",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Approved => "מאושר",
            Self::Restricted => "לא מאושר",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five resolved attributes of one record plus its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFood {
    pub name: CellValue,
    pub calories: CellValue,
    pub protein: CellValue,
    pub carbs: CellValue,
    pub fat: CellValue,
    pub verdict: Verdict,
}
