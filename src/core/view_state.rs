use serde::{Deserialize, Serialize};

use crate::core::MonthRow;

/// Number of trailing months kept by `RangeFilter::LastTwelve`.
pub const RECENT_MONTHS: usize = 12;

/// Time-range filter applied to the dataset before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "12")]
    LastTwelve,
}

impl RangeFilter {
    /// Parses a toggle attribute value (`"all"` or `"12"`).
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "12" => Some(Self::LastTwelve),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::LastTwelve => "12",
        }
    }

    /// Rows visible under this filter, in input order.
    #[must_use]
    pub fn apply(self, rows: &[MonthRow]) -> &[MonthRow] {
        match self {
            Self::All => rows,
            Self::LastTwelve => &rows[rows.len().saturating_sub(RECENT_MONTHS)..],
        }
    }
}

/// Bar chart view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One bar per month sized by `total`.
    #[default]
    Total,
    /// Stacked per-category segments sized by `by_category`.
    Category,
}

impl ViewMode {
    /// Parses a toggle attribute value (`"total"` or `"category"`).
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim() {
            "total" => Some(Self::Total),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Category => "category",
        }
    }
}

/// Process-local interaction state. Starts as `{ range: all, view: total }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub range: RangeFilter,
    pub view: ViewMode,
}

impl ViewState {
    #[must_use]
    pub fn new(range: RangeFilter, view: ViewMode) -> Self {
        Self { range, view }
    }
}
