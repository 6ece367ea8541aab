use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::MonthRow;

/// One category with its total across the rows it was ranked over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
}

/// Category universe of `rows`: every `by_category` key, ordered by descending
/// total across all rows.
///
/// Ties keep first-encountered order (row order, then key order within a row).
/// This order drives both legend order and bottom-up stacking order.
#[must_use]
pub fn rank_categories(rows: &[MonthRow]) -> Vec<CategoryTotal> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for row in rows {
        for (name, value) in &row.by_category {
            *totals.entry(name.as_str()).or_insert(0.0) += *value;
        }
    }

    let mut ranked: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(name, total)| CategoryTotal {
            name: name.to_owned(),
            total,
        })
        .collect();
    // `sort_by_key` is stable, which preserves first-encountered order on ties.
    ranked.sort_by_key(|category| Reverse(OrderedFloat(category.total)));
    ranked
}

/// Largest per-row sum of category values.
#[must_use]
pub fn max_category_sum(rows: &[MonthRow]) -> f64 {
    rows.iter()
        .map(MonthRow::category_sum)
        .fold(0.0, f64::max)
}

/// Largest `total` across rows.
#[must_use]
pub fn max_total(rows: &[MonthRow]) -> f64 {
    rows.iter().map(|row| row.total).fold(0.0, f64::max)
}

/// Largest `cumulative` across rows.
#[must_use]
pub fn max_cumulative(rows: &[MonthRow]) -> f64 {
    rows.iter().map(|row| row.cumulative).fold(0.0, f64::max)
}
