//! Builds the monthly dataset from individual payment records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Dataset, MonthRow};

pub const LEGAL_COUNSEL: &str = "Legal counsel";
pub const MEDIATION: &str = "Mediation";
pub const OTHER_PROFESSIONAL_FEES: &str = "Other professional fees";

/// One outgoing payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub date: NaiveDate,
    pub amount: f64,
    pub sent_to: String,
}

impl PaymentEntry {
    #[must_use]
    pub fn new(date: NaiveDate, amount: f64, sent_to: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            sent_to: sent_to.into(),
        }
    }
}

/// Maps a free-form recipient description to a reporting category.
///
/// Explicit role tags (`(lawyer)`, `(mediator)`) win over keyword matches.
#[must_use]
pub fn categorize(sent_to: &str) -> &'static str {
    let text = sent_to.to_lowercase();
    if text.contains("(lawyer)") {
        return LEGAL_COUNSEL;
    }
    if text.contains("mediator") || text.contains("mediation") {
        return MEDIATION;
    }
    if ["law", "counsel", "solicitor"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        return LEGAL_COUNSEL;
    }
    OTHER_PROFESSIONAL_FEES
}

/// `YYYY-MM` bucket key for `date`.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Rounds to cents, half away from zero.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

#[derive(Default)]
struct MonthBucket {
    total: f64,
    by_category: IndexMap<&'static str, f64>,
}

/// Aggregates payments into chronologically ordered monthly rows.
///
/// Non-positive and non-finite amounts are skipped. Each row carries its
/// total, per-category sums ordered by descending value, and the running
/// cumulative total, all rounded to cents.
#[must_use]
pub fn aggregate_monthly(entries: &[PaymentEntry], currency: &str) -> Dataset {
    let mut buckets: BTreeMap<String, MonthBucket> = BTreeMap::new();
    let mut skipped = 0_usize;

    for entry in entries {
        if !entry.amount.is_finite() || entry.amount <= 0.0 {
            skipped += 1;
            continue;
        }
        let category = categorize(&entry.sent_to);
        let bucket = buckets.entry(month_key(entry.date)).or_default();
        bucket.total += entry.amount;
        *bucket.by_category.entry(category).or_insert(0.0) += entry.amount;
        trace!(month = %month_key(entry.date), category, amount = entry.amount, "bucketed payment");
    }

    let mut running = 0.0;
    let monthly: Vec<MonthRow> = buckets
        .into_iter()
        .map(|(month, bucket)| {
            running += bucket.total;
            let mut categories: Vec<(&'static str, f64)> = bucket
                .by_category
                .into_iter()
                .map(|(name, value)| (name, round_cents(value)))
                .collect();
            categories.sort_by(|left, right| right.1.total_cmp(&left.1));

            let mut row = MonthRow::new(month, round_cents(bucket.total), round_cents(running));
            for (name, value) in categories {
                row = row.with_category(name, value);
            }
            row
        })
        .collect();

    debug!(
        entries = entries.len(),
        skipped,
        months = monthly.len(),
        "aggregated monthly dataset"
    );
    Dataset::new(currency, monthly)
}
