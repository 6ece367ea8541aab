//! Monthly cost dataset and its lenient JSON input contract.
//!
//! The payload shape is `{ currency?, monthly?: [{ month, total, byCategory, cumulative }] }`.
//! Nothing is required: absent or non-numeric amounts read as 0, non-object rows
//! read as empty rows, and an unparseable payload yields the empty `CAD` dataset.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CURRENCY: &str = "CAD";

/// Aggregated amounts for one month.
///
/// `total` and the sum of `by_category` come independently from the input and
/// are not reconciled; each chart view reads the field it needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthRow {
    #[serde(deserialize_with = "lenient_label")]
    pub month: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub total: f64,
    #[serde(rename = "byCategory", deserialize_with = "lenient_categories")]
    pub by_category: IndexMap<String, f64>,
    #[serde(deserialize_with = "lenient_amount")]
    pub cumulative: f64,
}

impl MonthRow {
    #[must_use]
    pub fn new(month: impl Into<String>, total: f64, cumulative: f64) -> Self {
        Self {
            month: month.into(),
            total,
            by_category: IndexMap::new(),
            cumulative,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, value: f64) -> Self {
        self.by_category.insert(category.into(), value);
        self
    }

    /// Sum of this row's category values (may differ from `total`).
    #[must_use]
    pub fn category_sum(&self) -> f64 {
        self.by_category.values().sum()
    }

    /// Value for `category`, or 0 when the row has no entry for it.
    #[must_use]
    pub fn category_value(&self, category: &str) -> f64 {
        self.by_category.get(category).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub currency: String,
    pub monthly: Vec<MonthRow>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            monthly: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct DatasetWire {
    #[serde(default, deserialize_with = "lenient_currency")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_rows")]
    monthly: Vec<MonthRow>,
}

impl Dataset {
    #[must_use]
    pub fn new(currency: impl Into<String>, monthly: Vec<MonthRow>) -> Self {
        Self {
            currency: currency.into(),
            monthly,
        }
    }

    /// Parses a payload, reporting malformed JSON as an error.
    pub fn try_from_json_str(input: &str) -> ChartResult<Self> {
        let wire: DatasetWire = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset payload: {e}")))?;
        Ok(Self {
            currency: wire
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
            monthly: wire.monthly,
        })
    }

    /// Parses a payload; any failure yields the empty `CAD` dataset.
    #[must_use]
    pub fn from_json_str(input: &str) -> Self {
        match Self::try_from_json_str(input) {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(error = %err, "falling back to empty dataset");
                Self::default()
            }
        }
    }

    /// Parses an optional embedded payload; a missing payload yields the empty dataset.
    #[must_use]
    pub fn from_payload(payload: Option<&str>) -> Self {
        match payload {
            Some(text) => Self::from_json_str(text),
            None => {
                debug!("no dataset payload present");
                Self::default()
            }
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize dataset: {e}")))
    }
}

/// Coerces a JSON scalar to a finite amount: numbers pass through, numeric
/// strings are parsed, `true` is 1, everything else is 0.
fn coerce_amount(value: &serde_json::Value) -> f64 {
    let amount = match value {
        serde_json::Value::Number(number) => number.as_f64().unwrap_or(0.0),
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(0.0)
            }
        }
        serde_json::Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if amount.is_finite() { amount } else { 0.0 }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) if number.as_f64() != Some(0.0) => number.to_string(),
        serde_json::Value::Bool(true) => "true".to_owned(),
        _ => String::new(),
    })
}

fn lenient_currency<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        _ => None,
    })
}

/// Accepts any JSON value; only an array of rows contributes data.
fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<MonthRow>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RowSlot {
        Row(MonthRow),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RowsSlot {
        Rows(Vec<RowSlot>),
        Other(IgnoredAny),
    }

    Ok(match RowsSlot::deserialize(deserializer)? {
        RowsSlot::Rows(slots) => slots
            .into_iter()
            .map(|slot| match slot {
                RowSlot::Row(row) => row,
                RowSlot::Other(_) => MonthRow::default(),
            })
            .collect(),
        RowsSlot::Other(_) => Vec::new(),
    })
}

/// Reads `byCategory` in document order; non-object values read as empty.
fn lenient_categories<'de, D>(deserializer: D) -> Result<IndexMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = IndexMap<String, f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of category amounts")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                categories.insert(key, coerce_amount(&value));
            }
            Ok(categories)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(IndexMap::new())
        }

        fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            while access.next_element::<IgnoredAny>()?.is_some() {}
            Ok(IndexMap::new())
        }
    }

    deserializer.deserialize_any(CategoriesVisitor)
}

#[cfg(test)]
mod tests {
    use super::coerce_amount;
    use serde_json::json;

    #[test]
    fn coerce_amount_handles_loose_scalars() {
        assert_eq!(coerce_amount(&json!(12.5)), 12.5);
        assert_eq!(coerce_amount(&json!(" 40 ")), 40.0);
        assert_eq!(coerce_amount(&json!("abc")), 0.0);
        assert_eq!(coerce_amount(&json!(null)), 0.0);
        assert_eq!(coerce_amount(&json!(true)), 1.0);
        assert_eq!(coerce_amount(&json!([1, 2])), 0.0);
    }
}
