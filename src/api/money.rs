use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Capability that turns an amount into a display string for one currency.
pub trait MoneyFormatter {
    fn format(&self, currency: &str, value: f64) -> ChartResult<String>;
}

/// Formatter family selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoneyFormatKind {
    /// Locale-aware currency style with symbols and grouping.
    #[default]
    Locale,
    /// `$` followed by the amount with two decimals.
    Fixed,
}

/// English (Canada) currency style: `$1,234.50`, `US$12.00`, `€3.10`, `XYZ 4.00`.
///
/// At most two fraction digits are shown, never fewer than the currency's minor
/// units. Malformed currency codes and non-finite amounts are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleMoneyFormatter;

/// Plain `$` + two-decimal rendering that never fails; non-finite amounts read as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMoneyFormatter;

impl MoneyFormatter for FixedMoneyFormatter {
    fn format(&self, _currency: &str, value: f64) -> ChartResult<String> {
        let value = if value.is_finite() { value } else { 0.0 };
        Ok(format!("${value:.2}"))
    }
}

impl MoneyFormatter for LocaleMoneyFormatter {
    fn format(&self, currency: &str, value: f64) -> ChartResult<String> {
        let code = normalize_currency_code(currency)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "amount must be finite, got {value}"
            )));
        }

        let rounded = Decimal::from_f64(value)
            .ok_or_else(|| ChartError::InvalidData(format!("amount out of range: {value}")))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format_decimal_digits(rounded.abs(), minor_units(&code));

        let mut out = String::with_capacity(digits.len() + 6);
        if negative {
            out.push('-');
        }
        match currency_symbol(&code) {
            Some(symbol) => out.push_str(symbol),
            None => {
                out.push_str(&code);
                out.push('\u{a0}');
            }
        }
        out.push_str(&digits);
        Ok(out)
    }
}

/// Holds the startup-selected formatter and falls back to the fixed format
/// whenever it fails, so formatting never interrupts a render.
pub struct MoneyFormat {
    primary: Box<dyn MoneyFormatter>,
}

impl MoneyFormat {
    #[must_use]
    pub fn new(kind: MoneyFormatKind) -> Self {
        match kind {
            MoneyFormatKind::Locale => Self::custom(Box::new(LocaleMoneyFormatter)),
            MoneyFormatKind::Fixed => Self::custom(Box::new(FixedMoneyFormatter)),
        }
    }

    #[must_use]
    pub fn custom(primary: Box<dyn MoneyFormatter>) -> Self {
        Self { primary }
    }

    #[must_use]
    pub fn format(&self, currency: &str, value: f64) -> String {
        match self.primary.format(currency, value) {
            Ok(text) => text,
            Err(err) => {
                trace!(error = %err, currency, value, "money format fallback");
                format!("${:.2}", if value.is_finite() { value } else { 0.0 })
            }
        }
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new(MoneyFormatKind::default())
    }
}

impl std::fmt::Debug for MoneyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyFormat").finish_non_exhaustive()
    }
}

fn normalize_currency_code(currency: &str) -> ChartResult<String> {
    let code = currency.trim();
    if code.len() == 3 && code.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ChartError::InvalidCurrency(currency.to_owned()))
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "CAD" => "$",
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "JP¥",
        "CNY" => "CN¥",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "BRL" => "R$",
        "TWD" => "NT$",
        "XAF" => "FCFA",
        "XCD" => "EC$",
        _ => return None,
    })
}

fn minor_units(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "XAF" | "XOF" => 0,
        _ => 2,
    }
}

/// Renders a non-negative amount with comma grouping and between
/// `min_fraction` and 2 fraction digits.
fn format_decimal_digits(amount: Decimal, min_fraction: u32) -> String {
    let text = format!("{:.2}", amount);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut fraction = fraction.to_owned();
    while fraction.len() > min_fraction as usize && fraction.ends_with('0') {
        fraction.pop();
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(&fraction);
    }
    grouped
}
