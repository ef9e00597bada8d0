//! Locale-aware display formatting. The core stays locale-agnostic; callers
//! pass the `LocaleSpec` they render for, and the application binds `KO_KR`
//! once at its edge.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSpec {
    /// BCP 47 tag, also handed to the browser for tick formatting.
    pub tag: &'static str,
    pub currency_symbol: &'static str,
    pub group_separator: char,
}

pub const KO_KR: LocaleSpec = LocaleSpec {
    tag: "ko-KR",
    currency_symbol: "₩",
    group_separator: ',',
};

/// Whole-unit number with thousands grouping, e.g. `1,300,000,000`.
pub fn format_number(value: f64, locale: &LocaleSpec) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(locale.group_separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Currency with zero fraction digits, symbol-prefixed: `₩4,000,000`.
pub fn format_currency(value: f64, locale: &LocaleSpec) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value < 0.0 {
        format!("-{}{}", locale.currency_symbol, format_number(-value, locale))
    } else {
        format!("{}{}", locale.currency_symbol, format_number(value, locale))
    }
}

/// Fraction rendered as a percentage with one decimal: `0.07` -> `7.0%`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}
