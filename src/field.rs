//! Labeled numeric form fields with a display transform per kind. The web
//! UI renders its inputs from these definitions (served as JSON) so the
//! display/stored contract lives in exactly one place.

use serde::Serialize;

use crate::format::LocaleSpec;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Plain,
    Currency,
    Percentage,
}

impl FieldKind {
    /// Stored value -> value shown in the input box.
    pub fn display_value(self, stored: f64) -> f64 {
        match self {
            FieldKind::Percentage => stored * 100.0,
            FieldKind::Plain | FieldKind::Currency => stored,
        }
    }

    /// User-entered display string -> stored value. Unparsable input falls
    /// back to 0 rather than erroring (accept-default policy).
    pub fn parse_input(self, raw: &str) -> f64 {
        let displayed = raw.trim().parse::<f64>().unwrap_or(0.0);
        let displayed = if displayed.is_finite() { displayed } else { 0.0 };
        match self {
            FieldKind::Percentage => displayed / 100.0,
            FieldKind::Plain | FieldKind::Currency => displayed,
        }
    }

    pub fn suffix(self, locale: &LocaleSpec) -> &'static str {
        match self {
            FieldKind::Percentage => "%",
            FieldKind::Currency => locale.currency_symbol,
            FieldKind::Plain => "",
        }
    }
}

/// Declarative description of one form input. `min`/`max` are advisory UI
/// hints (HTML attributes); out-of-range values still enter page state and
/// are only rejected by the simulation boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

pub const FIRE_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        id: "currentAge",
        label: "Current age",
        kind: FieldKind::Plain,
        default: 25.0,
        min: Some(18.0),
        max: Some(80.0),
        step: 1.0,
    },
    FieldSpec {
        id: "monthlyIncome",
        label: "Monthly income",
        kind: FieldKind::Currency,
        default: 4_000_000.0,
        min: Some(0.0),
        max: None,
        step: 100_000.0,
    },
    FieldSpec {
        id: "savingRate",
        label: "Saving rate",
        kind: FieldKind::Percentage,
        default: 0.3,
        min: Some(0.0),
        max: Some(1.0),
        step: 0.01,
    },
    FieldSpec {
        id: "targetAssets",
        label: "Target assets",
        kind: FieldKind::Currency,
        default: 1_300_000_000.0,
        min: Some(0.0),
        max: None,
        step: 10_000_000.0,
    },
    FieldSpec {
        id: "annualReturn",
        label: "Annual return",
        kind: FieldKind::Percentage,
        default: 0.07,
        min: Some(0.0),
        max: Some(0.2),
        step: 0.001,
    },
];

pub const ETF_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        id: "initialAmount",
        label: "Initial amount",
        kind: FieldKind::Currency,
        default: 13_000_000.0,
        min: Some(0.0),
        max: None,
        step: 1_000_000.0,
    },
    FieldSpec {
        id: "monthlyContribution",
        label: "Monthly contribution",
        kind: FieldKind::Currency,
        default: 650_000.0,
        min: Some(0.0),
        max: None,
        step: 100_000.0,
    },
    FieldSpec {
        id: "investmentYears",
        label: "Investment period (years)",
        kind: FieldKind::Plain,
        default: 20.0,
        min: Some(1.0),
        max: Some(50.0),
        step: 1.0,
    },
];
