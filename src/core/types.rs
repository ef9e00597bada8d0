use serde::Serialize;

/// Parameters for the FIRE accumulation simulation. Rates are fractions
/// (0.3 means a 30% saving rate), money amounts are in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireInputs {
    pub current_age: f64,
    pub monthly_income: f64,
    pub saving_rate: f64,
    pub target_assets: f64,
    pub annual_return: f64,
}

/// Parameters for the fixed-horizon ETF compounding simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtfInputs {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub investment_years: u32,
    pub annual_return: f64,
}

/// One sampled point along the simulated horizon. `time` is an age for the
/// FIRE simulation and a year index for the ETF simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub time: f64,
    pub assets: f64,
}

/// Whether the FIRE target was actually reached or the simulation hit the
/// age cap first. A capped run still carries its (capped) summary fields so
/// the caller can display them alongside the classification.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FireOutcome {
    TargetReached,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FireResult {
    pub outcome: FireOutcome,
    pub fire_age: u32,
    pub years_to_goal: f64,
    pub monthly_saving: f64,
    pub total_contributed: f64,
    pub total_interest_earned: f64,
    pub trajectory: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfResult {
    pub final_amount: f64,
    pub total_invested: f64,
    pub total_return: f64,
    /// `None` when `initial_amount` is zero and the growth ratio is undefined.
    pub cagr: Option<f64>,
    pub trajectory: Vec<TrajectoryPoint>,
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
