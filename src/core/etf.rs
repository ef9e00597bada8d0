use super::types::{EtfInputs, EtfResult, TrajectoryPoint, round_to_cents};

/// Fixed-horizon monthly compounding: every month the contribution is added
/// first and the combined balance then grows at the monthly rate. Exactly
/// `investment_years * 12` steps, no early termination.
pub fn run_etf_simulation(inputs: &EtfInputs) -> EtfResult {
    let monthly_rate = inputs.annual_return / 12.0;
    let total_months = inputs.investment_years * 12;

    let mut assets = inputs.initial_amount;
    let mut trajectory = Vec::with_capacity(inputs.investment_years as usize + 1);
    trajectory.push(TrajectoryPoint {
        time: 0.0,
        assets: inputs.initial_amount,
    });

    for month in 1..=total_months {
        assets = (assets + inputs.monthly_contribution) * (1.0 + monthly_rate);
        if month % 12 == 0 {
            trajectory.push(TrajectoryPoint {
                time: f64::from(month / 12),
                assets: round_to_cents(assets),
            });
        }
    }

    let total_invested =
        inputs.initial_amount + inputs.monthly_contribution * f64::from(total_months);
    let cagr = if inputs.initial_amount > 0.0 && inputs.investment_years > 0 {
        Some((assets / inputs.initial_amount).powf(1.0 / f64::from(inputs.investment_years)) - 1.0)
    } else {
        None
    };

    EtfResult {
        final_amount: assets,
        total_invested,
        total_return: assets - total_invested,
        cagr,
        trajectory,
    }
}
