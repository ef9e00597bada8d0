use super::types::{
    FireInputs, FireOutcome, FireResult, TrajectoryPoint, round_to_cents, round_to_tenth,
};

/// Nobody retires at 100; past this the target is treated as unreachable.
pub const FIRE_AGE_CAP: f64 = 100.0;

/// Record a trajectory point every this many simulated months.
const SAMPLE_INTERVAL_MONTHS: u32 = 6;

/// Monthly accumulation from zero assets until the target is reached or the
/// age cap is hit. Each month existing assets grow at the monthly rate and
/// the month's saving is added on top (contributions do not compound in the
/// month they are made).
pub fn run_fire_simulation(inputs: &FireInputs) -> FireResult {
    let monthly_saving = inputs.monthly_income * inputs.saving_rate;
    let monthly_rate = inputs.annual_return / 12.0;

    let mut assets = 0.0_f64;
    let mut months = 0_u32;
    let mut trajectory = vec![TrajectoryPoint {
        time: round_to_tenth(inputs.current_age),
        assets: 0.0,
    }];

    let age_at = |months: u32| inputs.current_age + f64::from(months) / 12.0;

    while assets < inputs.target_assets && age_at(months) < FIRE_AGE_CAP {
        assets = assets * (1.0 + monthly_rate) + monthly_saving;
        months += 1;

        if months % SAMPLE_INTERVAL_MONTHS == 0 {
            trajectory.push(TrajectoryPoint {
                time: round_to_tenth(age_at(months)),
                assets: round_to_cents(assets),
            });
        }
    }

    // Close the curve at the termination month when it falls between samples.
    if months % SAMPLE_INTERVAL_MONTHS != 0 {
        trajectory.push(TrajectoryPoint {
            time: round_to_tenth(age_at(months)),
            assets: round_to_cents(assets),
        });
    }

    let termination_age = age_at(months);
    let years_to_goal = f64::from(months) / 12.0;
    let total_contributed = monthly_saving * 12.0 * years_to_goal;
    let outcome = if assets >= inputs.target_assets {
        FireOutcome::TargetReached
    } else {
        FireOutcome::Unreachable
    };

    FireResult {
        outcome,
        fire_age: termination_age.round() as u32,
        years_to_goal,
        monthly_saving,
        total_contributed,
        total_interest_earned: assets - total_contributed,
        trajectory,
    }
}
