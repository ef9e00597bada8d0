mod catalog;
mod etf;
mod fire;
mod types;

pub use catalog::{INSTRUMENTS, Instrument, find_instrument};
pub use etf::run_etf_simulation;
pub use fire::{FIRE_AGE_CAP, run_fire_simulation};
pub use types::{EtfInputs, EtfResult, FireInputs, FireOutcome, FireResult, TrajectoryPoint};
