pub mod api;
pub mod chart;
pub mod core;
pub mod field;
pub mod format;
