pub mod category;
pub mod insights;
pub mod matrix;
pub mod modes;
pub mod scores;
pub mod snapshot;
pub mod thresholds;
