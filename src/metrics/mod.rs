pub mod summary;
pub mod timeseries;

pub use summary::{PerformanceReport, TRADING_PERIODS_PER_YEAR};
pub use timeseries::{calculate_nav_curve, max_drawdown, NavPoint};
