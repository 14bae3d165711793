//a Rust-based backtesting engine for selling deep out-of-the-money options

pub mod config;
pub mod data;
pub mod engine;
pub mod matrix;
pub mod metrics;
pub mod signal;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, StrategyConfig};
    pub use crate::data::{filter_by_symbol, load_csv, DataError, Observation};
    pub use crate::engine::{BacktestEngine, BacktestResult, TradeRecord};
    pub use crate::matrix::{seller_return_matrix, spread_matrix, DateFrame};
    pub use crate::metrics::{
        calculate_nav_curve, max_drawdown, NavPoint, PerformanceReport, TRADING_PERIODS_PER_YEAR,
    };
    pub use crate::signal::{select_top_n, selected_symbols};
}
