pub mod loader;
pub mod observation;

pub use loader::{filter_by_symbol, load_csv};
pub use observation::{DataError, Observation};
