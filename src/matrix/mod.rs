pub mod builders;
pub mod frame;

pub use builders::{seller_return_matrix, spread_matrix};
pub use frame::DateFrame;
