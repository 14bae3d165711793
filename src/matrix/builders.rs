use crate::data::Observation;
use crate::matrix::frame::DateFrame;

//price spread per contract, sampled at the rebalance period
pub fn spread_matrix(observations: &[Observation], period: usize) -> DateFrame {
    DateFrame::pivot(observations, |obs| obs.price_spread).sample_every(period)
}

//period-over-period return of the scaled close, from the option seller's side
//
//close prices are scaled by multiplier * capital / 100 before differencing,
//the first sampled row is zero by definition, residual gaps fill with zero,
//and the whole matrix is negated so short positions profit when price falls
pub fn seller_return_matrix(
    observations: &[Observation],
    period: usize,
    capital: f64,
    multiplier: f64,
) -> DateFrame {
    DateFrame::pivot(observations, |obs| obs.close_price)
        .scale(multiplier * capital / 100.0)
        .sample_every(period)
        .pct_change()
        .fill_missing(0.0)
        .negate()
}
