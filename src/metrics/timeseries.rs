use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

//a point in the net-asset-value curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
    pub drawdown: f64,
    pub profit: f64,
}

impl NavPoint {
    pub fn new(date: NaiveDate, nav: f64, drawdown: f64, profit: f64) -> Self {
        NavPoint {
            date,
            nav,
            drawdown,
            profit,
        }
    }
}

//compounds the profit series into a wealth index with drawdowns
//nav[0] = 1 + profit[0], nav[t] = nav[t-1] * (1 + profit[t])
pub fn calculate_nav_curve(dates: &[NaiveDate], profit: &[f64]) -> Vec<NavPoint> {
    let mut curve = Vec::with_capacity(dates.len());
    let mut nav = 1.0;
    let mut peak = f64::NEG_INFINITY;

    for (&date, &p) in dates.iter().zip(profit.iter()) {
        nav *= 1.0 + p;

        //update peak
        if nav > peak {
            peak = nav;
        }

        //calculate drawdown from the running peak
        let drawdown = if peak > 0.0 { 1.0 - nav / peak } else { 0.0 };

        curve.push(NavPoint::new(date, nav, drawdown, p));
    }

    curve
}

//maximum drawdown of the compounded profit series
pub fn max_drawdown(profit: &[f64]) -> f64 {
    let mut nav = 1.0;
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0;

    for &p in profit {
        nav *= 1.0 + p;
        if nav > peak {
            peak = nav;
        }
        let drawdown = if peak > 0.0 { 1.0 - nav / peak } else { 0.0 };
        if drawdown > max_dd {
            max_dd = drawdown;
        }
    }

    max_dd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<NaiveDate> {
        (1..=n as u32)
            .map(|day| NaiveDate::from_ymd_opt(2023, 6, day).unwrap())
            .collect()
    }

    #[test]
    fn test_nav_recurrence() {
        let profit = vec![0.0, 0.1, -0.05, 0.02];
        let curve = calculate_nav_curve(&dates(4), &profit);

        assert!((curve[0].nav - (1.0 + profit[0])).abs() < 1e-12);
        for t in 1..curve.len() {
            let expected = curve[t - 1].nav * (1.0 + profit[t]);
            assert!((curve[t].nav - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_nav_non_negative_and_starts_at_one() {
        let profit = vec![0.0, -0.5, -0.5, -0.5];
        let curve = calculate_nav_curve(&dates(4), &profit);

        assert!((curve[0].nav - 1.0).abs() < 1e-12);
        assert!(curve.iter().all(|point| point.nav >= 0.0));
    }

    #[test]
    fn test_max_drawdown_hand_built() {
        //nav: 1.0, 1.2, 0.9, 1.05 -> trough 0.9 against peak 1.2
        let profit = vec![0.0, 0.2, -0.25, 1.05 / 0.9 - 1.0];
        let dd = max_drawdown(&profit);
        assert!((dd - (1.0 - 0.9 / 1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_max_drawdown_monotone_gain_is_zero() {
        assert_eq!(max_drawdown(&[0.0, 0.01, 0.02]), 0.0);
    }

    #[test]
    fn test_curve_drawdown_matches_max_drawdown() {
        let profit = vec![0.0, 0.2, -0.25, 0.1];
        let curve = calculate_nav_curve(&dates(4), &profit);
        let curve_max = curve.iter().map(|p| p.drawdown).fold(0.0, f64::max);
        assert!((curve_max - max_drawdown(&profit)).abs() < 1e-12);
    }
}
