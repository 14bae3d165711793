use crate::metrics::timeseries::max_drawdown;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

//trading periods per year, fixed by convention for this market
pub const TRADING_PERIODS_PER_YEAR: f64 = 243.0;

//performance report for a backtest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub calmar_ratio: f64,
    pub capital: f64,
    pub num_periods: usize,
}

impl PerformanceReport {
    //derives all metrics from the per-period profit series
    pub fn from_profit(profit: &[f64], capital: f64) -> Self {
        let growth: f64 = profit.iter().map(|p| 1.0 + p).product();
        let total_return = growth - 1.0;

        let annualized_return = if profit.is_empty() {
            0.0
        } else {
            growth.powf(TRADING_PERIODS_PER_YEAR / profit.len() as f64) - 1.0
        };

        let max_dd = max_drawdown(profit);
        let sharpe_ratio = calculate_sharpe_ratio(profit);

        //undefined when the curve never draws down, surfaced as nan
        let calmar_ratio = if max_dd == 0.0 {
            f64::NAN
        } else {
            annualized_return / max_dd
        };

        PerformanceReport {
            total_return,
            annualized_return,
            max_drawdown: max_dd,
            sharpe_ratio,
            calmar_ratio,
            capital,
            num_periods: profit.len(),
        }
    }

    //prints metrics in a formatted table
    pub fn pretty_print_table(&self) {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        table.add_row(Row::new(vec![
            Cell::new("Total Return"),
            Cell::new(&format!("{:.3}%", self.total_return * 100.0)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Annualized Return"),
            Cell::new(&format!("{:.3}%", self.annualized_return * 100.0)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Max Drawdown"),
            Cell::new(&format!("{:.3}%", self.max_drawdown * 100.0)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Sharpe Ratio"),
            Cell::new(&format!("{:.3}", self.sharpe_ratio)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Calmar Ratio"),
            Cell::new(&format!("{:.3}", self.calmar_ratio)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Capital"),
            Cell::new(&format!("{:.2}", self.capital)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Periods"),
            Cell::new(&format!("{}", self.num_periods)),
        ]));

        table.printstd();
    }
}

fn calculate_sharpe_ratio(profit: &[f64]) -> f64 {
    if profit.len() < 2 {
        return f64::NAN;
    }

    let mean = profit.mean();
    let std_dev = profit.std_dev();

    //zero variance leaves the ratio undefined, surfaced as nan
    if std_dev == 0.0 {
        return f64::NAN;
    }

    (mean / std_dev) * TRADING_PERIODS_PER_YEAR.sqrt()
}
