use crate::config::StrategyConfig;
use crate::data::{DataError, Observation};
use crate::matrix::{seller_return_matrix, spread_matrix};
use crate::metrics::{calculate_nav_curve, NavPoint, PerformanceReport};
use crate::signal::{select_top_n, selected_symbols};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

//one period's short book: contracts sold at open_date, closed at close_date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub open_date: NaiveDate,
    pub close_date: NaiveDate,
    pub symbols: Vec<String>,
}

//result of a backtest
#[derive(Debug, Clone)]
pub struct BacktestResult {
    pub profit: Vec<f64>,
    pub nav: Vec<NavPoint>,
    pub trades: Vec<TradeRecord>,
    pub report: PerformanceReport,
}

//main backtest engine
pub struct BacktestEngine {
    config: StrategyConfig,
    observations: Vec<Observation>,
}

impl BacktestEngine {
    //creates a new backtest engine from configuration and loaded data
    pub fn new(config: StrategyConfig, observations: Vec<Observation>) -> Self {
        BacktestEngine {
            config,
            observations,
        }
    }

    //runs the backtest and returns the profit series, nav curve, trade
    //log and performance report
    //
    //everything is recomputed from scratch; neither the configuration nor
    //the observation data is mutated, so repeated runs are identical
    pub fn run(&self) -> Result<BacktestResult> {
        self.config.validate()?;

        if self.observations.is_empty() {
            return Err(DataError::NoObservations.into());
        }

        let spread = spread_matrix(&self.observations, self.config.period);
        let returns = seller_return_matrix(
            &self.observations,
            self.config.period,
            self.config.capital,
            self.config.multiplier,
        );

        //rows are independent, so selection parallelizes cleanly
        let signal: Vec<Vec<bool>> = spread
            .rows()
            .par_iter()
            .map(|row| select_top_n(row, self.config.amount))
            .collect();

        let symbols = spread.symbols();
        let mut trades = Vec::new();
        let mut profit = Vec::with_capacity(spread.n_rows());

        for (row, &close_date) in spread.dates().iter().enumerate() {
            let selected = selected_symbols(&symbols, &signal[row]);

            //dates with nothing selectable are skipped, not an error
            if !selected.is_empty() {
                trades.push(TradeRecord {
                    open_date: close_date - Duration::days(self.config.period as i64),
                    close_date,
                    symbols: selected.iter().map(|s| s.to_string()).collect(),
                });
            }

            //per-period book profit; a selected symbol with no return
            //history contributes zero
            let period_sum: f64 = selected
                .iter()
                .map(|symbol| {
                    returns.value_at(row, symbol).unwrap_or(0.0) * self.config.capital / 100.0
                })
                .sum();
            profit.push(period_sum / (self.config.amount as f64 * self.config.capital));
        }

        let nav = calculate_nav_curve(spread.dates(), &profit);
        let report = PerformanceReport::from_profit(&profit, self.config.capital);

        Ok(BacktestResult {
            profit,
            nav,
            trades,
            report,
        })
    }

    //returns a reference to the configuration
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }
}
