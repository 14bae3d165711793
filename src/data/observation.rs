use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("No observations provided")]
    NoObservations,
    #[error("Malformed date '{value}' in column {column} at line {line}")]
    MalformedDate {
        value: String,
        column: &'static str,
        line: usize,
    },
    #[error("Non-finite {column} value {value} for {symbol} on {date}")]
    NonFiniteValue {
        column: &'static str,
        value: f64,
        symbol: String,
        date: NaiveDate,
    },
}

//one contract quote: a single option contract on a single trading date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub symbol: String,
    pub trading_date: NaiveDate,
    pub exercise_date: NaiveDate,
    pub close_price: f64,
    pub price_spread: f64,
}

impl Observation {
    //creates a new Observation with validation
    pub fn new(
        symbol: String,
        trading_date: NaiveDate,
        exercise_date: NaiveDate,
        close_price: f64,
        price_spread: f64,
    ) -> Result<Self, DataError> {
        //validate finite close price
        if !close_price.is_finite() {
            return Err(DataError::NonFiniteValue {
                column: "ClosePrice",
                value: close_price,
                symbol,
                date: trading_date,
            });
        }

        //validate finite spread
        if !price_spread.is_finite() {
            return Err(DataError::NonFiniteValue {
                column: "price_spread",
                value: price_spread,
                symbol,
                date: trading_date,
            });
        }

        Ok(Observation {
            symbol,
            trading_date,
            exercise_date,
            close_price,
            price_spread,
        })
    }

    //creates an Observation without validation
    pub fn new_unchecked(
        symbol: String,
        trading_date: NaiveDate,
        exercise_date: NaiveDate,
        close_price: f64,
        price_spread: f64,
    ) -> Self {
        Observation {
            symbol,
            trading_date,
            exercise_date,
            close_price,
            price_spread,
        }
    }

    //days remaining until exercise on this trading date
    pub fn days_to_exercise(&self) -> i64 {
        (self.exercise_date - self.trading_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_rejects_non_finite_close() {
        let result = Observation::new(
            "IO2309-C-4000".to_string(),
            date("2023-06-01"),
            date("2023-09-15"),
            f64::NAN,
            12.5,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_days_to_exercise() {
        let obs = Observation::new_unchecked(
            "IO2309-C-4000".to_string(),
            date("2023-06-01"),
            date("2023-06-11"),
            80.0,
            12.5,
        );
        assert_eq!(obs.days_to_exercise(), 10);
    }
}
