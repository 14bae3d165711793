use crate::data::observation::{DataError, Observation};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "TradingDate")]
    trading_date: String,
    #[serde(rename = "ExerciseDate")]
    exercise_date: String,
    #[serde(rename = "ClosePrice")]
    close_price: f64,
    price_spread: f64,
}

fn parse_date(value: &str, column: &'static str, line: usize) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DataError::MalformedDate {
        value: value.to_string(),
        column,
        line,
    })
}

//loads contract observations from a csv file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let mut observations = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record: CsvRecord =
            result.context(format!("Failed to parse CSV record at line {}", index + 2))?;

        let trading_date = parse_date(&record.trading_date, "TradingDate", index + 2)?;
        let exercise_date = parse_date(&record.exercise_date, "ExerciseDate", index + 2)?;

        let observation = Observation::new(
            record.symbol,
            trading_date,
            exercise_date,
            record.close_price,
            record.price_spread,
        )?;

        observations.push(observation);
    }

    //sort by trading date to ensure chronological order
    observations.sort_by(|a, b| a.trading_date.cmp(&b.trading_date));

    Ok(observations)
}

//filters observations by symbol
pub fn filter_by_symbol(observations: &[Observation], symbol: &str) -> Vec<Observation> {
    observations
        .iter()
        .filter(|obs| obs.symbol == symbol)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_csv_sorts_by_trading_date() {
        let file = write_csv(
            "Symbol,TradingDate,ExerciseDate,ClosePrice,price_spread\n\
             IO2309-C-4200,2023-06-02,2023-09-15,55.0,14.0\n\
             IO2309-C-4000,2023-06-01,2023-09-15,80.0,12.5\n",
        );

        let observations = load_csv(file.path()).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].symbol, "IO2309-C-4000");
        assert_eq!(observations[1].symbol, "IO2309-C-4200");
        assert!(observations[0].trading_date < observations[1].trading_date);
    }

    #[test]
    fn test_load_csv_rejects_malformed_date() {
        let file = write_csv(
            "Symbol,TradingDate,ExerciseDate,ClosePrice,price_spread\n\
             IO2309-C-4000,06/01/2023,2023-09-15,80.0,12.5\n",
        );

        let result = load_csv(file.path());
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("TradingDate"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn test_load_csv_rejects_missing_column() {
        let file = write_csv(
            "Symbol,TradingDate,ClosePrice,price_spread\n\
             IO2309-C-4000,2023-06-01,80.0,12.5\n",
        );

        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn test_filter_by_symbol() {
        let file = write_csv(
            "Symbol,TradingDate,ExerciseDate,ClosePrice,price_spread\n\
             IO2309-C-4000,2023-06-01,2023-09-15,80.0,12.5\n\
             IO2309-C-4200,2023-06-01,2023-09-15,55.0,14.0\n",
        );

        let observations = load_csv(file.path()).unwrap();
        let filtered = filter_by_symbol(&observations, "IO2309-C-4200");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].symbol, "IO2309-C-4200");
    }
}
