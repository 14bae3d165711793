use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("period must be a positive number of trading dates, got {0}")]
    InvalidPeriod(usize),
    #[error("amount must be a positive number of contracts, got {0}")]
    InvalidAmount(usize),
    #[error("capital must be positive, got {0}")]
    InvalidCapital(f64),
    #[error("multiplier must be positive, got {0}")]
    InvalidMultiplier(f64),
}

//complete strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    //trading dates between rebalances
    pub period: usize,

    //total notional capital
    pub capital: f64,

    //contracts sold per rebalance
    pub amount: usize,

    //contract notional multiplier (100 for the 300ETF, 300 for the 50ETF)
    pub multiplier: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            period: 5,
            capital: 1_000_000.0,
            amount: 5,
            multiplier: 100.0,
        }
    }
}

impl StrategyConfig {
    //validates all fields, naming the first offending one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::InvalidPeriod(self.period));
        }
        if self.amount == 0 {
            return Err(ConfigError::InvalidAmount(self.amount));
        }
        if !(self.capital > 0.0) {
            return Err(ConfigError::InvalidCapital(self.capital));
        }
        if !(self.multiplier > 0.0) {
            return Err(ConfigError::InvalidMultiplier(self.multiplier));
        }
        Ok(())
    }

    //load configuration from a JSON file
    pub fn from_json_file(path: &PathBuf) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: StrategyConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(StrategyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_period() {
        let config = StrategyConfig {
            period: 0,
            ..Default::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("period"));
    }

    #[test]
    fn test_rejects_zero_amount() {
        let config = StrategyConfig {
            amount: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAmount(0))
        ));
    }

    #[test]
    fn test_rejects_non_positive_capital() {
        let config = StrategyConfig {
            capital: -5.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCapital(_))));

        let config = StrategyConfig {
            capital: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = StrategyConfig {
            period: 7,
            capital: 500_000.0,
            amount: 3,
            multiplier: 300.0,
        };
        config.to_json_file(&path).unwrap();

        let loaded = StrategyConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded.period, 7);
        assert_eq!(loaded.capital, 500_000.0);
        assert_eq!(loaded.amount, 3);
        assert_eq!(loaded.multiplier, 300.0);
    }
}
