mod log;

pub use log::*;

use crate::ThisError;
use serde::{Deserialize, Serialize};

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub const NAME_MAX_BYTES: usize = 40;

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub strategy: StrategyConfig,

    #[serde(default)]
    pub singleton: SingletonConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.log.validate()?;
        self.strategy.validate()?;
        self.singleton.validate()?;

        Ok(())
    }
}

///
/// Defaults
///

mod defaults {
    pub const fn amount_cents() -> u64 {
        12_050
    }

    pub fn prefix() -> String {
        "[Singleton]".to_string()
    }
}

///
/// StrategyConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// Amount charged by the payment demonstration, in cents.
    #[serde(default = "defaults::amount_cents")]
    pub amount_cents: u64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            amount_cents: defaults::amount_cents(),
        }
    }
}

impl Validate for StrategyConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.amount_cents == 0 {
            return Err(ConfigSchemaError::ValidationError(
                "strategy.amount_cents must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

///
/// SingletonConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SingletonConfig {
    #[serde(default = "defaults::prefix")]
    pub prefix: String,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            prefix: defaults::prefix(),
        }
    }
}

impl Validate for SingletonConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.prefix.trim().is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "singleton.prefix must not be empty".into(),
            ));
        }

        if self.prefix.len() > NAME_MAX_BYTES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "singleton.prefix '{}' exceeds {NAME_MAX_BYTES} bytes",
                self.prefix
            )));
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_valid() {
        ConfigModel::default().validate().unwrap();
    }

    #[test]
    fn long_prefix_is_rejected() {
        let cfg = SingletonConfig {
            prefix: "x".repeat(NAME_MAX_BYTES + 1),
        };

        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_prefix_is_rejected() {
        let cfg = SingletonConfig {
            prefix: "   ".to_string(),
        };

        assert!(cfg.validate().is_err());
    }
}
