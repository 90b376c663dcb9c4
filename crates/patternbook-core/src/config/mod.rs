pub mod schema;

use crate::{ThisError, log, log::Topic};
use schema::{ConfigSchemaError, Validate};
use std::{cell::RefCell, sync::Arc};

pub use schema::{ConfigModel, LogConfig, SingletonConfig, StrategyConfig};

//
// CONFIG
//
// One config per thread. The CLI initializes it once before running any
// demonstration; anything that reads config before that (library callers,
// unit tests) sees the defaults.
//

thread_local! {
    static CONFIG: RefCell<Option<Arc<ConfigModel>>> = const { RefCell::new(None) };
}

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///

pub struct Config {}

impl Config {
    /// Current config, or the defaults when nothing has been initialized.
    #[must_use]
    pub fn get() -> Arc<ConfigModel> {
        Self::try_get().unwrap_or_default()
    }

    #[must_use]
    pub fn try_get() -> Option<Arc<ConfigModel>> {
        CONFIG.with_borrow(Clone::clone)
    }

    /// Initialize the thread's configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<(), ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        // validate
        config.validate().map_err(ConfigError::from)?;

        CONFIG.with_borrow_mut(|cfg| {
            if cfg.is_some() {
                return Err(ConfigError::AlreadyInitialized);
            }
            *cfg = Some(Arc::new(config));

            Ok(())
        })?;

        log!(Topic::Config, Debug, "config initialized");

        Ok(())
    }

    /// Test-only: install an in-memory model, replacing any existing one.
    #[cfg(test)]
    pub fn init_from_model_for_tests(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        config.validate()?;

        let arc = Arc::new(config);
        CONFIG.with_borrow_mut(|cfg| *cfg = Some(arc.clone()));

        Ok(arc)
    }

    /// Test-only: forget the thread's config.
    #[cfg(test)]
    pub fn reset_for_tests() {
        CONFIG.with_borrow_mut(|cfg| *cfg = None);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Level;

    #[test]
    fn uninitialized_config_falls_back_to_defaults() {
        Config::reset_for_tests();

        let cfg = Config::get();
        assert_eq!(cfg.log.level, Level::Info);
        assert_eq!(cfg.strategy.amount_cents, 12_050);
        assert_eq!(cfg.singleton.prefix, "[Singleton]");
        assert!(Config::try_get().is_none());
    }

    #[test]
    fn init_from_toml_parses_and_stores() {
        Config::reset_for_tests();

        let toml = r#"
            [log]
            level = "Warn"
            max_entries = 50
            color = false

            [strategy]
            amount_cents = 999
        "#;
        Config::init_from_toml(toml).unwrap();

        let cfg = Config::get();
        assert_eq!(cfg.log.level, Level::Warn);
        assert_eq!(cfg.log.max_entries, 50);
        assert!(!cfg.log.color);
        assert_eq!(cfg.strategy.amount_cents, 999);
        assert_eq!(cfg.singleton.prefix, "[Singleton]");
    }

    #[test]
    fn second_init_is_rejected() {
        Config::reset_for_tests();

        Config::init_from_toml("").unwrap();
        let err = Config::init_from_toml("").unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        Config::reset_for_tests();

        let err = Config::init_from_toml("[log]\nverbosity = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
        assert!(Config::try_get().is_none());
    }

    #[test]
    fn invalid_values_fail_validation() {
        Config::reset_for_tests();

        let err = Config::init_from_toml("[strategy]\namount_cents = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSchema(_)));
        assert!(Config::try_get().is_none());
    }
}
