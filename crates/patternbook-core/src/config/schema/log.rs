use super::{ConfigSchemaError, Validate};
use crate::log::Level;
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    use crate::log::Level;

    pub const fn level() -> Level {
        Level::Info
    }

    pub const fn max_entries() -> u64 {
        1_000
    }

    pub const fn color() -> bool {
        true
    }
}

pub const MAX_LOG_ENTRIES: u64 = 100_000;

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Entries below this level are neither printed nor buffered.
    #[serde(default = "defaults::level")]
    pub level: Level,

    #[serde(default = "defaults::max_entries")]
    pub max_entries: u64,

    #[serde(default = "defaults::color")]
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
            max_entries: defaults::max_entries(),
            color: defaults::color(),
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_entries == 0 {
            return Err(ConfigSchemaError::ValidationError(
                "log.max_entries must be at least 1".into(),
            ));
        }

        if self.max_entries > MAX_LOG_ENTRIES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "log.max_entries {} exceeds max {}",
                self.max_entries, MAX_LOG_ENTRIES
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
    fn max_entries_bounds_are_enforced() {
        let mut cfg = LogConfig::default();
        cfg.validate().unwrap();

        cfg.max_entries = 0;
        assert!(cfg.validate().is_err());

        cfg.max_entries = MAX_LOG_ENTRIES + 1;
        assert!(cfg.validate().is_err());

        cfg.max_entries = MAX_LOG_ENTRIES;
        cfg.validate().unwrap();
    }
}
