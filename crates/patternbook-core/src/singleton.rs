use crate::{ThisError, log, log::Topic};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub const DEFAULT_PREFIX: &str = "[Singleton]";

///
/// SingletonError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SingletonError {
    #[error("logger has already been initialized")]
    AlreadyInitialized,
}

///
/// Logger
///
/// Process-wide logger reachable without passing a handle around.
///
/// Initialization happens at most once: either explicitly through [`init`]
/// before anything touches [`global`], or implicitly with [`DEFAULT_PREFIX`]
/// on first access. The instance is read-only afterwards.
///
/// Only the singleton demonstration reaches for this; everything else in the
/// crate receives its collaborators explicitly.
///
/// [`init`]: Logger::init
/// [`global`]: Logger::global
///

#[derive(Debug)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn init(prefix: impl Into<String>) -> Result<&'static Self, SingletonError> {
        let mut created = false;
        let logger = LOGGER.get_or_init(|| {
            created = true;
            Self {
                prefix: prefix.into(),
            }
        });

        if created {
            Ok(logger)
        } else {
            Err(SingletonError::AlreadyInitialized)
        }
    }

    #[must_use]
    pub fn global() -> &'static Self {
        LOGGER.get_or_init(|| Self {
            prefix: DEFAULT_PREFIX.to_string(),
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when `self` is the process-wide instance rather than a copy.
    #[must_use]
    pub fn is_global(&self) -> bool {
        LOGGER.get().is_some_and(|global| std::ptr::eq(global, self))
    }

    pub fn log(&self, message: &str) {
        log!(Topic::Singleton, Info, "{} {message}", self.prefix);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_returns_one_instance() {
        let a = Logger::global();
        let b = Logger::global();

        assert!(std::ptr::eq(a, b));
        assert!(a.is_global());
    }

    #[test]
    fn init_after_first_access_is_rejected() {
        let _ = Logger::global();

        assert_eq!(
            Logger::init("[Late]").unwrap_err(),
            SingletonError::AlreadyInitialized
        );
        assert_ne!(Logger::global().prefix(), "[Late]");
    }

    #[test]
    fn detached_logger_is_not_global() {
        let local = Logger {
            prefix: "[Local]".to_string(),
        };
        let _ = Logger::global();

        assert!(!local.is_global());
    }
}
