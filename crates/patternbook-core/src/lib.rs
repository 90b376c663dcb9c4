//! Core patternbook library: one module per design pattern demonstration.
//!
//! The `patternbook` binary (crate `patternbook-cli`) drives these modules
//! through fixed console sequences.
//!
//! ## Layout
//!
//! - `command/` holds the light remote: receiver, reversible commands and the
//!   single-slot undo invoker.
//! - `strategy`, `builder`, `singleton` cover the other headline patterns.
//! - `state`, `observer`, `factory_method`, `abstract_factory`, `prototype`
//!   round out the collection.
//! - `log` and `config` are the ambient layers every module reports through.

pub mod abstract_factory;
pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod log;
pub mod observer;
pub mod prototype;
pub mod singleton;
pub mod state;
pub mod strategy;

pub use error::Error;

pub(crate) use thiserror::Error as ThisError;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// init and validate config for the current thread
pub fn init_config(toml: &str) -> Result<(), Error> {
    config::Config::init_from_toml(toml).map_err(Error::from)
}
