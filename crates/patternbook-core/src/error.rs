use crate::{
    ThisError, builder::BuildError, config::ConfigError, factory_method::FactoryError,
    singleton::SingletonError, state::StateError, strategy::PaymentError,
};

///
/// Error
///
/// Crate-level error envelope.
///
/// The command module never produces one of these: every command operation
/// either succeeds or is a guarded no-op. The remaining demonstrations use
/// their own module errors and convert into this type at the boundary.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Singleton(#[from] SingletonError),

    #[error(transparent)]
    State(#[from] StateError),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_errors_render_through_the_envelope() {
        let err = Error::from(PaymentError::NoStrategy);
        assert_eq!(err.to_string(), PaymentError::NoStrategy.to_string());

        let err = Error::from(BuildError::MissingCpu);
        assert!(matches!(err, Error::Build(BuildError::MissingCpu)));
    }
}
