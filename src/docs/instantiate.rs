use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::trace;

/// Why an exception type could not be built without arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstantiateError {
    #[error("{0} requires constructor arguments")]
    ArgumentsRequired(&'static str),

    #[error("constructor failed: {0}")]
    Failed(String),
}

/// Zero-argument construction used for introspection only.
///
/// Instances built this way are read and dropped, never raised.
/// Report a missing argument with `Err`, not a panic: a panic is recovered
/// but the global panic hook still prints it to stderr.
pub trait Instantiate: Sized {
    fn instantiate() -> Result<Self, InstantiateError>;
}

/// Try to build `T` with no arguments.
///
/// Returns `None` when the constructor reports an error or panics. A panic
/// still goes through the installed panic hook before it is caught.
pub fn try_instantiate<T: Instantiate>() -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(T::instantiate)) {
        Ok(Ok(instance)) => Some(instance),
        Ok(Err(e)) => {
            trace!(
                exception = short_type_name::<T>(),
                error = %e,
                "Exception not instantiable"
            );
            None
        }
        Err(_) => {
            trace!(
                exception = short_type_name::<T>(),
                "Exception constructor panicked"
            );
            None
        }
    }
}

/// Type name without its module path
pub fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{HttpException, NotFoundException};

    struct Exploding;

    impl Instantiate for Exploding {
        fn instantiate() -> Result<Self, InstantiateError> {
            panic!("needs a payload");
        }
    }

    #[test]
    fn test_zero_arg_exception_instantiates() {
        let instance = try_instantiate::<NotFoundException>();
        assert_eq!(instance, Some(NotFoundException::default()));
    }

    #[test]
    fn test_exception_requiring_arguments_is_absent() {
        assert!(try_instantiate::<HttpException>().is_none());
    }

    #[test]
    fn test_panicking_constructor_is_absent() {
        assert!(try_instantiate::<Exploding>().is_none());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<NotFoundException>(), "NotFoundException");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }
}
