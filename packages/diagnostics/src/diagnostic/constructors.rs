//! Diagnostic constructors

use super::types::{Data, Diagnostic, External, Repr};
use std::error::Error;
use std::sync::Arc;

impl Diagnostic {
    /// The absent failure
    #[must_use]
    pub fn none() -> Self {
        Self { repr: Repr::Empty }
    }

    /// A failure described only by a message
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self {
            repr: Repr::Leaf {
                message: message.into(),
                data: Data::new(),
            },
        }
    }

    /// Adopt an optional external failure
    ///
    /// `None` yields the absent failure, so the optional error of a fallible
    /// call converts without branching.
    pub fn from_external<E>(failure: Option<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        failure.map_or_else(Self::none, Self::from_error)
    }

    /// Adopt an external failure
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(error))
    }

    /// Adopt an already type-erased external failure
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_shared(Arc::from(error))
    }

    /// Adopt a shared external failure, keeping its identity
    #[must_use]
    pub fn from_shared(external: External) -> Self {
        Self {
            repr: Repr::Wrapped {
                external,
                data: Data::new(),
            },
        }
    }

    /// Adopt the failure of a fallible call, if any
    pub fn from_result<T, E>(result: std::result::Result<T, E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_external(result.err())
    }
}
