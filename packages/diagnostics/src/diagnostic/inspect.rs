//! Read-only access and causal lookup

use super::types::{Data, Diagnostic, External, Repr};
use std::error::Error;
use std::iter::FusedIterator;

impl Diagnostic {
    /// Whether this diagnostic is a failure
    ///
    /// Only [`Diagnostic::none`] and an adopted absent failure are not.
    #[must_use]
    pub fn is_err(&self) -> bool {
        !matches!(self.repr, Repr::Empty)
    }

    /// This diagnostic as a failure handle, if it is one
    #[must_use]
    pub fn as_failure(&self) -> Option<Self> {
        self.is_err().then(|| self.clone())
    }

    /// Hand this diagnostic to `?` propagation
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when this diagnostic is a failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_err() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// The message of this layer
    ///
    /// `None` for wrapped external failures and the absent failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.repr {
            Repr::Leaf { message, .. } | Repr::Layered { message, .. } => Some(message),
            Repr::Wrapped { .. } | Repr::Empty => None,
        }
    }

    /// The data attached to this layer only
    #[must_use]
    pub fn data(&self) -> Option<&Data> {
        match &self.repr {
            Repr::Leaf { data, .. } | Repr::Wrapped { data, .. } | Repr::Layered { data, .. } => {
                Some(data)
            }
            Repr::Empty => None,
        }
    }

    /// The cause this layer was wrapped around
    #[must_use]
    pub fn inner(&self) -> Option<&Self> {
        match &self.repr {
            Repr::Layered { inner, .. } => Some(inner),
            _ => None,
        }
    }

    /// The external failure held by this layer
    #[must_use]
    pub fn external(&self) -> Option<&External> {
        match &self.repr {
            Repr::Wrapped { external, .. } => Some(external),
            _ => None,
        }
    }

    /// Walk the chain from this layer to its terminal layer
    #[must_use]
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// Whether `target` is the wrapped external failure or one of its causes
    ///
    /// Message layers are skipped down to the first wrapped failure, whose
    /// own `source()` chain is then compared by value.
    pub fn matches<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.causes()
            .any(|cause| cause.downcast_ref::<E>().is_some_and(|found| found == target))
    }

    /// Whether the wrapped external failure or one of its causes is an `E`
    #[must_use]
    pub fn is_caused_by<E: Error + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Borrow the first `E` along the wrapped failure's causal chain
    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.causes().find_map(|cause| cause.downcast_ref::<E>())
    }

    /// Recover a copy of the first `E` along the wrapped failure's causal chain
    #[must_use]
    pub fn extract_as<E: Error + Clone + 'static>(&self) -> Option<E> {
        self.downcast_ref::<E>().cloned()
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let root = self
            .layers()
            .find_map(Self::external)
            .map(|external| &**external as &(dyn Error + 'static));
        std::iter::successors(root, |&cause| cause.source())
    }
}

/// Iterator over the layers of a diagnostic, outermost first
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a Diagnostic>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for Layers<'_> {}
