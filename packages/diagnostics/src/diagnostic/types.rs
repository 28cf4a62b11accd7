//! Core diagnostic types

use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Structured context of a single layer, iterated in key order
pub type Data = BTreeMap<String, Value>;

/// An error adopted from outside the diagnostic chain
///
/// Only its display text, dynamic type and `source()` chain are used.
pub type External = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// An absent failure, or a chain of failure layers
///
/// Values are immutable: every transformation consumes the receiver and
/// returns a new diagnostic. Clones are deep apart from the shared,
/// read-only external error, so data attached to one clone never shows up
/// in another.
#[derive(Default)]
pub struct Diagnostic {
    pub(super) repr: Repr,
}

#[derive(Default)]
pub(super) enum Repr {
    /// No failure
    #[default]
    Empty,
    /// A locally originated failure
    Leaf { message: String, data: Data },
    /// A failure adopted from another error type
    Wrapped { external: External, data: Data },
    /// A context message around an exclusively owned cause
    Layered {
        message: String,
        data: Data,
        inner: Box<Diagnostic>,
    },
}

impl Clone for Diagnostic {
    fn clone(&self) -> Self {
        // Rebuilt from the terminal layer outward, one layer per iteration
        let layers: Vec<&Self> = self.layers().collect();
        let mut cloned = Self::none();
        for layer in layers.into_iter().rev() {
            let repr = match &layer.repr {
                Repr::Empty => Repr::Empty,
                Repr::Leaf { message, data } => Repr::Leaf {
                    message: message.clone(),
                    data: data.clone(),
                },
                Repr::Wrapped { external, data } => Repr::Wrapped {
                    external: Arc::clone(external),
                    data: data.clone(),
                },
                Repr::Layered { message, data, .. } => Repr::Layered {
                    message: message.clone(),
                    data: data.clone(),
                    inner: Box::new(std::mem::take(&mut cloned)),
                },
            };
            cloned = Self { repr };
        }
        cloned
    }
}

impl Drop for Diagnostic {
    fn drop(&mut self) {
        // Unlink inner layers one at a time so each box drops an empty repr
        let mut next = std::mem::take(&mut self.repr);
        while let Repr::Layered { mut inner, .. } = next {
            next = std::mem::take(&mut inner.repr);
        }
    }
}

/// Result type alias using [`Diagnostic`] as the error
pub type Result<T> = std::result::Result<T, Diagnostic>;
