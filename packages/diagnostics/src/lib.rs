//! Layered diagnostics for error propagation
//!
//! A [`Diagnostic`] is either "no failure" or a chain of failure layers:
//! - human-readable messages stacked from the outermost context inward
//! - structured key/value data attached to individual layers
//! - an optional wrapped external error that can still be matched and
//!   downcast through any number of layers
//!
//! Two renderings are provided: [`Diagnostic::display`] is the flat one-liner
//! used by `Display`, [`Diagnostic::user_facing`] is the indented tree with
//! every layer's data.

pub mod diagnostic;
pub mod extensions;
#[cfg(feature = "logging")]
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod value;

pub use diagnostic::{Data, Diagnostic, External, Layers, Result};
pub use extensions::{DiagnosticResultExt, OptionExt, ResultExt};
#[cfg(feature = "logging")]
pub use logging::DiagnosticLogger;
pub use value::Value;
