//! Extension traits bridging `Result` and `Option` into diagnostics

use crate::diagnostic::Diagnostic;
use crate::value::Value;
use std::error::Error;

/// Adopt the error of a foreign `Result` into a diagnostic chain
pub trait ResultExt<T> {
    /// Wrap the error and add `message` as context around it
    ///
    /// # Errors
    ///
    /// Returns the layered diagnostic when `self` is `Err`.
    fn diagnose<S: Into<String>>(self, message: S) -> Result<T, Diagnostic>;

    /// Wrap the error and decorate it with `f`, called only on failure
    ///
    /// # Errors
    ///
    /// Returns the decorated diagnostic when `self` is `Err`.
    fn diagnose_with<F>(self, f: F) -> Result<T, Diagnostic>
    where
        F: FnOnce(Diagnostic) -> Diagnostic;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn diagnose<S: Into<String>>(self, message: S) -> Result<T, Diagnostic> {
        self.map_err(|e| Diagnostic::from_error(e).wrap(message))
    }

    fn diagnose_with<F>(self, f: F) -> Result<T, Diagnostic>
    where
        F: FnOnce(Diagnostic) -> Diagnostic,
    {
        self.map_err(|e| f(Diagnostic::from_error(e)))
    }
}

/// Decorate the error of a `Result` that already carries a diagnostic
pub trait DiagnosticResultExt<T> {
    /// Add `message` as a new outer layer
    ///
    /// # Errors
    ///
    /// Returns the wrapped diagnostic when `self` is `Err`.
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, Diagnostic>;

    /// Attach `key = value` to the outermost layer
    ///
    /// # Errors
    ///
    /// Returns the annotated diagnostic when `self` is `Err`.
    fn err_data<K, V>(self, key: K, value: V) -> Result<T, Diagnostic>
    where
        K: Into<String>,
        V: Into<Value>;
}

impl<T> DiagnosticResultExt<T> for Result<T, Diagnostic> {
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, Diagnostic> {
        self.map_err(|d| d.wrap(message))
    }

    fn err_data<K, V>(self, key: K, value: V) -> Result<T, Diagnostic>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.map_err(|d| d.with_data(key, value))
    }
}

/// Turn a missing value into a diagnostic
pub trait OptionExt<T> {
    /// `Some(v)` passes through, `None` becomes a failure with `message`
    ///
    /// # Errors
    ///
    /// Returns a leaf diagnostic carrying `message` when `self` is `None`.
    fn ok_or_diagnostic<S: Into<String>>(self, message: S) -> Result<T, Diagnostic>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_diagnostic<S: Into<String>>(self, message: S) -> Result<T, Diagnostic> {
        self.ok_or_else(|| Diagnostic::from_message(message))
    }
}
