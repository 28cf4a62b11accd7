//! Macros for building and returning diagnostics

/// Create a leaf diagnostic from a format string
#[doc(hidden)]
#[macro_export]
macro_rules! diag {
    ($($arg:tt)+) => {
        $crate::Diagnostic::from_message(format!($($arg)+))
    };
}

/// Return early with a leaf diagnostic
#[doc(hidden)]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return Err($crate::diag!($($arg)+).into())
    };
}

/// Return early with a leaf diagnostic unless a condition holds
#[doc(hidden)]
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
