//! Construction, failure state and layer accessors

use diagnostics::{Diagnostic, Value};
use std::error::Error;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("some inner error")]
struct InnerError;

#[test]
fn test_starts_out_as_nothing() {
    let diagnostic = Diagnostic::none();
    assert!(!diagnostic.is_err());
    assert!(diagnostic.as_failure().is_none());
    assert!(diagnostic.into_result().is_ok());

    let diagnostic = Diagnostic::from_external(None::<InnerError>);
    assert!(!diagnostic.is_err());
    assert!(diagnostic.as_failure().is_none());

    assert!(!Diagnostic::default().is_err());
}

#[test]
fn test_created_from_message() {
    let diagnostic = Diagnostic::from_message("this failed");

    assert!(diagnostic.is_err());
    assert!(diagnostic.as_failure().is_some());
    assert_eq!(diagnostic.user_facing(), "this failed");
    assert_eq!(diagnostic.message(), Some("this failed"));
    assert!(diagnostic.inner().is_none());
    assert!(diagnostic.external().is_none());
}

#[test]
fn test_empty_message_is_still_a_failure() {
    assert!(Diagnostic::from_message("").is_err());
}

#[test]
fn test_created_from_external_failure() {
    let diagnostic = Diagnostic::from_external(Some(InnerError));

    assert!(diagnostic.is_err());
    assert_eq!(diagnostic.user_facing(), "some inner error");
    assert_eq!(diagnostic.message(), None);
    assert!(diagnostic.external().is_some());

    let failure = diagnostic.as_failure();
    assert_eq!(
        failure.map(|d| d.display()),
        Some("some inner error".to_string())
    );
}

#[test]
fn test_created_from_result() {
    let ok: Result<u8, InnerError> = Ok(1);
    assert!(!Diagnostic::from_result(ok).is_err());

    let err: Result<u8, InnerError> = Err(InnerError);
    let diagnostic = Diagnostic::from_result(err);
    assert!(diagnostic.is_err());
    assert_eq!(diagnostic.display(), "some inner error");
}

#[test]
fn test_created_from_boxed_failure() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(InnerError);
    let diagnostic = Diagnostic::from_boxed(boxed).wrap("loading");

    assert_eq!(diagnostic.display(), "loading: some inner error");
    assert!(diagnostic.is_caused_by::<InnerError>());
}

#[test]
fn test_created_from_shared_failure_keeps_identity() {
    let shared: diagnostics::External = Arc::new(InnerError);
    let diagnostic = Diagnostic::from_shared(Arc::clone(&shared)).wrap("outer");

    let terminal = diagnostic.layers().last().and_then(Diagnostic::external);
    assert!(terminal.is_some_and(|external| Arc::ptr_eq(external, &shared)));
}

#[test]
fn test_into_result_hands_failure_over() {
    let result = Diagnostic::from_message("nope").wrap("outer").into_result();
    let err = result.expect_err("a failure must become Err");
    assert_eq!(err.display(), "outer: nope");
}

#[test]
fn test_wrapping_nothing_is_a_failure() {
    let diagnostic = Diagnostic::none().wrap("outer");

    assert!(diagnostic.is_err());
    assert_eq!(diagnostic.display(), "outer: ");
    assert_eq!(diagnostic.user_facing(), "outer\n    ┗━ ");
    assert!(diagnostic.inner().is_some_and(|inner| !inner.is_err()));
}

#[test]
fn test_data_on_nothing_is_a_failure() {
    let diagnostic = Diagnostic::none().with_data("foo", 1);

    assert!(diagnostic.is_err());
    assert_eq!(diagnostic.message(), Some(""));
    assert_eq!(diagnostic.display(), "");
    assert_eq!(diagnostic.user_facing(), ": foo = 1");

    let merged = Diagnostic::none().with_all_data(Vec::<(String, Value)>::new());
    assert!(merged.is_err());
    assert_eq!(merged.user_facing(), "");

    let merged = Diagnostic::none().with_all_data([("b", 2), ("a", 1)]);
    assert!(merged.is_err());
    assert_eq!(merged.message(), Some(""));
    assert_eq!(merged.user_facing(), ": a = 1, b = 2");
}

#[test]
fn test_transformations_leave_clones_untouched() {
    let base = Diagnostic::from_message("base").with_data("a", 1);
    let wrapped = base.clone().wrap("outer");
    let annotated = base.clone().with_data("b", 2);

    assert_eq!(base.user_facing(), "base: a = 1");
    assert_eq!(wrapped.user_facing(), "outer\n    ┗━ base: a = 1");
    assert_eq!(annotated.user_facing(), "base: a = 1, b = 2");
}

#[test]
fn test_layers_walk_outermost_first() {
    let diagnostic = Diagnostic::from_error(InnerError)
        .with_data("attempt", 3)
        .wrap("fetching")
        .wrap("syncing");

    let messages: Vec<_> = diagnostic.layers().map(|layer| layer.message()).collect();
    assert_eq!(messages, vec![Some("syncing"), Some("fetching"), None]);

    let terminal = diagnostic.layers().last().expect("chain has a terminal layer");
    assert_eq!(terminal.data().and_then(|d| d.get("attempt")), Some(&Value::Int(3)));
    assert!(diagnostic.data().is_some_and(|d| d.is_empty()));
    assert_eq!(Diagnostic::none().layers().count(), 1);
    assert!(Diagnostic::none().data().is_none());
}

#[test]
fn test_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Diagnostic>();

    let diagnostic = Diagnostic::from_error(InnerError).wrap("shared");
    let handle = std::thread::spawn(move || diagnostic.user_facing());
    assert_eq!(
        handle.join().expect("render thread panicked"),
        "shared\n    ┗━ some inner error"
    );
}
