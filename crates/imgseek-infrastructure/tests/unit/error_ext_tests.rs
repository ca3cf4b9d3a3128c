//! ErrorContext tests

use imgseek_domain::error::Error;
use imgseek_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing().context("Reading models").unwrap_err();

    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Reading models: denied");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: Result<u8, io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            called = true;
            "never"
        })
        .expect("Ok passes through");

    assert_eq!(value, 1);
    assert!(!called);
}

#[test]
fn test_io_context() {
    let err = failing().io_context("Writing index").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Writing index"));
}

#[test]
fn test_config_context() {
    let err = failing().config_context("Parsing imgseek.toml").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}
