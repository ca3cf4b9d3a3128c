//! Unit tests for domain error types

use imgseek_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("index at image_index.pkl");
    match &error {
        Error::NotFound { resource } => assert_eq!(resource, "index at image_index.pkl"),
        _ => panic!("Expected NotFound error"),
    }
    assert!(error.is_not_found());
    assert!(!error.is_invalid_argument());
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("query must not be empty");
    match &error {
        Error::InvalidArgument { message } => assert_eq!(message, "query must not be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
    assert!(error.is_invalid_argument());
}

#[test]
fn test_embedding_error() {
    let error = Error::embedding("cannot decode image");
    match error {
        Error::Embedding { message } => assert_eq!(message, "cannot decode image"),
        _ => panic!("Expected Embedding error"),
    }
}

#[test]
fn test_corrupt_index_error() {
    let error = Error::corrupt_index("bad magic");
    assert_eq!(error.to_string(), "Corrupt index: bad magic");
}

#[test]
fn test_empty_index_error() {
    let error = Error::EmptyIndex;
    assert!(error.is_empty_index());
    assert!(!error.is_not_found());
    assert!(error.to_string().contains("Index is empty"));
}

#[test]
fn test_io_error_with_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io_with_source("Failed to read image", source);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_from_std_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("port must not be 0");
    assert_eq!(error.to_string(), "Configuration error: port must not be 0");
    assert!(matches!(error, Error::Configuration { source: None, .. }));
}
