//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use sift_foundation::{Arity, Error, ErrorContext, ErrorKind, TypeTag};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(TypeTag::Array, TypeTag::Object);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch: expected array, got object");
}

#[test]
fn error_not_a_collection() {
    let err = Error::not_a_collection(TypeTag::Boolean);
    assert!(matches!(err.kind, ErrorKind::NotACollection(TypeTag::Boolean)));
    assert!(err.to_string().contains("boolean"));
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch(Arity::Range(2, 3), 5);
    assert_eq!(err.to_string(), "arity mismatch: expected 2..3, got 5");
}

#[test]
fn error_undefined_function() {
    let err = Error::undefined_function("zip");
    assert!(matches!(err.kind, ErrorKind::UndefinedFunction(_)));
    assert!(err.to_string().contains("zip"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::not_callable(TypeTag::String);
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let err = Error::not_callable(TypeTag::String)
        .with_context(ErrorContext::new().with_frame("map").with_frame("outer"));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.stack.len(), 2);
    assert_eq!(ctx.stack[0], "map");
}

#[test]
fn error_in_frame_extends_existing_context() {
    let err = Error::not_callable(TypeTag::String)
        .with_context(ErrorContext::new().with_frame("inner"))
        .in_frame("outer");
    assert_eq!(
        err.context.unwrap().stack,
        vec!["inner".to_string(), "outer".to_string()]
    );
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::undefined_function("x"));
}
