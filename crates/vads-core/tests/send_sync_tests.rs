//! Tests to verify that all public types are Send + Sync as required.

use vads_docs_core::cli::{ExitCode, OutputFormat};
use vads_docs_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_component_types_are_send_sync() {
    assert_send_sync::<ComponentBlock>();
    assert_send_sync::<Property>();
    assert_send_sync::<ComponentData>();
    assert_send_sync::<ComponentRegistry>();
    assert_send_sync::<ComponentStatus>();
    assert_send_sync::<MaturityCategory>();
    assert_send_sync::<MaturityLevel>();
}

#[test]
fn test_example_types_are_send_sync() {
    assert_send_sync::<Example>();
    assert_send_sync::<ExampleType>();
    assert_send_sync::<GenerateOptions>();
}

#[test]
fn test_config_and_cli_types_are_send_sync() {
    assert_send_sync::<ParserConfig>();
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
