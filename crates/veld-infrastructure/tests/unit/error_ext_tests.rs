//! Error Extension Tests

use std::io;
use veld_domain::Error;
use veld_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_context_maps_to_infrastructure_error() {
    let error = failing().context("Failed to open plan").unwrap_err();
    match error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Failed to open plan: denied");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let error = failing().with_context(|| format!("step {}", 3)).unwrap_err();
    assert!(error.to_string().contains("step 3: denied"));
}

#[test]
fn test_io_and_config_context_variants() {
    assert!(matches!(
        failing().io_context("reading").unwrap_err(),
        Error::Io { .. }
    ));
    assert!(matches!(
        failing().config_context("loading").unwrap_err(),
        Error::Configuration { .. }
    ));
}
