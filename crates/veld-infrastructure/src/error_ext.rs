//! Error extension utilities
//!
//! Context extension methods that turn foreign errors into the domain
//! [`Error`] with a readable message.

use std::fmt;
use veld_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```no_run
/// use veld_infrastructure::error_ext::ErrorContext;
///
/// # fn load(path: &std::path::Path) -> veld_domain::Result<String> {
/// let content = std::fs::read_to_string(path)
///     .io_context(format!("Failed to read descriptors: {}", path.display()))?;
/// # Ok(content)
/// # }
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to the domain Error type
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{}: {err}", f()),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }
}
