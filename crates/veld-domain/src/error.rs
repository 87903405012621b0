//! Error handling types

use crate::value_objects::Diagnostic;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Veld resolver
///
/// The resolution engine itself reports problems as [`Diagnostic`] lists;
/// this type covers everything around it (loading descriptors, reading
/// configuration, writing plans) and wraps a failed resolution when a caller
/// wants a single `?`-friendly error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Descriptor input that cannot be used (malformed, empty ids, ...)
    #[error("Invalid descriptor: {message}")]
    InvalidDescriptor {
        /// Description of the descriptor problem
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resolution finished with at least one ERROR diagnostic
    #[error("Resolution failed with {} error(s)", count_errors(.diagnostics))]
    ResolutionFailed {
        /// Every diagnostic produced by the failed run
        diagnostics: Vec<Diagnostic>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

// Basic error creation methods
impl Error {
    /// Create an invalid descriptor error
    pub fn invalid_descriptor<S: Into<String>>(message: S) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    /// Wrap the diagnostics of a failed resolution
    pub fn resolution_failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self::ResolutionFailed { diagnostics }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Diagnostics carried by a failed resolution, empty for any other error
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::ResolutionFailed { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}
