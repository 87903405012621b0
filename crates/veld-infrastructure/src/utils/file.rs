//! File I/O utilities
//!
//! Common patterns for JSON serialization, file writing, and error handling
//! shared by the adapters.

use std::path::Path;

use veld_domain::error::{Error, Result};

/// File utilities for common I/O patterns
///
/// Each helper takes a `context` description (e.g. "descriptor file") used
/// in error messages.
pub struct FileUtils;

impl FileUtils {
    /// Serialize a value as pretty JSON with a trailing newline
    pub fn to_json_string<T: serde::Serialize>(value: &T, context: &str) -> Result<String> {
        let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::Infrastructure {
            message: format!("Failed to serialize {context}: {e}"),
            source: Some(Box::new(e)),
        })?;
        content.push('\n');
        Ok(content)
    }

    /// Parse JSON text with proper error handling
    pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str, context: &str) -> Result<T> {
        serde_json::from_str(content).map_err(|e| Error::InvalidDescriptor {
            message: format!("Failed to parse {context}: {e}"),
        })
    }

    /// Read JSON from file with proper error handling
    pub fn read_json<T: serde::de::DeserializeOwned, P: AsRef<Path>>(
        path: P,
        context: &str,
    ) -> Result<T> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::io_with_source(
                format!("Failed to read {context} {}", path.as_ref().display()),
                e,
            )
        })?;
        Self::parse_json(&content, context)
    }

    /// Ensure the parent directory exists and write file
    pub fn ensure_dir_write<P: AsRef<Path>>(path: P, content: &[u8], context: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_with_source(format!("Failed to create directory for {context}"), e)
            })?;
        }

        std::fs::write(path.as_ref(), content)
            .map_err(|e| Error::io_with_source(format!("Failed to write {context}"), e))?;

        Ok(())
    }

    /// Ensure the parent directory exists and write pretty JSON
    pub fn ensure_dir_write_json<T: serde::Serialize, P: AsRef<Path>>(
        path: P,
        value: &T,
        context: &str,
    ) -> Result<()> {
        let content = Self::to_json_string(value, context)?;
        Self::ensure_dir_write(path, content.as_bytes(), context)
    }
}
