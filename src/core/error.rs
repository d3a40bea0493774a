//! # Error Handling for Docsmith
//!
//! This module defines the error type shared by parameter loading, site
//! configuration building and output emission. The `thiserror` crate is
//! used to keep the variants and their messages in one place.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the Docsmith library.
///
/// This type alias simplifies function signatures by defining a result type that always uses `DocsmithError` as the error variant.
pub type Result<T> = std::result::Result<T, DocsmithError>;

/// The main error type for Docsmith, encompassing all potential error cases.
#[derive(Error, Debug)]
pub enum DocsmithError {
    /// A required site parameter was empty or never supplied.
    #[error("Missing required site parameter `{field}`.")]
    MissingField {
        /// Name of the parameter as it appears in a params file.
        field: &'static str,
    },

    /// The site URL cannot be used to derive asset and logo URLs.
    #[error("Invalid site url `{url}`: {reason}.")]
    InvalidUrl {
        /// The rejected URL, verbatim.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Error related to loading or overriding site parameters.
    ///
    /// This error occurs when a params file cannot be read or parsed, or
    /// when an override names an unknown key or carries a bad value.
    #[error("Configuration error: {message}.")]
    ConfigError {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the params file that caused the error.
        path: Option<PathBuf>,
    },

    /// The built configuration could not be rendered to its output format.
    #[error("Serialization error: {message}.")]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
        /// The underlying serializer error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error encountered during file operations.
    #[error("File IO error at `{path:?}`: {source}")]
    IOError {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for DocsmithError {
    /// Converts a standard IO error into a `DocsmithError::IOError` with an empty path.
    fn from(source: std::io::Error) -> Self {
        DocsmithError::IOError {
            path: PathBuf::new(),
            source,
        }
    }
}

impl From<serde_json::Error> for DocsmithError {
    fn from(source: serde_json::Error) -> Self {
        DocsmithError::SerializationError {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

impl DocsmithError {
    /// Creates a `ConfigError` with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the params file causing the error.
    pub fn config_error<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        DocsmithError::ConfigError {
            message: message.into(),
            path,
        }
    }

    /// Creates an `InvalidUrl` error for `url`.
    pub fn invalid_url<U, R>(url: U, reason: R) -> Self
    where
        U: Into<String>,
        R: Into<String>,
    {
        DocsmithError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an IO error as an `IOError` variant with the specified path.
    ///
    /// # Parameters
    /// - `path`: The file path associated with the IO error.
    /// - `source`: The original IO error.
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        DocsmithError::IOError { path, source }
    }
}
