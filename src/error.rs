//! Error types for translation discovery and service registration.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by a translator when it rejects a resource.
///
/// The loader never inspects these; it hands them back to whoever resolved
/// the translator service.
pub type TranslatorError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem access failed for a specific path
    #[error("Could not access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recursive directory listing failed part-way
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// No service is defined under this name
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// The service exists but holds a different type than requested
    #[error("Service '{0}' does not hold the requested type")]
    ServiceTypeMismatch(String),

    /// Deferred loading was already installed for this base directory
    #[error("Deferred translation loading already registered for {0}")]
    AlreadyRegistered(String),

    /// The translator refused a resource
    #[error("Translator rejected resource: {0}")]
    Translator(#[source] TranslatorError),
}

pub type Result<T> = std::result::Result<T, Error>;
