//! Error types for folio library.

use std::io;
use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading content, building the site or
/// handling the contact form.
///
/// The content renderer itself never fails; unsupported nodes are skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Content or site data is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Site data parsed but violates a data rule (slug, colour, ...).
    #[error("Invalid site data: {0}")]
    InvalidData(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The contact form did not pass validation.
    #[error("Contact form is invalid: {0}")]
    Validation(String),

    /// The contact relay rejected or failed to deliver the message.
    #[error("Contact relay error: {0}")]
    Relay(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
