//! Error handling for zoomr-report
//!
//! Decode-layer errors are deterministic: the binary layout never changes
//! between attempts, so nothing here is retryable.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for zoomr-report operations
pub type Result<T> = std::result::Result<T, ZoomrError>;

/// Main error type for zoomr-report operations
#[derive(Error, Debug)]
pub enum ZoomrError {
    // Decode Errors
    #[error("Format error: {reason}")]
    Format { reason: String },

    // Directory Errors
    #[error("{message}")]
    InvalidProjectDirectory { path: PathBuf, message: String },

    #[error("{path} does not exist (ignored)")]
    MissingOptionalInput { path: PathBuf },

    #[error("Invalid extra info file: {path}: {source}")]
    InvalidExtraInfo {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Report Errors
    #[error("Template error: {reason}")]
    Template { reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZoomrError {
    /// Shorthand for a [`ZoomrError::Format`] with the given reason.
    pub fn format(reason: impl Into<String>) -> Self {
        ZoomrError::Format {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`ZoomrError::InvalidProjectDirectory`].
    pub fn invalid_directory(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ZoomrError::InvalidProjectDirectory {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ZoomrError::Format { .. } => "FORMAT_ERROR",
            ZoomrError::InvalidProjectDirectory { .. } => "INVALID_PROJECT_DIRECTORY",
            ZoomrError::MissingOptionalInput { .. } => "MISSING_OPTIONAL_INPUT",
            ZoomrError::InvalidExtraInfo { .. } => "INVALID_EXTRA_INFO",
            ZoomrError::FileReadError { .. } => "FILE_READ_ERROR",
            ZoomrError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            ZoomrError::Template { .. } => "TEMPLATE_ERROR",
            ZoomrError::Json(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns true if this error indicates the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ZoomrError::FileWriteError { .. })
    }

    /// Returns true if processing may continue with defaults.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, ZoomrError::MissingOptionalInput { .. })
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            ZoomrError::Format { .. } => {
                Some("Check that the selected --revision matches the recorder firmware.")
            }
            ZoomrError::InvalidProjectDirectory { .. } => Some(
                "Point at a PROJnnn directory containing PRJDATA.ZDT, EFXDATA.ZDT and AUDIO/.",
            ),
            ZoomrError::InvalidExtraInfo { .. } => {
                Some("Fix the JSON syntax or remove the extra info file.")
            }
            ZoomrError::Template { .. } => {
                Some("Check the placeholder names against the generated JSON.")
            }
            _ => None,
        }
    }
}
