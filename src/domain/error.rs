use thiserror::Error;

use crate::domain::table::ImportFormat;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unknown import format: {0}")]
    UnknownFormat(String),

    #[error("Import format not supported on this host: {0}")]
    UnsupportedFormat(ImportFormat),

    #[error("The imported {format} file contains errors: {message}")]
    DecodeSyntax {
        format: ImportFormat,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    pub fn decode(format: ImportFormat, message: impl Into<String>) -> Self {
        ImportError::DecodeSyntax {
            format,
            message: message.into(),
        }
    }

    /// Diagnostic text carried by a decode failure, for display to the user.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ImportError::DecodeSyntax { message, .. } => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
