use std::fmt;
use thiserror::Error;

/// Error type for TIM, PXL and CLT conversion
///
/// Format errors are raised by the pure conversion functions; the I/O and
/// limit errors only come from the file layer in [`crate::files`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimError {
    // ========== FORMAT ERRORS (2000-2099) ==========
    /// Tag byte does not identify the expected format
    #[error("Invalid {kind} file ID: expected 0x{expected:02X}, found 0x{actual:02X}")]
    InvalidTag {
        kind: &'static str,
        expected: u8,
        actual: u8,
    },

    /// Buffer is too short to hold the 8 byte header
    #[error("Malformed header: need 8 bytes, buffer holds {size}")]
    MalformedHeader { size: usize },

    /// Declared CLUT block runs past the end of the buffer
    #[error("Truncated buffer at offset {offset}: needed {needed} bytes, only {available} available")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// CLUT length field is smaller than the field itself
    #[error("Invalid CLUT length {length}: the block must be at least 4 bytes")]
    InvalidClutLength { length: u32 },

    // ========== I/O ERRORS (1000-1099) ==========
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: String },

    #[error("Failed to read file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    FileWriteError { path: String, reason: String },

    // ========== LIMIT ERRORS (6000-6099) ==========
    #[error("File {path} is too large: {size} bytes (limit: {limit})")]
    FileTooLarge {
        path: String,
        size: usize,
        limit: usize,
    },
}

impl TimError {
    /// Get the error code for machine-readable processing
    pub fn code(&self) -> u16 {
        match self {
            // I/O Errors (1000-1099)
            Self::FileNotFound { .. } => 1001,
            Self::FileReadError { .. } => 1002,
            Self::PermissionDenied { .. } => 1003,
            Self::FileWriteError { .. } => 1004,

            // Format Errors (2000-2099)
            Self::InvalidTag { .. } => 2001,
            Self::MalformedHeader { .. } => 2002,
            Self::TruncatedBuffer { .. } => 2003,
            Self::InvalidClutLength { .. } => 2004,

            // Limit Errors (6000-6099)
            Self::FileTooLarge { .. } => 6001,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            1000..=1099 => ErrorCategory::IO,
            2000..=2099 => ErrorCategory::Format,
            _ => ErrorCategory::Limits,
        }
    }

    /// Get suggested action for handling this error
    pub fn suggested_action(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "Check file path and ensure file exists",
            Self::PermissionDenied { .. } => "Check file permissions and user access rights",
            Self::InvalidTag { .. } => "Verify the input files were passed in the right order",
            Self::MalformedHeader { .. } | Self::TruncatedBuffer { .. } => {
                "File appears to be corrupted or truncated"
            },
            Self::FileTooLarge { .. } => "Raise the size limit with --max-file-size",
            _ => "Check file integrity",
        }
    }

    /// Attach a file path to I/O errors produced without one
    pub(crate) fn with_path(self, path: &str) -> Self {
        match self {
            Self::FileNotFound { .. } => Self::FileNotFound {
                path: path.to_string(),
            },
            Self::PermissionDenied { .. } => Self::PermissionDenied {
                path: path.to_string(),
            },
            Self::FileReadError { reason, .. } => Self::FileReadError {
                path: path.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Error categories for grouping related error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    IO,
    Format,
    Limits,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO => write!(f, "I/O"),
            Self::Format => write!(f, "Format"),
            Self::Limits => write!(f, "Limits"),
        }
    }
}

/// Result type alias for conversion operations
pub type TimResult<T> = Result<T, TimError>;

impl From<std::io::Error> for TimError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => TimError::FileNotFound {
                path: "unknown".to_string(),
            },
            std::io::ErrorKind::PermissionDenied => TimError::PermissionDenied {
                path: "unknown".to_string(),
            },
            _ => TimError::FileReadError {
                path: "unknown".to_string(),
                reason: err.to_string(),
            },
        }
    }
}
