//! Error types for skin loading, saving and batch setup

use std::fmt;
use std::path::PathBuf;

/// Main error type for all skin operations
#[derive(Debug)]
pub enum SkinError {
    /// Failed to read or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write the merged image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A command-line target cannot be processed
    InvalidTarget {
        /// The offending target
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// The batch contains no input files
    NoFilesSelected,

    /// An output directory was requested but none was given
    NoOutputDirectory,
}

impl fmt::Display for SkinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::NoFilesSelected => write!(f, "No files selected"),
            Self::NoOutputDirectory => write!(f, "No output folder chosen"),
        }
    }
}

impl std::error::Error for SkinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl SkinError {
    /// Whether this error stems from user input rather than from processing
    pub const fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidTarget { .. } | Self::NoFilesSelected | Self::NoOutputDirectory
        )
    }
}

/// Convenience type alias for skin results
pub type Result<T> = std::result::Result<T, SkinError>;

impl From<image::ImageError> for SkinError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SkinError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid target error
pub fn invalid_target(path: impl Into<PathBuf>, reason: &impl ToString) -> SkinError {
    SkinError::InvalidTarget {
        path: path.into(),
        reason: reason.to_string(),
    }
}
