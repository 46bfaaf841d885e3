//! Error types for folio.
//!
//! This module defines all error types used throughout the folio crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Content Errors ===
    /// The slug is not in the configured list of known projects.
    #[error("unknown project '{slug}'")]
    UnknownProject {
        /// The requested slug.
        slug: String,
    },

    /// A project document could not be read.
    #[error("failed to read content document {path}: {source}")]
    ContentRead {
        /// Path to the document.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document does not start with a metadata block.
    #[error("no frontmatter block in {path}")]
    MissingFrontmatter {
        /// Path to the document.
        path: PathBuf,
    },

    /// The metadata block is opened but never closed.
    #[error("unterminated frontmatter block in {path}")]
    UnterminatedFrontmatter {
        /// Path to the document.
        path: PathBuf,
    },

    /// The metadata block is not valid YAML for a project.
    #[error("invalid metadata in {path}: {source}")]
    Metadata {
        /// Path to the document.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    // === Asset Errors ===
    /// Failed to list an asset directory.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        /// Directory that couldn't be listed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy an asset into the public directory.
    #[error("failed to copy {from} to {to}: {source}")]
    AssetCopy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown project error.
    #[must_use]
    pub fn unknown_project(slug: impl Into<String>) -> Self {
        Self::UnknownProject { slug: slug.into() }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the slug is not a known project.
    #[must_use]
    pub fn is_unknown_project(&self) -> bool {
        matches!(self, Self::UnknownProject { .. })
    }

    /// Check if this error came from a single project document.
    ///
    /// These are the failures the resolver turns into absence.
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::ContentRead { .. }
                | Self::MissingFrontmatter { .. }
                | Self::UnterminatedFrontmatter { .. }
                | Self::Metadata { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_project_display() {
        let err = Error::unknown_project("swerve-drive");
        assert_eq!(err.to_string(), "unknown project 'swerve-drive'");
        assert!(err.is_unknown_project());
        assert!(!err.is_content_error());
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("slug list is empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: slug list is empty"
        );
    }

    #[test]
    fn test_content_read_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::ContentRead {
            path: PathBuf::from("content/projects/comsafe.mdx"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("content/projects/comsafe.mdx"));
        assert!(msg.contains("file not found"));
        assert!(err.is_content_error());
    }

    #[test]
    fn test_missing_frontmatter_is_content_error() {
        let err = Error::MissingFrontmatter {
            path: PathBuf::from("a.mdx"),
        };
        assert!(err.is_content_error());
        assert!(err.to_string().contains("a.mdx"));
    }

    #[test]
    fn test_unterminated_frontmatter_is_content_error() {
        let err = Error::UnterminatedFrontmatter {
            path: PathBuf::from("b.mdx"),
        };
        assert!(err.is_content_error());
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_metadata_error_display() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("a: [").unwrap_err();
        let err = Error::Metadata {
            path: PathBuf::from("c.mdx"),
            source: yaml_err,
        };
        assert!(err.is_content_error());
        assert!(err.to_string().starts_with("invalid metadata in c.mdx"));
    }

    #[test]
    fn test_asset_copy_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::AssetCopy {
            from: PathBuf::from("public/projects/comsafe/cover.png"),
            to: PathBuf::from("public/comsafe-cover.png"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("public/projects/comsafe/cover.png"));
        assert!(msg.contains("public/comsafe-cover.png"));
        assert!(!err.is_content_error());
    }

    #[test]
    fn test_directory_read_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryRead {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
