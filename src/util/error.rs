// ScanShelf - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error that names a file carries that file so the caller can tell
// the user exactly which artifact was involved.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ScanShelf operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ScanShelfError {
    /// The artifact directory could not be listed.
    Repository(RepositoryError),

    /// A bulk delete was attempted with an invalid authorization token.
    Authorization(AuthorizationError),

    /// A named artifact could not be deleted.
    Deletion(DeletionError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Export of a catalog page failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ScanShelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository(e) => write!(f, "Repository error: {e}"),
            Self::Authorization(e) => write!(f, "Authorization error: {e}"),
            Self::Deletion(e) => write!(f, "Deletion error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ScanShelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Repository(e) => Some(e),
            Self::Authorization(e) => Some(e),
            Self::Deletion(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Repository errors
// ---------------------------------------------------------------------------

/// Errors that make the artifact directory unlistable.
///
/// Failures on individual files never produce one of these; such files are
/// left out of the catalog instead.
#[derive(Debug)]
pub enum RepositoryError {
    /// The artifact directory does not exist.
    DirectoryNotFound { path: PathBuf },

    /// The artifact path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied accessing the artifact directory.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// The directory listing could not be opened or read.
    Unreadable {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryNotFound { path } => {
                write!(f, "Profile directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Profile path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
            Self::Unreadable { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ScanShelfError {
    fn from(e: RepositoryError) -> Self {
        Self::Repository(e)
    }
}

// ---------------------------------------------------------------------------
// Authorization errors
// ---------------------------------------------------------------------------

/// A bulk delete request carried a token the authorizer rejected.
///
/// Deliberately carries no copy of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationError {
    /// Number of artifacts the rejected request named.
    pub requested: usize,
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid authorization token; none of the {} requested artifact(s) were deleted",
            self.requested
        )
    }
}

impl std::error::Error for AuthorizationError {}

impl From<AuthorizationError> for ScanShelfError {
    fn from(e: AuthorizationError) -> Self {
        Self::Authorization(e)
    }
}

// ---------------------------------------------------------------------------
// Deletion errors
// ---------------------------------------------------------------------------

/// Errors raised while removing one artifact of a bulk delete.
///
/// The operation stops at the first of these; artifacts removed before it
/// stay removed.
#[derive(Debug)]
pub enum DeletionError {
    /// The target is not a plain artifact filename inside the directory
    /// (path separators, `..`, absolute paths, wrong suffix).
    InvalidTarget {
        target: String,
        reason: &'static str,
    },

    /// The artifact does not exist.
    NotFound { target: String, path: PathBuf },

    /// The artifact exists but is read-only.
    NotWritable { target: String, path: PathBuf },

    /// The OS refused to remove the artifact.
    RemovalFailed {
        target: String,
        path: PathBuf,
        source: io::Error,
    },
}

impl DeletionError {
    /// The artifact name that caused the failure, as supplied by the caller.
    pub fn target(&self) -> &str {
        match self {
            Self::InvalidTarget { target, .. }
            | Self::NotFound { target, .. }
            | Self::NotWritable { target, .. }
            | Self::RemovalFailed { target, .. } => target,
        }
    }
}

impl fmt::Display for DeletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { target, reason } => {
                write!(f, "Refusing to remove '{target}': {reason}")
            }
            Self::NotFound { path, .. } => {
                write!(f, "Error removing file '{}': not found", path.display())
            }
            Self::NotWritable { path, .. } => {
                write!(f, "Error removing file '{}': not writable", path.display())
            }
            Self::RemovalFailed { path, source, .. } => {
                write!(f, "Error removing file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DeletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RemovalFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DeletionError> for ScanShelfError {
    fn from(e: DeletionError) -> Self {
        Self::Deletion(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing a catalog page out as CSV or JSON.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error flushing the output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for ScanShelfError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// `load_config` downgrades these to warnings so the tool still starts with
/// defaults; `read_config_file` returns them as-is.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ScanShelfError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ScanShelf results.
pub type Result<T> = std::result::Result<T, ScanShelfError>;
