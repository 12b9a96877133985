// ScanShelf - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ScanShelf";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ScanShelf";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog
// =============================================================================

/// Filename suffix that marks a file as a profile artifact.
/// Compared case-insensitively against directory entries.
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".json";

/// Number of records shown per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Minimum configurable page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum configurable page size.
pub const MAX_PAGE_SIZE: usize = 1_000;

/// Singular noun used in notices and table footers.
pub const ITEM_SINGULAR: &str = "scan";

/// Plural noun used in notices and table footers.
pub const ITEM_PLURAL: &str = "scans";

// =============================================================================
// I/O
// =============================================================================

/// Buffer size used when streaming artifact contents to count lines.
pub const LINE_COUNT_BUFFER_SIZE: usize = 64 * 1024; // 64 KB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Artifact subdirectory name under the platform data directory.
pub const PROFILES_DIR_NAME: &str = "profiles";
