// ScanShelf - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Profile record
// =============================================================================

/// One profile artifact in the catalog.
///
/// Carries only raw values; display strings are derived on demand by
/// `core::format` so ordering never touches decorated text. Fields are
/// private: a record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    filename: String,
    display_name: String,
    captured_at: DateTime<Utc>,
    request_count: u64,
    byte_size: u64,
}

impl ProfileRecord {
    pub fn new(
        filename: impl Into<String>,
        display_name: impl Into<String>,
        captured_at: DateTime<Utc>,
        request_count: u64,
        byte_size: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            display_name: display_name.into(),
            captured_at,
            request_count,
            byte_size,
        }
    }

    /// Storage name of the artifact, without any directory component.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Filename with the artifact suffix removed.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Last-modified time of the artifact.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Number of recorded events (lines) in the artifact.
    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    /// Artifact size in bytes.
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Catalog field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Date,
    Count,
    Filesize,
}

impl SortField {
    /// Returns all variants in column order.
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Name,
            SortField::Date,
            SortField::Count,
            SortField::Filesize,
        ]
    }

    /// Identifier used in requests and column ids.
    pub fn id(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Date => "date",
            SortField::Count => "count",
            SortField::Filesize => "filesize",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::all()
            .iter()
            .copied()
            .find(|field| field.id() == s)
            .ok_or_else(|| format!("unknown sort field '{s}'"))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Short form used in requests ("asc" / "desc").
    pub fn id(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Field and direction of a catalog ordering. Defaults to name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Build a sort spec from raw `orderby` / `order` request values.
    ///
    /// Missing, empty, or unrecognised values fall back to the default for
    /// that half of the spec; a bad request never fails the listing.
    pub fn from_request(orderby: Option<&str>, order: Option<&str>) -> Self {
        let field = orderby
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let direction = order
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        Self { field, direction }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// A 1-based page number and page size. Both are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    /// Zero values are clamped to 1.
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, crate::util::constants::DEFAULT_PAGE_SIZE)
    }
}

/// One page of an ordered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Records on this page, in catalog order.
    pub items: Vec<ProfileRecord>,

    /// Number of records in the whole catalog.
    pub total_items: usize,

    /// Number of pages the catalog spans; at least 1.
    pub total_pages: usize,

    /// 1-based page number this page was cut for.
    pub page_number: usize,

    /// Page size this page was cut for.
    pub page_size: usize,
}

// =============================================================================
// Bulk delete
// =============================================================================

/// A request to delete several artifacts at once.
///
/// Targets are processed in the order given.
#[derive(Clone)]
pub struct BulkDeleteRequest {
    pub targets: Vec<String>,
    pub authorization_token: String,
}

impl BulkDeleteRequest {
    pub fn new<I, S>(targets: I, authorization_token: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            authorization_token: authorization_token.into(),
        }
    }
}

// Hand-written so the token never ends up in debug logs.
impl fmt::Debug for BulkDeleteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkDeleteRequest")
            .field("targets", &self.targets)
            .field("authorization_token", &"<redacted>")
            .finish()
    }
}
