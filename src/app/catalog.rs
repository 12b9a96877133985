// ScanShelf - app/catalog.rs
//
// The catalog service used by hosts (admin UI, CLI): composes
// scan -> sort -> paginate for listings, and wraps bulk delete with the
// user-facing notice.
//
// No state is kept between calls; every listing rescans the directory so
// the view always matches what is on disk.

use crate::app::delete::BulkDeleteService;
use crate::app::notify::{self, Notifier};
use crate::app::repository;
use crate::core::model::{BulkDeleteRequest, Page, PageRequest, ProfileRecord, SortSpec};
use crate::core::{paginate, sort};
use crate::platform::config::AppConfig;
use crate::util::constants;
use crate::util::error::{RepositoryError, Result};
use std::path::{Path, PathBuf};

/// Where the artifacts live and how they are recognised and paged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Directory holding the profile artifacts.
    pub profiles_dir: PathBuf,

    /// Filename suffix marking an artifact (matched case-insensitively).
    pub artifact_suffix: String,

    /// Records per page.
    pub page_size: usize,
}

impl CatalogSettings {
    pub fn new(profiles_dir: impl Into<PathBuf>) -> Self {
        Self {
            profiles_dir: profiles_dir.into(),
            artifact_suffix: constants::DEFAULT_ARTIFACT_SUFFIX.to_string(),
            page_size: constants::DEFAULT_PAGE_SIZE,
        }
    }

    /// Settings from a validated config; `default_dir` is used when no
    /// artifact directory was configured.
    pub fn from_config(config: &AppConfig, default_dir: &Path) -> Self {
        Self {
            profiles_dir: config
                .profiles_dir
                .clone()
                .unwrap_or_else(|| default_dir.to_path_buf()),
            artifact_suffix: config.artifact_suffix.clone(),
            page_size: config.page_size,
        }
    }
}

/// A listing request: ordering plus 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRequest {
    pub sort: SortSpec,
    pub page_number: usize,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            page_number: 1,
        }
    }
}

impl ViewRequest {
    /// Build a view request from raw `orderby`, `order` and `paged` values.
    ///
    /// Anything missing or unparseable falls back to the default: name,
    /// ascending, page 1.
    pub fn from_query(orderby: Option<&str>, order: Option<&str>, paged: Option<&str>) -> Self {
        let page_number = paged
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        Self {
            sort: SortSpec::from_request(orderby, order),
            page_number,
        }
    }
}

/// Catalog of profile artifacts in one directory.
pub struct Catalog<N: Notifier> {
    settings: CatalogSettings,
    notifier: N,
}

impl<N: Notifier> Catalog<N> {
    pub fn new(settings: CatalogSettings, notifier: N) -> Self {
        Self { settings, notifier }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Every artifact currently in the directory, in enumeration order.
    pub fn records(&self) -> std::result::Result<Vec<ProfileRecord>, RepositoryError> {
        repository::list_profiles(&self.settings.profiles_dir, &self.settings.artifact_suffix)
    }

    /// Scan, sort and paginate.
    pub fn view(&self, request: ViewRequest) -> std::result::Result<Page, RepositoryError> {
        let records = self.records()?;
        let ordered = sort::sort_by_spec(records, request.sort);
        let page = paginate::paginate(
            ordered,
            PageRequest::new(request.page_number, self.settings.page_size),
        );

        tracing::debug!(
            sort = %request.sort.field,
            order = %request.sort.direction,
            page = page.page_number,
            total_pages = page.total_pages,
            total_items = page.total_items,
            "Catalog view built"
        );
        Ok(page)
    }

    fn delete_service(&self) -> BulkDeleteService {
        BulkDeleteService::new(
            self.settings.profiles_dir.clone(),
            self.settings.artifact_suffix.clone(),
        )
    }

    /// Run a bulk delete and, on success, emit the "Deleted N scan(s)." notice.
    ///
    /// Errors are returned untouched; no notice is emitted for a failed batch
    /// even though some of its artifacts may already be gone.
    pub fn bulk_delete<F>(&self, request: &BulkDeleteRequest, authorize: F) -> Result<usize>
    where
        F: FnOnce(&str) -> bool,
    {
        let deleted = self.delete_service().delete_artifacts(request, authorize)?;
        self.notifier.notice(&notify::deleted_notice(deleted));
        Ok(deleted)
    }

    /// The per-row "delete" action: a bulk delete of exactly one artifact.
    pub fn delete_one<F>(&self, filename: &str, token: &str, authorize: F) -> Result<usize>
    where
        F: FnOnce(&str) -> bool,
    {
        self.bulk_delete(&BulkDeleteRequest::new([filename], token), authorize)
    }
}
