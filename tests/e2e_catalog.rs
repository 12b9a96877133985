// ScanShelf - tests/e2e_catalog.rs
//
// End-to-end tests for the catalog pipeline.
//
// These tests exercise the real filesystem: real directory listing, real
// mtimes, real line counts, real unlinking. No mocks, no stubs.

use scanshelf::app::catalog::{Catalog, CatalogSettings, ViewRequest};
use scanshelf::app::delete::{shared_token_authorizer, BulkDeleteService};
use scanshelf::app::notify::CollectingNotifier;
use scanshelf::app::repository::list_profiles;
use scanshelf::core::model::{
    BulkDeleteRequest, PageRequest, ProfileRecord, SortDirection, SortField, SortSpec,
};
use scanshelf::core::{paginate, sort};
use scanshelf::util::error::{DeletionError, RepositoryError, ScanShelfError};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

// =============================================================================
// Helpers
// =============================================================================

/// Write an artifact with `lines` lines padded to exactly `size` bytes and
/// stamp its mtime `age_secs` seconds in the past.
fn write_artifact(dir: &Path, name: &str, lines: usize, size: usize, age_secs: u64) {
    assert!(size >= lines * 2, "size too small for {lines} lines");
    let mut content = "x\n".repeat(lines);
    // Pad the last line so the line count does not change.
    let pad = size - content.len();
    if pad > 0 {
        content.truncate(content.len() - 1);
        content.push_str(&"x".repeat(pad));
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, &content).unwrap();

    let mtime = SystemTime::now() - Duration::from_secs(age_secs);
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

fn display_names(records: &[ProfileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.display_name()).collect()
}

/// alpha: 10 lines, 100 bytes, older. beta: 5 lines, 900 bytes, newer.
fn alpha_beta_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "alpha.profile", 10, 100, 7_200);
    write_artifact(dir.path(), "beta.profile", 5, 900, 60);
    fs::write(dir.path().join("notes.txt"), "not a profile\n").unwrap();
    dir
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn e2e_scan_reads_metadata() {
    let dir = alpha_beta_dir();
    let records = list_profiles(dir.path(), ".profile").unwrap();

    assert_eq!(display_names(&records), vec!["alpha", "beta"]);
    let alpha = &records[0];
    assert_eq!(alpha.filename(), "alpha.profile");
    assert_eq!(alpha.request_count(), 10);
    assert_eq!(alpha.byte_size(), 100);
    assert!(alpha.captured_at() < records[1].captured_at());
}

#[test]
fn e2e_unrecognised_files_never_listed() {
    let dir = alpha_beta_dir();
    let records = list_profiles(dir.path(), ".profile").unwrap();
    assert!(records.iter().all(|r| r.filename() != "notes.txt"));
}

#[test]
fn e2e_sorts_on_raw_keys() {
    let dir = alpha_beta_dir();
    let records = list_profiles(dir.path(), ".profile").unwrap();

    let by_count = sort::sort_records(records.clone(), SortField::Count, SortDirection::Ascending);
    assert_eq!(display_names(&by_count), vec!["beta", "alpha"]);

    let by_date = sort::sort_records(records.clone(), SortField::Date, SortDirection::Descending);
    assert_eq!(display_names(&by_date), vec!["beta", "alpha"]);

    let by_size = sort::sort_records(records, SortField::Filesize, SortDirection::Ascending);
    assert_eq!(display_names(&by_size), vec!["alpha", "beta"]);
}

#[test]
fn e2e_first_page_extremes_per_direction() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..7usize {
        write_artifact(
            dir.path(),
            &format!("run-{i}.json"),
            i + 1,
            64 + i * 10,
            1_000 - i as u64 * 100,
        );
    }
    let records = list_profiles(dir.path(), ".json").unwrap();

    for &field in SortField::all() {
        let asc = sort::sort_records(records.clone(), field, SortDirection::Ascending);
        let desc = sort::sort_records(records.clone(), field, SortDirection::Descending);
        let asc_page = paginate::paginate(asc.clone(), PageRequest::new(1, 3));
        let desc_page = paginate::paginate(desc, PageRequest::new(1, 3));

        assert_eq!(asc_page.items.first(), asc.first(), "field {field}");
        assert_eq!(desc_page.items.first(), asc.last(), "field {field}");
        assert_eq!(asc_page.total_pages, 3);
    }
}

#[test]
fn e2e_catalog_view_second_page() {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=25 {
        fs::write(dir.path().join(format!("scan-{i:02}.json")), "{}\n").unwrap();
    }
    let catalog = Catalog::new(CatalogSettings::new(dir.path()), CollectingNotifier::new());

    let page = catalog
        .view(ViewRequest::from_query(Some("name"), Some("asc"), Some("2")))
        .unwrap();
    assert_eq!(page.total_items, 25);
    assert_eq!(page.total_pages, 2);
    assert_eq!(
        display_names(&page.items),
        vec!["scan-21", "scan-22", "scan-23", "scan-24", "scan-25"]
    );
}

#[test]
fn e2e_empty_directory_has_one_empty_page() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new(CatalogSettings::new(dir.path()), CollectingNotifier::new());
    let page = catalog.view(ViewRequest::default()).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn e2e_missing_directory_is_repository_error() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("never-created");
    let catalog = Catalog::new(CatalogSettings::new(&gone), CollectingNotifier::new());
    let result = catalog.view(ViewRequest {
        sort: SortSpec::new(SortField::Date, SortDirection::Descending),
        page_number: 1,
    });
    assert!(
        matches!(result, Err(RepositoryError::DirectoryNotFound { .. })),
        "expected DirectoryNotFound, got {result:?}"
    );
}

// =============================================================================
// Bulk delete
// =============================================================================

#[test]
fn e2e_bulk_delete_fail_fast_non_atomic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("A.json"), "{}\n").unwrap();
    fs::write(dir.path().join("C.json"), "{}\n").unwrap();

    let service = BulkDeleteService::new(dir.path(), ".json");
    let request = BulkDeleteRequest::new(["A.json", "B.json", "C.json"], "secret");
    let authorize = shared_token_authorizer(Some("secret".to_string()));

    let err = service.delete_artifacts(&request, authorize).unwrap_err();
    match &err {
        ScanShelfError::Deletion(e) => assert_eq!(e.target(), "B.json"),
        other => panic!("expected DeletionError for B.json, got {other:?}"),
    }
    assert!(matches!(
        err,
        ScanShelfError::Deletion(DeletionError::NotFound { .. })
    ));
    assert!(!dir.path().join("A.json").exists(), "A stays deleted");
    assert!(dir.path().join("C.json").exists(), "C is never reached");
}

#[test]
fn e2e_bulk_delete_requires_token() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("A.json"), "{}\n").unwrap();
    let notifier = CollectingNotifier::new();
    let catalog = Catalog::new(CatalogSettings::new(dir.path()), &notifier);

    let request = BulkDeleteRequest::new(["A.json"], "guess");
    let result = catalog.bulk_delete(&request, shared_token_authorizer(Some("secret".into())));
    assert!(matches!(result, Err(ScanShelfError::Authorization(_))));
    assert!(dir.path().join("A.json").exists());
    assert!(notifier.notices().is_empty());

    // No configured token: bulk delete is disabled outright.
    let request = BulkDeleteRequest::new(["A.json"], "");
    let result = catalog.bulk_delete(&request, shared_token_authorizer(None));
    assert!(matches!(result, Err(ScanShelfError::Authorization(_))));
    assert!(dir.path().join("A.json").exists());
}

#[test]
fn e2e_delete_then_list_reflects_disk() {
    let dir = alpha_beta_dir();
    let notifier = CollectingNotifier::new();
    let mut settings = CatalogSettings::new(dir.path());
    settings.artifact_suffix = ".profile".to_string();
    let catalog = Catalog::new(settings, &notifier);

    let request = BulkDeleteRequest::new(["alpha.profile"], "secret");
    let deleted = catalog
        .bulk_delete(&request, shared_token_authorizer(Some("secret".into())))
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(notifier.notices(), vec!["Deleted 1 scan."]);

    let page = catalog.view(ViewRequest::default()).unwrap();
    assert_eq!(display_names(&page.items), vec!["beta"]);
    assert!(dir.path().join("notes.txt").exists());
}
