// ScanShelf - app/repository.rs
//
// Builds the catalog: lists the artifact directory, keeps files carrying the
// artifact suffix, and turns each into a `ProfileRecord` (mtime, size, line
// count, display name).
//
// Error policy:
//   - The directory itself being missing or unreadable is fatal
//     (`RepositoryError`); there is no partial catalog.
//   - Per-file metadata or read failures are non-fatal: the file is left out
//     and the reason logged at debug level.
//   - The listing is non-recursive and visits entries in filename order, so
//     the enumeration order (the sort tie-break) is deterministic.

use crate::core::model::ProfileRecord;
use crate::platform::fs as pfs;
use crate::util::error::RepositoryError;
use chrono::{DateTime, Utc};
use std::path::Path;

/// List every profile artifact in `dir` whose name ends with `suffix`
/// (ASCII case-insensitive).
///
/// Non-matching entries, subdirectories, and non-UTF-8 names are skipped
/// silently. Returns records in filename order.
pub fn list_profiles(dir: &Path, suffix: &str) -> Result<Vec<ProfileRecord>, RepositoryError> {
    // Use fs::metadata rather than Path::is_dir so that PermissionDenied is
    // distinguishable from a path that does not exist.
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(RepositoryError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(match e.kind() {
                std::io::ErrorKind::PermissionDenied => RepositoryError::PermissionDenied {
                    path: dir.to_path_buf(),
                    source: e,
                },
                _ => RepositoryError::DirectoryNotFound {
                    path: dir.to_path_buf(),
                },
            });
        }
    }

    tracing::debug!(dir = %dir.display(), suffix, "Profile scan starting");

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            // Depth 0 is the artifact directory itself: its listing could not
            // be opened, so there is nothing to return.
            Err(e) if e.depth() == 0 => {
                return Err(RepositoryError::Unreadable {
                    path: dir.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "Skipping inaccessible entry");
                skipped += 1;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::trace!(path = %entry.path().display(), "Skipping non-UTF-8 filename");
            continue;
        };

        let Some(display_name) = pfs::strip_suffix_ignore_case(file_name, suffix) else {
            tracing::trace!(file = file_name, "Not a profile artifact");
            continue;
        };

        match read_record(entry.path(), file_name, display_name) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(
                    file = %entry.path().display(),
                    error = %e,
                    "Skipping unreadable profile"
                );
                skipped += 1;
            }
        }
    }

    tracing::debug!(
        dir = %dir.display(),
        profiles = records.len(),
        skipped,
        "Profile scan complete"
    );

    Ok(records)
}

/// Read one artifact's metadata and line count.
///
/// Returns `Ok(None)` for entries that are not regular files once symlinks
/// are resolved (e.g. a link to a directory).
fn read_record(
    path: &Path,
    file_name: &str,
    display_name: &str,
) -> std::io::Result<Option<ProfileRecord>> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Ok(None);
    }

    let captured_at: DateTime<Utc> = metadata.modified()?.into();
    let request_count = pfs::count_lines(path)?;

    Ok(Some(ProfileRecord::new(
        file_name,
        display_name,
        captured_at,
        request_count,
        metadata.len(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_profile_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("alpha.json"), "{}\n{}\n{}\n").expect("write alpha");
        fs::write(root.join("Beta.JSON"), "{}\n").expect("write beta");
        fs::write(root.join("notes.txt"), "not a profile\n").expect("write notes");
        fs::write(root.join("old.json.bak"), "{}\n").expect("write bak");

        let sub = root.join("nested");
        fs::create_dir(&sub).expect("mkdir nested");
        fs::write(sub.join("deep.json"), "{}\n").expect("write deep");

        dir
    }

    fn names(records: &[ProfileRecord]) -> Vec<&str> {
        records.iter().map(|r| r.filename()).collect()
    }

    #[test]
    fn test_lists_only_suffix_matches() {
        let dir = make_profile_dir();
        let records = list_profiles(dir.path(), ".json").unwrap();
        assert_eq!(names(&records), vec!["Beta.JSON", "alpha.json"]);
    }

    #[test]
    fn test_non_recursive() {
        let dir = make_profile_dir();
        let records = list_profiles(dir.path(), ".json").unwrap();
        assert!(
            !names(&records).contains(&"deep.json"),
            "nested artifacts must not be listed"
        );
    }

    #[test]
    fn test_record_metadata() {
        let dir = make_profile_dir();
        let records = list_profiles(dir.path(), ".json").unwrap();
        let alpha = records.iter().find(|r| r.filename() == "alpha.json").unwrap();
        assert_eq!(alpha.display_name(), "alpha");
        assert_eq!(alpha.request_count(), 3);
        assert_eq!(alpha.byte_size(), 9);

        let beta = records.iter().find(|r| r.filename() == "Beta.JSON").unwrap();
        assert_eq!(beta.display_name(), "Beta");
        assert_eq!(beta.request_count(), 1);
    }

    #[test]
    fn test_custom_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("run.profile"), "a\nb").unwrap();
        fs::write(dir.path().join("run.json"), "a\n").unwrap();
        let records = list_profiles(dir.path(), ".profile").unwrap();
        assert_eq!(names(&records), vec!["run.profile"]);
        assert_eq!(records[0].request_count(), 2);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_profiles(dir.path(), ".json").unwrap().is_empty());
    }

    #[test]
    fn test_directory_not_found() {
        let result = list_profiles(Path::new("/nonexistent/scanshelf/profiles"), ".json");
        assert!(matches!(
            result,
            Err(RepositoryError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("alpha.json");
        fs::write(&file, "{}").unwrap();
        let result = list_profiles(&file, ".json");
        assert!(matches!(result, Err(RepositoryError::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), "{}\n").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("missing-target.json"),
            dir.path().join("broken.json"),
        )
        .unwrap();
        let records = list_profiles(dir.path(), ".json").unwrap();
        assert_eq!(names(&records), vec!["good.json"]);
    }
}
