// ScanShelf - app/delete.rs
//
// Authorized bulk removal of profile artifacts.
//
// Semantics:
//   - Authorization is checked once, before anything is touched.
//   - Targets are processed in the order given. The first target that is
//     invalid, missing, read-only, or fails to unlink stops the batch.
//   - There is no rollback: artifacts removed before the failure stay removed
//     and targets after it are left alone.
//   - Every target must be a plain artifact filename directly inside the
//     artifact directory; anything else is refused before any I/O on it.

use crate::core::model::BulkDeleteRequest;
use crate::platform::fs as pfs;
use crate::util::error::{AuthorizationError, DeletionError, Result};
use std::path::{Path, PathBuf};

/// Deletes artifacts from one directory.
#[derive(Debug, Clone)]
pub struct BulkDeleteService {
    artifact_dir: PathBuf,
    suffix: String,
}

impl BulkDeleteService {
    pub fn new(artifact_dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            suffix: suffix.into(),
        }
    }

    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }

    /// Delete every artifact named in `request`.
    ///
    /// `authorize` receives the request's token and must return true for the
    /// batch to proceed. Returns the number of artifacts removed.
    ///
    /// # Errors
    /// - `ScanShelfError::Authorization` if `authorize` rejects the token;
    ///   nothing is deleted.
    /// - `ScanShelfError::Deletion` naming the first target that could not be
    ///   removed; earlier targets of the batch are already gone.
    pub fn delete_artifacts<F>(&self, request: &BulkDeleteRequest, authorize: F) -> Result<usize>
    where
        F: FnOnce(&str) -> bool,
    {
        if !authorize(&request.authorization_token) {
            tracing::warn!(
                requested = request.targets.len(),
                "Bulk delete refused: invalid authorization token"
            );
            return Err(AuthorizationError {
                requested: request.targets.len(),
            }
            .into());
        }

        let mut deleted = 0usize;
        for target in &request.targets {
            if let Err(e) = self.delete_one(target) {
                tracing::warn!(
                    target = %target,
                    deleted_before_failure = deleted,
                    error = %e,
                    "Bulk delete aborted"
                );
                return Err(e.into());
            }
            deleted += 1;
        }

        tracing::info!(
            deleted,
            dir = %self.artifact_dir.display(),
            "Bulk delete complete"
        );
        Ok(deleted)
    }

    /// Validate and remove a single artifact.
    fn delete_one(&self, target: &str) -> std::result::Result<(), DeletionError> {
        let path = pfs::resolve_within(&self.artifact_dir, target).map_err(|reason| {
            DeletionError::InvalidTarget {
                target: target.to_string(),
                reason,
            }
        })?;

        if !pfs::has_suffix_ignore_case(target, &self.suffix) {
            return Err(DeletionError::InvalidTarget {
                target: target.to_string(),
                reason: "not a profile artifact",
            });
        }

        // symlink_metadata: a link is judged (and removed) as itself, never
        // through to whatever it points at.
        let metadata = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DeletionError::NotFound {
                    target: target.to_string(),
                    path,
                });
            }
            Err(e) => {
                return Err(DeletionError::RemovalFailed {
                    target: target.to_string(),
                    path,
                    source: e,
                });
            }
        };

        if metadata.permissions().readonly() {
            return Err(DeletionError::NotWritable {
                target: target.to_string(),
                path,
            });
        }

        std::fs::remove_file(&path).map_err(|e| DeletionError::RemovalFailed {
            target: target.to_string(),
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(file = %path.display(), "Artifact removed");
        Ok(())
    }
}

/// Authorizer that accepts exactly `expected`.
///
/// With no expected token every request is refused. Comparison time does
/// not depend on where the first mismatching byte is.
pub fn shared_token_authorizer(expected: Option<String>) -> impl Fn(&str) -> bool {
    move |presented: &str| match expected.as_deref() {
        Some(expected) if expected.len() == presented.len() => expected
            .bytes()
            .zip(presented.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0,
        _ => false,
    }
}
