use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::status::Status;

pub const DEFAULT_MARKER: &str = ".git";
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// Decides whether a directory is the root of a repository by probing for
/// its metadata entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoDetector {
    marker: String,
}

impl Default for RepoDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoDetector {
    /// A detector probing for the standard `.git` entry.
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }

    /// A detector probing for a custom entry name. Test fixtures use this
    /// to avoid colliding with real Git metadata.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Whether `path` holds the metadata entry as an immediate subdirectory.
    /// A missing entry is not an error; any other probe failure is.
    pub fn is_repository(&self, path: &Path) -> Result<bool> {
        let marker_path = path.join(&self.marker);
        match fs::metadata(&marker_path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err).with_context(|| {
                format!(
                    "Failed to determine if {} contains a Git repository",
                    path.display()
                )
            }),
        }
    }
}

/// Every directory classified during one traversal of one search root.
/// The two sets are disjoint; repositories are never descended into.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResult {
    pub repositories: Vec<PathBuf>,
    pub non_repositories: Vec<PathBuf>,
}

/// Bounded-depth recursive walker. Directories the detector rejects are
/// kept as fallback candidates, but a candidate only makes it into the
/// result when its enclosing scan level saw at least one repository in its
/// subtree. Repository-free branches disappear entirely.
pub struct RepoScanner<'a> {
    detector: RepoDetector,
    status: &'a Status,
}

impl<'a> RepoScanner<'a> {
    pub fn new(detector: RepoDetector, status: &'a Status) -> Self {
        Self { detector, status }
    }

    /// Walks `root` at most `max_depth` levels deep. Listing failures are
    /// reported through [`Status`] and the scan carries on with whatever
    /// remains reachable.
    pub fn scan(&self, root: &Path, max_depth: u32) -> ScanResult {
        let mut result = ScanResult::default();
        self.scan_dir(root, max_depth, &mut result);
        result
    }

    /// Returns whether the subtree under `dir` contained a repository, so
    /// the caller can decide whether to keep its own buffered candidates.
    fn scan_dir(&self, dir: &Path, remaining_depth: u32, result: &mut ScanResult) -> bool {
        if remaining_depth == 0 {
            return false;
        }
        debug!("Scanning {}", dir.display());

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                self.status.report(
                    anyhow::Error::new(err)
                        .context(format!("Failed to read directory {}", dir.display())),
                );
                return false;
            }
        };

        let mut some_repo_found = false;
        let mut candidates: Vec<PathBuf> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.status.report(
                        anyhow::Error::new(err)
                            .context(format!("Failed to read directory entry in {}", dir.display())),
                    );
                    continue;
                }
            };

            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(err) => {
                    self.status.report(anyhow::Error::new(err).context(format!(
                        "Failed to read directory entry {}",
                        entry.path().display()
                    )));
                    continue;
                }
            };
            if !is_dir {
                continue;
            }

            let path = entry.path();
            match self.detector.is_repository(&path) {
                Ok(true) => {
                    some_repo_found = true;
                    result.repositories.push(path);
                }
                Ok(false) => {
                    candidates.push(path.clone());
                    if self.scan_dir(&path, remaining_depth - 1, result) {
                        some_repo_found = true;
                    }
                }
                Err(err) => {
                    // Probe failed; treat the directory as an ordinary one
                    self.status.report(err);
                    candidates.push(path.clone());
                    if self.scan_dir(&path, remaining_depth - 1, result) {
                        some_repo_found = true;
                    }
                }
            }
        }

        if some_repo_found {
            result.non_repositories.append(&mut candidates);
        }
        some_repo_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detector_missing_marker_is_not_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let detector = RepoDetector::new();
        assert!(!detector.is_repository(temp_dir.path())?);
        Ok(())
    }

    #[test]
    fn test_detector_finds_marker_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join(".git"))?;
        let detector = RepoDetector::new();
        assert!(detector.is_repository(temp_dir.path())?);
        Ok(())
    }

    #[test]
    fn test_detector_marker_file_is_not_a_repository() -> Result<()> {
        // Worktrees keep a `.git` file instead of a directory; those roots
        // are not treated as repositories here
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join(".git"), "gitdir: /some/path")?;
        let detector = RepoDetector::new();
        assert!(!detector.is_repository(temp_dir.path())?);
        Ok(())
    }

    #[test]
    fn test_detector_custom_marker() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join("git-data"))?;

        let detector = RepoDetector::with_marker("git-data");
        assert!(detector.is_repository(temp_dir.path())?);
        assert!(!RepoDetector::new().is_repository(temp_dir.path())?);
        Ok(())
    }

    #[test]
    fn test_scan_classifies_repos_and_candidates() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("repo/.git"))?;
        fs::create_dir_all(base.join("nonrepo"))?;

        let status = Status::new();
        let scanner = RepoScanner::new(RepoDetector::new(), &status);
        let result = scanner.scan(base, DEFAULT_MAX_DEPTH);

        assert_eq!(result.repositories, vec![base.join("repo")]);
        assert_eq!(result.non_repositories, vec![base.join("nonrepo")]);
        assert!(!status.error_occurred());
        Ok(())
    }

    #[test]
    fn test_scan_depth_zero_examines_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("repo/.git"))?;

        let status = Status::new();
        let scanner = RepoScanner::new(RepoDetector::new(), &status);
        let result = scanner.scan(temp_dir.path(), 0);

        assert!(result.repositories.is_empty());
        assert!(result.non_repositories.is_empty());
        Ok(())
    }

    #[test]
    fn test_scan_does_not_descend_into_repositories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("outer/.git"))?;
        fs::create_dir_all(base.join("outer/inner/.git"))?;

        let status = Status::new();
        let scanner = RepoScanner::new(RepoDetector::new(), &status);
        let result = scanner.scan(base, DEFAULT_MAX_DEPTH);

        assert_eq!(result.repositories, vec![base.join("outer")]);
        assert!(result.non_repositories.is_empty());
        Ok(())
    }

    #[test]
    fn test_scan_prunes_repository_free_branches() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("a/b/c"))?;

        let status = Status::new();
        let scanner = RepoScanner::new(RepoDetector::new(), &status);
        let result = scanner.scan(temp_dir.path(), DEFAULT_MAX_DEPTH);

        assert!(result.repositories.is_empty());
        assert!(result.non_repositories.is_empty());
        Ok(())
    }
}
