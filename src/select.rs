use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::paths;
use crate::scan::RepoScanner;
use crate::ui::Picker;

/// Offered after the repositories whenever fallback locations exist.
pub const FALLBACK_OPTION: &str = "<locations, that do not contain Git repository>";

/// Two sequential decisions: narrow the search roots down to one, then
/// resolve a target directory from what the scan classified beneath it.
/// The human-facing choice itself is delegated to the injected [`Picker`].
pub struct Selector<'a> {
    scanner: RepoScanner<'a>,
    picker: &'a dyn Picker,
}

impl<'a> Selector<'a> {
    pub fn new(scanner: RepoScanner<'a>, picker: &'a dyn Picker) -> Self {
        Self { scanner, picker }
    }

    /// Picks the search root. A single candidate (after deduplication) is
    /// taken without prompting; no candidates at all is fatal. The chosen
    /// root comes back absolute and clean.
    pub fn select_base_dir(&self, candidates: &[String]) -> Result<PathBuf> {
        let candidates = paths::sorted_unique(candidates.iter().cloned());
        if candidates.is_empty() {
            return Err(Error::NoSearchRoots);
        }

        let mut base_dir = &candidates[0];
        if candidates.len() > 1 {
            let index = self.picker.pick("Select set of repositories", &candidates)?;
            base_dir = &candidates[index];
            println!("> {}", base_dir);
        }

        Ok(paths::absolute(base_dir)?)
    }

    /// Scans the chosen root and resolves the final target directory.
    /// Repositories are offered first; when fallback locations exist, one
    /// extra option at the end of the list switches over to them.
    pub fn select_target(&self, root: &Path, max_depth: u32) -> Result<PathBuf> {
        let scanned = self.scanner.scan(root, max_depth);
        let repos = paths::sorted_unique(paths::relative_to(&scanned.repositories, root));
        let non_repos = paths::sorted_unique(paths::relative_to(&scanned.non_repositories, root));
        debug!(
            "Scan of {} found {} repositories, {} fallback locations",
            root.display(),
            repos.len(),
            non_repos.len()
        );
        self.resolve_target(root, repos, &non_repos)
    }

    fn resolve_target(
        &self,
        root: &Path,
        mut repos: Vec<String>,
        non_repos: &[String],
    ) -> Result<PathBuf> {
        if repos.is_empty() {
            if non_repos.is_empty() {
                return Err(Error::NoRepositoriesFound);
            }
            println!("No Git repositories found");
            return self.pick_non_repo(root, non_repos);
        }

        if !non_repos.is_empty() {
            repos.push(FALLBACK_OPTION.to_string());
        }

        let index = self.picker.pick("Select repository", &repos)?;
        println!("> {}", repos[index]);

        if !non_repos.is_empty() && index == repos.len() - 1 {
            return self.pick_non_repo(root, non_repos);
        }
        Ok(paths::clean(root.join(&repos[index])))
    }

    fn pick_non_repo(&self, root: &Path, non_repos: &[String]) -> Result<PathBuf> {
        let index = self.picker.pick("Select location", non_repos)?;
        println!("> {}", non_repos[index]);
        Ok(paths::clean(root.join(&non_repos[index])))
    }
}
