use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::env;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Collapses `.` and `..` segments and repeated separators without touching
/// the filesystem. An empty path cleans to `"."`.
pub fn clean(path: impl AsRef<Path>) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                None | Some(Component::ParentDir) => out.push(Component::ParentDir),
                // `..` at an absolute root has nowhere to go
                Some(_) => {}
            },
            Component::Normal(_) => out.push(component),
        }
    }

    let cleaned: PathBuf = out.into_iter().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Deduplicates by exact string equality and sorts ascending, so prompts the
/// user sees are stable across runs with identical inputs.
pub fn sorted_unique<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let set: BTreeSet<String> = values.into_iter().collect();
    set.into_iter().collect()
}

/// Rewrites paths as display forms relative to `root`: the root prefix is
/// stripped along with the separator that follows it (either the platform
/// separator or a forced `/`), and the remainder is cleaned.
pub fn relative_to(paths: &[PathBuf], root: &Path) -> Vec<String> {
    let root = root.to_string_lossy();
    paths
        .iter()
        .map(|path| {
            let path = path.to_string_lossy();
            let rest = path.strip_prefix(root.as_ref()).unwrap_or(&path);
            let rest = rest.strip_prefix(MAIN_SEPARATOR).unwrap_or(rest);
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            clean(rest).to_string_lossy().into_owned()
        })
        .collect()
}

/// Resolves a possibly relative path against the current directory and
/// cleans it. The result is lexical; nothing is canonicalized.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(clean(path));
    }
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    Ok(clean(cwd.join(path)))
}
