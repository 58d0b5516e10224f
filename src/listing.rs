use std::path::{Component, Path, PathBuf};
use std::process::Command;

use crate::error::ExportError;

/// Supplies the ordered list of files to export, as paths relative to the
/// source root.
pub trait FileLister {
    fn list(&self) -> Result<Vec<String>, ExportError>;
}

/// Lists files tracked by git, minus the output directory and excluded paths,
/// sorted so part numbering is reproducible.
pub struct GitLister {
    root: PathBuf,
    output_prefix: Option<String>,
    exclude: Vec<String>,
}

impl GitLister {
    /// `output_root` is resolved against `root` and only filtered when it
    /// sits inside it.
    pub fn new(root: &Path, output_root: &Path, exclude: &[String]) -> Self {
        let output_prefix = relative_prefix(root, output_root);
        Self {
            root: root.to_path_buf(),
            output_prefix,
            exclude: exclude.to_vec(),
        }
    }
}

impl FileLister for GitLister {
    fn list(&self) -> Result<Vec<String>, ExportError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .arg("ls-files")
            .output()
            .map_err(|source| ExportError::GitSpawn {
                root: self.root.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::ListFiles {
                root: self.root.clone(),
                reason: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tracked = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        tracing::debug!("git reports {} tracked files", tracked.len());
        Ok(filter_listing(tracked, self.output_prefix.as_deref(), &self.exclude))
    }
}

/// A fixed list, returned as given. No filtering or sorting.
pub struct StaticLister(pub Vec<String>);

impl FileLister for StaticLister {
    fn list(&self) -> Result<Vec<String>, ExportError> {
        Ok(self.0.clone())
    }
}

/// Drop anything under `output_prefix` and anything in `exclude`, then sort.
pub fn filter_listing(
    files: Vec<String>,
    output_prefix: Option<&str>,
    exclude: &[String],
) -> Vec<String> {
    let mut kept: Vec<String> = files
        .into_iter()
        .filter(|f| match output_prefix {
            Some(prefix) => !f.starts_with(prefix),
            None => true,
        })
        .filter(|f| !exclude.iter().any(|e| e == f))
        .collect();
    kept.sort();
    kept
}

/// `export` -> `Some("export/")`. Git always reports `/`-separated paths.
/// `None` when the output directory is not strictly inside `root`.
fn relative_prefix(root: &Path, output_root: &Path) -> Option<String> {
    let root = resolve(root)?;
    let output = resolve(&root.join(output_root))?;
    let rel = output.strip_prefix(&root).ok()?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("{}/", parts.join("/")))
}

/// Absolute form of `path`: canonical when it exists, otherwise with `.` and
/// `..` folded lexically (the output directory may not be created yet).
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Some(canonical);
    }
    let absolute = std::path::absolute(path).ok()?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Some(resolved)
}
