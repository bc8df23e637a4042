//! Package path resolution.

use crate::error::{QuadPlotError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable listing ROS package roots.
pub const ROS_PACKAGE_PATH: &str = "ROS_PACKAGE_PATH";

const MANIFEST: &str = "package.xml";
const IGNORE_MARKER: &str = "CATKIN_IGNORE";
const MAX_SEARCH_DEPTH: usize = 16;

/// Finds the root directory of a named package.
pub trait PackageResolver {
    /// Filesystem root of `package`.
    fn package_path(&self, package: &str) -> Result<PathBuf>;
}

/// Resolver that always answers with the same directory.
#[derive(Debug, Clone)]
pub struct FixedRoot {
    root: PathBuf,
}

impl FixedRoot {
    /// Resolve every package to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackageResolver for FixedRoot {
    fn package_path(&self, _package: &str) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}

/// Looks packages up under the roots listed in `ROS_PACKAGE_PATH`, the way
/// `rospack find` does.
#[derive(Debug, Clone, Default)]
pub struct RosPackageResolver {
    roots: Vec<PathBuf>,
}

impl RosPackageResolver {
    /// Roots taken from the `ROS_PACKAGE_PATH` environment variable.
    pub fn from_env() -> Self {
        let roots = std::env::var_os(ROS_PACKAGE_PATH)
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self { roots }
    }

    /// Search the given roots, in order.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Roots searched, in order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl PackageResolver for RosPackageResolver {
    fn package_path(&self, package: &str) -> Result<PathBuf> {
        for root in &self.roots {
            tracing::debug!("Searching {} for package {}", root.display(), package);
            if let Some(found) = find_package(root, package, 0) {
                tracing::debug!("Found package {} at {}", package, found.display());
                return Ok(found);
            }
        }
        Err(QuadPlotError::package_not_found(package))
    }
}

fn find_package(dir: &Path, package: &str, depth: usize) -> Option<PathBuf> {
    let manifest = dir.join(MANIFEST);
    if manifest.is_file() {
        // Packages do not nest.
        return package_matches(dir, &manifest, package).then(|| dir.to_path_buf());
    }
    if depth >= MAX_SEARCH_DEPTH || dir.join(IGNORE_MARKER).exists() {
        return None;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", dir.display(), e);
            return None;
        }
    };

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && !is_hidden(path))
        .collect();
    subdirs.sort();

    subdirs
        .iter()
        .find_map(|sub| find_package(sub, package, depth + 1))
}

fn package_matches(dir: &Path, manifest: &Path, package: &str) -> bool {
    match fs::read_to_string(manifest) {
        Ok(xml) => match manifest_name(&xml) {
            Some(name) => name == package,
            None => dir.file_name() == Some(OsStr::new(package)),
        },
        Err(e) => {
            tracing::warn!("Unreadable manifest {}: {}", manifest.display(), e);
            false
        }
    }
}

/// Package name declared in a `package.xml`.
pub fn manifest_name(xml: &str) -> Option<&str> {
    let start = xml.find("<name>")? + "<name>".len();
    let end = start + xml[start..].find("</name>")?;
    let name = xml[start..end].trim();
    (!name.is_empty()).then_some(name)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_package(dir: &Path, xml_name: Option<&str>) {
        fs::create_dir_all(dir).unwrap();
        let xml = match xml_name {
            Some(name) => format!("<package format=\"2\">\n  <name> {} </name>\n</package>\n", name),
            None => "<package/>\n".to_string(),
        };
        fs::write(dir.join(MANIFEST), xml).unwrap();
    }

    #[test]
    fn reads_manifest_name() {
        assert_eq!(manifest_name("<package><name>quad_controller</name></package>"), Some("quad_controller"));
        assert_eq!(manifest_name("<package><name> </name></package>"), None);
        assert_eq!(manifest_name("<package/>"), None);
    }

    #[test]
    fn finds_nested_package_by_manifest_name() {
        let ws = TempDir::new().unwrap();
        write_package(&ws.path().join("src/other"), Some("other"));
        write_package(&ws.path().join("src/robot/quad"), Some("quad_controller"));

        let resolver = RosPackageResolver::with_roots(vec![ws.path().to_path_buf()]);
        let found = resolver.package_path("quad_controller").unwrap();
        assert_eq!(found, ws.path().join("src/robot/quad"));
    }

    #[test]
    fn falls_back_to_directory_name() {
        let ws = TempDir::new().unwrap();
        write_package(&ws.path().join("quad_controller"), None);
        let resolver = RosPackageResolver::with_roots(vec![ws.path().to_path_buf()]);
        assert_eq!(
            resolver.package_path("quad_controller").unwrap(),
            ws.path().join("quad_controller")
        );
    }

    #[test]
    fn skips_ignored_and_hidden_directories() {
        let ws = TempDir::new().unwrap();
        write_package(&ws.path().join("ignored/quad_controller"), Some("quad_controller"));
        fs::write(ws.path().join("ignored").join(IGNORE_MARKER), "").unwrap();
        write_package(&ws.path().join(".cache/quad_controller"), Some("quad_controller"));

        let resolver = RosPackageResolver::with_roots(vec![ws.path().to_path_buf()]);
        let err = resolver.package_path("quad_controller").unwrap_err();
        assert!(matches!(err, QuadPlotError::PackageNotFound { .. }));
    }

    #[test]
    fn earlier_roots_win() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_package(&first.path().join("a"), Some("quad_controller"));
        write_package(&second.path().join("b"), Some("quad_controller"));

        let resolver = RosPackageResolver::with_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(
            resolver.package_path("quad_controller").unwrap(),
            first.path().join("a")
        );
    }

    #[test]
    fn no_roots_means_not_found() {
        let resolver = RosPackageResolver::default();
        assert!(resolver.package_path("quad_controller").is_err());
    }

    #[test]
    fn fixed_root_ignores_package_name() {
        let resolver = FixedRoot::new("/tmp/project");
        assert_eq!(
            resolver.package_path("anything").unwrap(),
            PathBuf::from("/tmp/project")
        );
    }
}
