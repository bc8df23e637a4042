//! Output location and file naming.
//!
//! Figures are written to `<package root>/output_data/` as
//! `<kind>_plot_<unix timestamp>.png`.

mod resolver;

pub use resolver::{manifest_name, FixedRoot, PackageResolver, RosPackageResolver, ROS_PACKAGE_PATH};

use crate::error::{QuadPlotError, Result};
use crate::figure::FigureKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory figures are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    dir: PathBuf,
}

impl OutputLocation {
    /// `<root>/<subdir>`.
    pub fn new(root: &Path, subdir: &str) -> Self {
        Self {
            dir: root.join(subdir),
        }
    }

    /// Resolve `package` and place the output directory under it.
    pub fn resolve<R: PackageResolver + ?Sized>(
        resolver: &R,
        package: &str,
        subdir: &str,
    ) -> Result<Self> {
        let root = resolver.package_path(package)?;
        Ok(Self::new(&root, subdir))
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fail unless the output directory exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(QuadPlotError::MissingOutputDir {
                path: self.dir.clone(),
            })
        }
    }

    /// Path for a figure of `kind` written at `timestamp`.
    pub fn file_for(&self, kind: FigureKind, timestamp: &str) -> PathBuf {
        self.dir
            .join(format!("{}_plot_{}.png", kind.file_prefix(), timestamp))
    }
}

/// Seconds since the Unix epoch as a decimal string, e.g. `1697460000.123456`.
///
/// Whole seconds keep a trailing `.0`.
pub fn format_timestamp(time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        format!("{}", secs)
    }
}

/// Timestamp for a file written now.
pub fn timestamp_now() -> String {
    format_timestamp(SystemTime::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn file_names_follow_kind() {
        let location = OutputLocation::new(Path::new("/ws/quad_controller"), "output_data");
        assert_eq!(
            location.file_for(FigureKind::One, "12.5"),
            PathBuf::from("/ws/quad_controller/output_data/one_plot_12.5.png")
        );
        assert_eq!(
            location.file_for(FigureKind::Isometric, "12.5"),
            PathBuf::from("/ws/quad_controller/output_data/isometric_plot_12.5.png")
        );
        assert_eq!(
            location.file_for(FigureKind::Grid, "12.5"),
            PathBuf::from("/ws/quad_controller/output_data/grid_plot_12.5.png")
        );
    }

    #[test]
    fn timestamps_are_decimal_seconds() {
        let t = UNIX_EPOCH + Duration::from_millis(1_697_460_000_250);
        assert_eq!(format_timestamp(t), "1697460000.25");
        let whole = UNIX_EPOCH + Duration::from_secs(1_697_460_000);
        assert_eq!(format_timestamp(whole), "1697460000.0");
    }

    #[test]
    fn resolves_under_package_root() {
        let location =
            OutputLocation::resolve(&FixedRoot::new("/pkg"), "quad_controller", "output_data")
                .unwrap();
        assert_eq!(location.dir(), Path::new("/pkg/output_data"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let location = OutputLocation::new(dir.path(), "output_data");
        assert!(matches!(
            location.ensure_exists(),
            Err(QuadPlotError::MissingOutputDir { .. })
        ));
        std::fs::create_dir(location.dir()).unwrap();
        assert!(location.ensure_exists().is_ok());
    }
}
