//! Error types for quadplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for quadplot operations.
pub type Result<T> = std::result::Result<T, QuadPlotError>;

/// Errors that can occur while rendering a path plot.
#[derive(Debug, Error)]
pub enum QuadPlotError {
    /// Axis name outside of `x`, `y`, `z`.
    #[error("Unknown axis: {name:?} (expected one of x, y, z)")]
    UnknownAxis {
        /// The name that was given.
        name: String,
    },

    /// Position data with the wrong number of columns.
    #[error("Invalid position data: {0}")]
    Shape(String),

    /// The flown path had no positions.
    #[error("Flown path is empty")]
    EmptyPath,

    /// The package path resolver could not find the project root.
    #[error("Package not found: {package}")]
    PackageNotFound {
        /// Package that was looked up.
        package: String,
    },

    /// Output directory does not exist.
    #[error("Output directory does not exist: {path}")]
    MissingOutputDir {
        /// Expected directory.
        path: PathBuf,
    },

    /// Drawing or encoding the figure failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Failed to read positions from CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuadPlotError {
    /// Create an UnknownAxis error.
    pub fn unknown_axis(name: impl Into<String>) -> Self {
        Self::UnknownAxis { name: name.into() }
    }

    /// Create a Shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// Create a PackageNotFound error.
    pub fn package_not_found(package: impl Into<String>) -> Self {
        Self::PackageNotFound {
            package: package.into(),
        }
    }

    /// Create a Render error from any displayable drawing failure.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for QuadPlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::render(err)
    }
}
