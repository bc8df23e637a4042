//! Figure legend.

use crate::path::PathSet;
use crate::style::SeriesKind;
use plotters::style::RGBColor;

/// One legend row: a colored patch and a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    /// Series this entry describes.
    pub kind: SeriesKind,
}

impl LegendEntry {
    /// Label text.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Patch color.
    pub fn color(&self) -> RGBColor {
        self.kind.color()
    }
}

/// The single legend attached to a figure.
///
/// The flown path is always listed, so a legend is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Legend listing exactly the supplied series, flown path first.
    pub fn for_paths(paths: &PathSet<'_>) -> Self {
        let mut entries = vec![LegendEntry {
            kind: SeriesKind::Flown,
        }];
        if paths.planned.is_some() {
            entries.push(LegendEntry {
                kind: SeriesKind::Planned,
            });
        }
        if paths.waypoints.is_some() {
            entries.push(LegendEntry {
                kind: SeriesKind::Waypoints,
            });
        }
        Self { entries }
    }

    /// Legend rows in drawing order.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Number of rows, at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels in drawing order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(LegendEntry::label).collect()
    }
}
