//! CSV position reader.

use super::Positions;
use crate::error::{QuadPlotError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads position sequences from CSV files with `x,y,z` rows.
#[derive(Debug)]
pub struct PositionReader;

impl PositionReader {
    /// Read positions from a CSV file.
    pub fn read_file(path: &Path) -> Result<Positions> {
        let file = File::open(path)?;
        let positions = Self::read(file)?;
        tracing::debug!("Read {} positions from {}", positions.len(), path.display());
        Ok(positions)
    }

    /// Read positions from any CSV source.
    ///
    /// A first row in which no field is numeric is treated as a header and
    /// skipped. Any other non-numeric row is a shape error.
    pub fn read<R: Read>(source: R) -> Result<Positions> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(source);

        let mut points = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != 3 {
                return Err(QuadPlotError::shape(format!(
                    "row {} has {} columns, expected 3",
                    index + 1,
                    record.len()
                )));
            }

            let parsed: std::result::Result<Vec<f64>, _> =
                record.iter().map(str::parse::<f64>).collect();
            match parsed {
                Ok(row) => points.push([row[0], row[1], row[2]]),
                Err(_) if index == 0 && is_header(&record) => continue,
                Err(e) => {
                    return Err(QuadPlotError::shape(format!(
                        "row {} is not numeric: {}",
                        index + 1,
                        e
                    )))
                }
            }
        }

        Ok(Positions::from_points(&points))
    }
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.parse::<f64>().is_err())
}
