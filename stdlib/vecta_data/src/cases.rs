use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{check_range, DataError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCounts {
    pub historical_cases: u32,
    pub active_clusters: u32,
}

impl CaseCounts {
    pub fn new(historical_cases: u32, active_clusters: u32) -> Self {
        Self {
            historical_cases,
            active_clusters,
        }
    }

    /// Enforce the manual-entry ranges.
    pub fn validate(&self) -> Result<()> {
        check_cases(self.historical_cases)?;
        check_clusters(self.active_clusters)?;
        Ok(())
    }
}

pub fn check_cases(n: u32) -> Result<()> {
    check_range("historical cases", f64::from(n), 0.0, 1000.0)
}

pub fn check_clusters(n: u32) -> Result<()> {
    check_range("active clusters", f64::from(n), 0.0, 50.0)
}

impl Default for CaseCounts {
    fn default() -> Self {
        Self::new(39, 5)
    }
}

/// Anything that can report case counts for a named area.
pub trait CaseSource {
    fn lookup(&self, area: &str) -> Option<CaseCounts>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CaseRow {
    key: String,
    counts: CaseCounts,
}

/// Case counts per area, loaded from a CSV export.
///
/// The file has a header row. Column 1 is the area, column 2 last week's
/// cases, optional column 3 the active cluster count (0 when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTable {
    rows: Vec<CaseRow>,
}

fn area_key(area: &str) -> String {
    area.trim().to_lowercase()
}

fn parse_count(row: usize, column: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Ok(n);
    }
    // Spreadsheet exports sometimes write whole numbers as "39.0".
    match raw.parse::<f64>() {
        Ok(x) if x >= 0.0 && x.fract() == 0.0 && x <= f64::from(u32::MAX) => Ok(x as u32),
        _ => Err(DataError::MalformedPayload(format!(
            "row {row}: {column} {raw:?} is not a non-negative whole number"
        ))),
    }
}

impl CaseTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 2;
            let (Some(area), Some(cases)) = (record.get(0), record.get(1)) else {
                log::warn!("case table row {row} has fewer than two columns, skipped");
                continue;
            };
            let historical_cases = parse_count(row, "cases", cases)?;
            let active_clusters = match record.get(2) {
                Some(raw) if !raw.is_empty() => parse_count(row, "clusters", raw)?,
                _ => {
                    log::warn!("case table row {row} ({area}) has no cluster column, using 0");
                    0
                }
            };
            rows.push(CaseRow {
                key: area_key(area),
                counts: CaseCounts::new(historical_cases, active_clusters),
            });
        }

        log::debug!("loaded {} case rows", rows.len());
        Ok(Self { rows })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CaseSource for CaseTable {
    /// Case-insensitive on the trimmed name; first matching row wins.
    fn lookup(&self, area: &str) -> Option<CaseCounts> {
        let key = area_key(area);
        self.rows.iter().find(|r| r.key == key).map(|r| r.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "area,cases,clusters\n\
                       Woodlands,39,5\n\
                       Ang Mo Kio,12,1\n\
                       woodlands,99,9\n";

    #[test]
    fn lookup_ignores_case_and_padding() {
        let t = CaseTable::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.lookup("  ANG MO KIO "), Some(CaseCounts::new(12, 1)));
        assert_eq!(t.lookup("Woodlands"), Some(CaseCounts::new(39, 5)));
        assert_eq!(t.lookup("Tampines"), None);
    }

    #[test]
    fn missing_cluster_column_means_zero() {
        let t = CaseTable::from_reader("area,cases\nBedok,7\n".as_bytes()).unwrap();
        assert_eq!(t.lookup("bedok"), Some(CaseCounts::new(7, 0)));
    }

    #[test]
    fn whole_float_counts_are_accepted() {
        let t = CaseTable::from_reader("area,cases,clusters\nBedok,7.0,2\n".as_bytes()).unwrap();
        assert_eq!(t.lookup("Bedok"), Some(CaseCounts::new(7, 2)));
    }

    #[test]
    fn bad_count_reports_row() {
        let err = CaseTable::from_reader("area,cases\nBedok,many\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn manual_ranges() {
        assert!(CaseCounts::default().validate().is_ok());
        assert!(CaseCounts::new(1001, 0).validate().is_err());
        assert!(CaseCounts::new(0, 51).validate().is_err());
    }
}
