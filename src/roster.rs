//! Roster input
//!
//! Reads the legacy alumni spreadsheet (.xls/.xlsx). FIRST_NAME and
//! LAST_NAME are required; every other column is optional and reads as
//! empty when absent. Rows with neither name are skipped (trailing blank
//! rows are common in exported workbooks).

use crate::error::{AlumniFinderError, Result};
use crate::matcher::types::{AlumniRecord, EducationSlot};
use crate::normalizer::normalize_year;
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::Path;

pub const COL_FIRST_NAME: &str = "FIRST_NAME";
pub const COL_LAST_NAME: &str = "LAST_NAME";
pub const COL_WORK_TITLE: &str = "WORK_TITLE";
pub const COL_WORK_COMPANY: &str = "WORK_COMPANY_NAME1";
pub const COL_WORK_CITY: &str = "WORK_CITY";
pub const COL_WORK_STATE: &str = "WORK_STATE";

/// Number of SCHOOL/DEGREE_CODE/DEGREE_YEAR/MAJOR column groups.
pub const EDUCATION_SLOTS: usize = 3;

/// 1-based spreadsheet row selection. Row 1 is the header, so data starts
/// at row 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowRange {
    pub start_row: Option<u32>,
    pub end_row: Option<u32>,
}

impl RowRange {
    fn contains(&self, sheet_row: u32) -> bool {
        sheet_row >= self.start_row.unwrap_or(2)
            && self.end_row.map_or(true, |end| sheet_row <= end)
    }
}

/// Read the roster into records. The returned vector may be empty when the
/// row range selects nothing; a sheet without a header row is an error.
pub fn read_roster(path: &Path, range: &RowRange) -> Result<Vec<AlumniRecord>> {
    if !path.exists() {
        return Err(AlumniFinderError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AlumniFinderError::NoRecords(path.display().to_string()))?;
    let data = workbook.worksheet_range(&sheet_name)?;

    let mut rows = data.rows();
    let header = rows
        .next()
        .ok_or_else(|| AlumniFinderError::NoRecords(path.display().to_string()))?;
    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(index, cell)| (cell_to_string(cell).to_uppercase(), index))
        .collect();

    for required in [COL_FIRST_NAME, COL_LAST_NAME] {
        if !columns.contains_key(required) {
            return Err(AlumniFinderError::MissingColumn(required.to_string()));
        }
    }

    let get = |row: &[Data], name: &str| -> String {
        columns
            .get(name)
            .and_then(|&index| row.get(index))
            .map(cell_to_string)
            .unwrap_or_default()
    };

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        // header is sheet row 1
        let sheet_row = index as u32 + 2;
        if !range.contains(sheet_row) {
            continue;
        }

        let first_name = get(row, COL_FIRST_NAME);
        let last_name = get(row, COL_LAST_NAME);
        if first_name.is_empty() && last_name.is_empty() {
            continue;
        }

        let mut education = Vec::with_capacity(EDUCATION_SLOTS);
        for slot in 1..=EDUCATION_SLOTS {
            education.push(EducationSlot {
                school: get(row, &format!("SCHOOL{}", slot)),
                degree_code: get(row, &format!("DEGREE_CODE{}", slot)),
                major: get(row, &format!("MAJOR{}", slot)),
                grad_year: columns
                    .get(format!("DEGREE_YEAR{}", slot).as_str())
                    .and_then(|&index| row.get(index))
                    .and_then(cell_to_year),
            });
        }

        let city = get(row, COL_WORK_CITY);
        let state = get(row, COL_WORK_STATE);
        let work_location = [city, state]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        records.push(AlumniRecord {
            row_number: sheet_row,
            first_name,
            last_name,
            work_title: get(row, COL_WORK_TITLE),
            work_company: get(row, COL_WORK_COMPANY),
            work_location,
            education,
        });
    }

    Ok(records)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => normalize_year(*f),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn cell_to_year(cell: &Data) -> Option<i64> {
    match cell {
        Data::Float(f) => Some(f.trunc() as i64),
        Data::Int(i) => Some(*i),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok().map(|f| f.trunc() as i64)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string_integral_float() {
        assert_eq!(cell_to_string(&Data::Float(2016.0)), "2016");
        assert_eq!(cell_to_string(&Data::String("  Jane ".into())), "Jane");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_cell_to_year() {
        assert_eq!(cell_to_year(&Data::Float(2016.0)), Some(2016));
        assert_eq!(cell_to_year(&Data::Int(2016)), Some(2016));
        assert_eq!(cell_to_year(&Data::String("2016".into())), Some(2016));
        assert_eq!(cell_to_year(&Data::String("2016.0".into())), Some(2016));
        assert_eq!(cell_to_year(&Data::String("".into())), None);
        assert_eq!(cell_to_year(&Data::Empty), None);
    }

    #[test]
    fn test_read_roster_missing_file() {
        let err = read_roster(Path::new("/nonexistent/roster.xlsx"), &RowRange::default())
            .unwrap_err();
        assert!(matches!(err, AlumniFinderError::FileNotFound(_)));
    }
}
