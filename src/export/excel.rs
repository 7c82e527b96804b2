//! Excel output
//!
//! Legacy workbook layout: header row, one row per scored candidate, a
//! blank row after each record's group.

use super::OUTPUT_HEADERS;
use crate::error::Result;
use crate::finder::RunReport;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub fn write_xlsx(report: &RunReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Matches")?;

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let mut row: u32 = 1;
    for group in &report.groups {
        for result in &group.results {
            worksheet.write_string(row, 0, group.first_name.as_str())?;
            worksheet.write_string(row, 1, group.last_name.as_str())?;
            worksheet.write_number(row, 2, group.row_number as f64)?;
            worksheet.write_string(row, 3, result.display_name.as_str())?;
            worksheet.write_string(row, 4, result.link.as_str())?;
            worksheet.write_string(row, 5, result.latest_title.as_str())?;
            worksheet.write_string(row, 6, result.latest_company.as_str())?;
            worksheet.write_string(row, 7, result.latest_location.as_str())?;
            worksheet.write_number(row, 8, result.accuracy_score as f64)?;
            row += 1;
        }
        // blank separator row closes each group
        row += 1;
    }

    workbook.save(output_path)?;
    Ok(())
}
