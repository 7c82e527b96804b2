//! Match result export
//!
//! One writer per format, all sharing the legacy column layout: one row per
//! scored candidate, grouped by input record, a blank row closing each
//! group. JSON keeps the full report including group statuses.

pub mod csv;
pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::finder::RunReport;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Column layout shared by the xlsx and csv writers.
pub const OUTPUT_HEADERS: [&str; 9] = [
    "FIRST_NAME",
    "LAST_NAME",
    "ROW_NUMBER_FROM_INPUT",
    "FULL_NAME_ON_LINKEDIN",
    "PROFILE_LINK",
    "JOB_TITLE",
    "COMPANY_NAME",
    "COMPANY_LOCATION",
    "ACCURACY_SCORE",
];

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        output.join(format!("alumni-matches-{}.{}", stamp, extension))
    } else {
        output.to_path_buf()
    }
}

/// Write the report in the requested format and return the path written.
pub fn export_report(
    report: &RunReport,
    format: &ExportFormat,
    output: &Path,
) -> Result<PathBuf> {
    let path = output_path_for_format(output, format.extension());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format {
        ExportFormat::Xlsx => excel::write_xlsx(report, &path)?,
        ExportFormat::Csv => csv::write_csv(report, &path)?,
        ExportFormat::Json => json::write_json(report, &path)?,
    }
    Ok(path)
}
