//! CSV output, same columns as the workbook.

use super::OUTPUT_HEADERS;
use crate::error::Result;
use crate::finder::RunReport;
use std::path::Path;

pub fn write_csv(report: &RunReport, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(OUTPUT_HEADERS)?;

    for group in &report.groups {
        for result in &group.results {
            let row = [
                group.first_name.clone(),
                group.last_name.clone(),
                group.row_number.to_string(),
                result.display_name.clone(),
                result.link.clone(),
                result.latest_title.clone(),
                result.latest_company.clone(),
                result.latest_location.clone(),
                result.accuracy_score.to_string(),
            ];
            writer.write_record(&row)?;
        }
        writer.write_record([""; 9])?;
    }

    writer.flush()?;
    Ok(())
}
