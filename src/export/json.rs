//! JSON output: the full report, including group statuses, recorded
//! failures and adopted-job flags that the tabular formats drop.

use crate::error::Result;
use crate::finder::RunReport;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json(report: &RunReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
