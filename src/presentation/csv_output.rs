use crate::error::FxResult;
use crate::model::request::RequestParameters;
use crate::model::table::ResultTable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes the result table as CSV
///
/// Writes `{base}_{quote}_{start}_{end}.csv` into `output_dir` with a header
/// row matching the table shape. An absent rate becomes an empty field.
///
/// # Returns
/// Path of the written file
pub fn write_csv(
    table: &ResultTable,
    params: &RequestParameters,
    output_dir: &Path,
) -> FxResult<PathBuf> {
    let path = output_dir.join(format!("{}.csv", params.file_stem()));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(table.headers())?;

    match table {
        ResultTable::Rates(points) => {
            for point in points {
                writer.write_record(&[
                    point.date.to_string(),
                    point.rate.map(|r| r.to_string()).unwrap_or_default(),
                ])?;
            }
        }
        ResultTable::Fluctuation(summary) => {
            writer.write_record(&[
                summary.date.to_string(),
                summary.start_rate.to_string(),
                summary.end_rate.to_string(),
                summary.change.to_string(),
                summary.percent_change.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    info!("CSV saved as {}", path.display());
    println!("CSV saved as {}", path.display());
    Ok(path)
}
