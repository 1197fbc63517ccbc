use std::path::Path;

use serde::de::DeserializeOwned;

use crate::timetable::TimetableError;

/// reads every row of one GTFS text file into serde row records. the header
/// row names the columns; columns not used by the record are ignored.
///
/// # Arguments
///
/// * `directory` - the feed directory
/// * `filename` - file within the directory, such as `trips.txt`
/// * `required` - if false, a missing file reads as zero rows
pub fn read_rows<T>(directory: &Path, filename: &str, required: bool) -> Result<Vec<T>, TimetableError>
where
    T: DeserializeOwned,
{
    let path = directory.join(filename);
    if !required && !path.exists() {
        log::debug!("optional feed file {path:?} not present");
        return Ok(vec![]);
    }
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|e| TimetableError::FeedRead {
            path: path.clone(),
            message: e.to_string(),
        })?;
    let rows = reader
        .into_deserialize::<T>()
        .map(|r| {
            r.map_err(|e| TimetableError::FeedRead {
                path: path.clone(),
                message: format!("failure reading row: {e}"),
            })
        })
        .collect::<Result<Vec<T>, TimetableError>>()?;
    log::debug!("read {} rows from {path:?}", rows.len());
    Ok(rows)
}
