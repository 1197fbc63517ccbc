use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::QuoteStyle;

use crate::timetable::{
    date::date_codec::gtfs::GTFS_DATE_FORMAT, timetable_ops::Timetables, Direction, OutputTable,
    TimetableError,
};

/// route names joined into one file name fragment, with spaces and path
/// separators replaced by underscores.
pub fn route_path(routes: &[String]) -> String {
    routes.join("_").replace([' ', '/'], "_")
}

/// `{routes}_{NORTH|SOUTH}_{YYYYMMDD}.csv`
pub fn csv_filename(routes: &[String], direction: Direction, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.csv",
        route_path(routes),
        direction.label(),
        date.format(GTFS_DATE_FORMAT)
    )
}

/// writes one table, header first, quoting fields only where needed.
pub fn write_table(table: &OutputTable, filepath: &Path) -> Result<(), TimetableError> {
    let write_error = |message: String| TimetableError::Write {
        path: filepath.to_owned(),
        message,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_path(filepath)
        .map_err(|e| write_error(format!("failure opening output file: {e}")))?;
    for (idx, record) in table.records().enumerate() {
        writer
            .write_record(record)
            .map_err(|e| write_error(format!("failure writing CSV output row {idx}: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| write_error(format!("failed to flush: {e}")))?;
    Ok(())
}

/// writes every table of a run into the output directory, creating it if
/// needed. returns the files written.
pub fn write_timetables(
    timetables: &Timetables,
    output_directory: &Path,
) -> Result<Vec<PathBuf>, TimetableError> {
    if !output_directory.as_os_str().is_empty() && !output_directory.exists() {
        std::fs::create_dir_all(output_directory).map_err(|e| TimetableError::Write {
            path: output_directory.to_owned(),
            message: format!("failure creating output directory: {e}"),
        })?;
    }
    let mut written = vec![];
    for (direction, table) in timetables.tables.iter() {
        let filename = csv_filename(&timetables.routes, *direction, timetables.reference_date);
        let filepath = output_directory.join(filename);
        write_table(table, &filepath)?;
        log::info!("saved {direction} timetable to {filepath:?}");
        written.push(filepath);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_csv_filename() {
        let routes = vec![String::from("DART"), String::from("Dublin/Rosslare Europort")];
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(
            csv_filename(&routes, Direction::North, date),
            "DART_Dublin_Rosslare_Europort_NORTH_20240304.csv"
        );
    }

    #[test]
    fn test_write_timetables() {
        let table = OutputTable {
            direction: Direction::South,
            header: vec![String::from("Days"), String::from("Origin, Platform 2")],
            rows: vec![vec![String::from("Mon-Fri"), String::from("X")]],
        };
        let timetables = Timetables {
            routes: vec![String::from("DART")],
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            tables: BTreeMap::from([(Direction::South, table)]),
        };
        let directory = std::env::temp_dir()
            .join(format!("railtable_csv_sink_{}", std::process::id()));
        let written = write_timetables(&timetables, &directory).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("DART_SOUTH_20240304.csv"));
        let contents = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(contents, "Days,\"Origin, Platform 2\"\nMon-Fri,X\n");
        std::fs::remove_dir_all(&directory).unwrap();
    }
}
