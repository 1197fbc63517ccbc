use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Args;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::timetable::{
    date::date_codec::app::parse_naive_date, StopAlias, TimetableConfig, TimetableError,
    VirtualStopConfig,
};

/// options of the print operation. list options add to those of a
/// configuration file, other options replace them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct PrintArguments {
    /// directory holding the GTFS text files
    #[arg(short, long)]
    pub feed_directory: String,

    /// TOML file with a [timetable] table of options
    #[arg(short, long)]
    pub configuration_file: Option<String>,

    /// route name, as shown by the list operation. repeat for several routes
    #[arg(short, long = "route")]
    pub routes: Vec<String>,

    /// stop name, as shown by the list operation. repeat for each stop
    #[arg(short, long = "stop")]
    pub stops: Vec<String>,

    /// display name to use for a stop, as STOP ALIAS
    #[arg(short, long = "alias", num_args = 2, value_names = ["STOP", "ALIAS"])]
    pub aliases: Vec<String>,

    /// a stop that is not in the feed, placed MINUTES from a real ANCHOR stop.
    /// positive MINUTES lie north of the anchor, negative lie south of it
    #[arg(
        long = "virtual-stop",
        num_args = 3,
        value_names = ["NAME", "ANCHOR", "MINUTES"],
        allow_hyphen_values = true
    )]
    pub virtual_stops: Vec<String>,

    /// also list trips of services running only on some weekdays
    #[arg(long)]
    pub allow_irregular: bool,

    /// add a leading column with the trip id
    #[arg(long)]
    pub trip_id_column: bool,

    /// date the timetable is valid for as YYYYMMDD, defaults to today
    #[arg(short, long, value_parser = parse_naive_date)]
    pub date: Option<NaiveDate>,

    /// maximum number of rows in each direction, 0 for no limit
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// do not print the tables to the console
    #[arg(long)]
    pub no_print: bool,

    /// write one CSV file per direction
    #[arg(long)]
    pub csv: bool,

    /// directory for CSV files, defaults to the working directory
    #[arg(short, long)]
    pub output_directory: Option<String>,
}

impl PrintArguments {
    pub fn feed_directory(&self) -> &Path {
        Path::new(&self.feed_directory)
    }

    pub fn output_directory(&self) -> PathBuf {
        self.output_directory
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_default()
    }

    /// the configuration file, if any, with these arguments applied over it
    pub fn timetable_config(&self) -> Result<TimetableConfig, TimetableError> {
        let mut config = match &self.configuration_file {
            Some(file) => TimetableConfig::from_file(Path::new(file))?,
            None => TimetableConfig::default(),
        };
        config.routes.extend(self.routes.iter().cloned());
        config.stops.extend(self.stops.iter().cloned());
        for (stop, alias) in self.aliases.iter().tuples() {
            config.aliases.push(StopAlias {
                stop: stop.clone(),
                alias: alias.clone(),
            });
        }
        for (name, anchor, minutes) in self.virtual_stops.iter().tuples() {
            let offset_minutes = minutes.trim().parse::<i64>().map_err(|e| {
                let msg = format!("virtual stop {name:?} has invalid offset {minutes:?}: {e}");
                TimetableError::InvalidConfiguration(msg)
            })?;
            config.virtual_stops.push(VirtualStopConfig {
                name: name.clone(),
                anchor: anchor.clone(),
                offset_minutes,
            });
        }
        config.allow_irregular |= self.allow_irregular;
        config.trip_id_column |= self.trip_id_column;
        if self.date.is_some() {
            config.reference_date = self.date;
        }
        if self.max_rows.is_some() {
            config.max_rows = self.max_rows;
        }
        Ok(config)
    }
}
