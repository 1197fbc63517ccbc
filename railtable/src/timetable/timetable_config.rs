use std::path::Path;

use chrono::NaiveDate;
use config::{Config, File};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::timetable::{
    date::date_codec::app::{deserialize_optional_naive_date, serialize_optional_naive_date},
    timetable_error::configuration_errors,
    TimetableError,
};

pub const DEFAULT_LOOK_AHEAD_DAYS: u64 = 14;

/// a display name to show in place of a stop's feed name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopAlias {
    pub stop: String,
    pub alias: String,
}

/// a synthetic stop placed `offset_minutes` from its anchor stop. positive
/// offsets lie further north of the anchor, negative ones further south.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualStopConfig {
    pub name: String,
    pub anchor: String,
    pub offset_minutes: i64,
}

/// everything a timetable run needs besides the feed itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// route names as listed in the feed. trips of every matching route are
    /// combined into one timetable.
    pub routes: Vec<String>,
    /// names of the stops to show, at least two
    pub stops: Vec<String>,
    pub aliases: Vec<StopAlias>,
    pub virtual_stops: Vec<VirtualStopConfig>,
    /// list trips of services that only run on some weekdays
    pub allow_irregular: bool,
    pub trip_id_column: bool,
    /// day the timetable is valid for, today when not set
    #[serde(
        deserialize_with = "deserialize_optional_naive_date",
        serialize_with = "serialize_optional_naive_date"
    )]
    pub reference_date: Option<NaiveDate>,
    /// maximum rows per direction, unlimited when not set or zero
    pub max_rows: Option<usize>,
    pub look_ahead_days: u64,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            routes: vec![],
            stops: vec![],
            aliases: vec![],
            virtual_stops: vec![],
            allow_irregular: false,
            trip_id_column: false,
            reference_date: None,
            max_rows: None,
            look_ahead_days: DEFAULT_LOOK_AHEAD_DAYS,
        }
    }
}

impl TimetableConfig {
    /// reads the `[timetable]` table of a configuration file. any format the
    /// config crate detects from the file extension is accepted.
    pub fn from_file(path: &Path) -> Result<TimetableConfig, TimetableError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                let msg = format!("file '{}' produced error: {e}", path.display());
                TimetableError::InvalidConfiguration(msg)
            })?;
        config.get::<TimetableConfig>("timetable").map_err(|e| {
            let msg = format!("error reading 'timetable' key in '{}': {e}", path.display());
            TimetableError::InvalidConfiguration(msg)
        })
    }

    /// trimmed, non-empty, de-duplicated route names in the order given
    pub fn route_names(&self) -> Vec<String> {
        trimmed_unique(&self.routes)
    }

    /// trimmed, non-empty, de-duplicated stop names in the order given
    pub fn stop_names(&self) -> Vec<String> {
        trimmed_unique(&self.stops)
    }

    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn validate(&self) -> Result<(), TimetableError> {
        let mut errors = vec![];
        if self.route_names().is_empty() {
            errors.push(TimetableError::InvalidConfiguration(String::from(
                "at least one route is required",
            )));
        }
        if self.stop_names().len() < 2 {
            errors.push(TimetableError::InvalidConfiguration(String::from(
                "at least two distinct stops are required",
            )));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(configuration_errors(&errors))
        }
    }
}

fn trimmed_unique(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unique()
        .map(String::from)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_file() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("dart_config.toml")
    }

    #[test]
    fn test_from_file() {
        let conf = TimetableConfig::from_file(&config_file()).expect("fixture config should load");
        assert_eq!(conf.routes, vec![String::from("DART")]);
        assert_eq!(conf.stops.len(), 3);
        assert_eq!(
            conf.aliases,
            vec![StopAlias {
                stop: String::from("Howth Junction and Donaghmede"),
                alias: String::from("Howth Jct"),
            }]
        );
        assert_eq!(conf.virtual_stops.len(), 1);
        assert_eq!(conf.virtual_stops[0].offset_minutes, 10);
        assert_eq!(conf.reference_date, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(conf.look_ahead_days, DEFAULT_LOOK_AHEAD_DAYS);
        assert!(!conf.allow_irregular);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_missing_file_fails() {
        let result = TimetableConfig::from_file(&config_file().with_file_name("nope.toml"));
        assert!(matches!(result, Err(TimetableError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let conf = TimetableConfig {
            routes: vec![String::from("  ")],
            stops: vec![String::from("Tara St"), String::from("Tara St ")],
            ..Default::default()
        };
        match conf.validate() {
            Err(TimetableError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("route"));
                assert!(msg.contains("two distinct stops"));
            }
            other => panic!("expected InvalidConfiguration, found {other:?}"),
        }
    }

    #[test]
    fn test_serde_round_trip_keeps_date_format() {
        let conf = TimetableConfig {
            reference_date: NaiveDate::from_ymd_opt(2024, 12, 20),
            ..Default::default()
        };
        let json = serde_json::to_value(&conf).unwrap();
        assert_eq!(json["reference_date"], "20241220");
        let back: TimetableConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, conf);
    }
}
