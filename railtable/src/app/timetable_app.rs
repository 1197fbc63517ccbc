use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    app::PrintArguments,
    feed::FeedTables,
    output::{console_sink, csv_sink},
    timetable::{timetable_ops, TimetableError},
};

/// Command line tool that turns a GTFS rail feed into a timetable for a
/// route and a handful of stops
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TimetableApp {
    /// log verbosity: -v for progress, -vv for detail. RUST_LOG takes
    /// precedence when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub op: TimetableOperation,
}

impl TimetableApp {
    /// default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TimetableOperation {
    /// print the route names and stop names found in a feed
    List {
        /// directory holding the GTFS text files
        #[arg(short, long)]
        feed_directory: String,
    },
    /// build the timetables of a route and print them or save them as CSV
    Print(PrintArguments),
}

impl TimetableOperation {
    pub fn run(&self) -> Result<(), TimetableError> {
        match self {
            TimetableOperation::List { feed_directory } => {
                let feed = FeedTables::read(std::path::Path::new(feed_directory))?;
                println!("{}", console_sink::render_list("Routes", &feed.route_names()));
                println!();
                println!("{}", console_sink::render_list("Stops", &feed.stop_names()));
                Ok(())
            }
            TimetableOperation::Print(args) => run_print(args),
        }
    }
}

fn run_print(args: &PrintArguments) -> Result<(), TimetableError> {
    if args.no_print && !args.csv {
        println!("Nothing to do: printing is disabled and CSV output was not requested");
        return Ok(());
    }
    let config = args.timetable_config()?;
    if config.route_names().is_empty() || config.stop_names().len() < 2 {
        println!("Nothing to do: give at least one route and at least two stops");
        return Ok(());
    }
    log::info!(
        "options: allow irregular {}, trip id column {}, max rows {:?}, aliases {:?}, virtual stops {:?}",
        config.allow_irregular,
        config.trip_id_column,
        config.max_rows,
        config.aliases,
        config.virtual_stops
    );

    let feed = FeedTables::read(args.feed_directory())?;
    let timetables = timetable_ops::build_timetables(&feed, &config)?;
    if args.csv {
        csv_sink::write_timetables(&timetables, &args.output_directory())?;
    }
    if !args.no_print {
        println!("{}", console_sink::render_timetables(&timetables));
    }
    log::info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    fn test_directory() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test")
    }

    fn print_arguments(app: TimetableApp) -> PrintArguments {
        match app.op {
            TimetableOperation::Print(args) => args,
            other => panic!("expected print operation, found {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        TimetableApp::command().debug_assert();
    }

    #[test]
    fn test_parse_print_arguments() {
        let app = TimetableApp::try_parse_from([
            "railtable", "-vv", "print", "-f", "feed", "-r", "DART", "-s", "Tara St", "-s",
            "Bray Daly", "-a", "Tara St", "Tara", "--virtual-stop", "Desk", "Tara St", "-9",
            "--date", "20240304", "--max-rows", "3", "--csv",
        ])
        .unwrap();
        assert_eq!(app.log_level(), "debug");
        let args = print_arguments(app);
        let config = args.timetable_config().unwrap();
        assert_eq!(config.routes, vec!["DART"]);
        assert_eq!(config.stops, vec!["Tara St", "Bray Daly"]);
        assert_eq!(config.aliases[0].alias, "Tara");
        assert_eq!(config.virtual_stops[0].offset_minutes, -9);
        assert_eq!(config.reference_date, chrono::NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(config.max_rows, Some(3));
        assert!(args.csv && !args.no_print);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = TimetableApp::try_parse_from([
            "railtable", "print", "-f", "feed", "--date", "2024-03-04",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_virtual_stop_offset() {
        let app = TimetableApp::try_parse_from([
            "railtable", "print", "-f", "feed", "--virtual-stop", "Desk", "Tara St", "ten",
        ])
        .unwrap();
        let result = print_arguments(app).timetable_config();
        assert!(matches!(result, Err(TimetableError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_arguments_extend_configuration_file() {
        let config_file = test_directory().join("dart_config.toml");
        let app = TimetableApp::try_parse_from([
            "railtable",
            "print",
            "-f",
            "feed",
            "-c",
            config_file.to_str().unwrap(),
            "-s",
            "Bray Daly",
            "--max-rows",
            "0",
            "--allow-irregular",
        ])
        .unwrap();
        let config = print_arguments(app).timetable_config().unwrap();
        assert_eq!(config.stops.len(), 4);
        assert_eq!(config.max_rows, Some(0));
        assert!(config.allow_irregular);
        assert_eq!(config.aliases.len(), 1);
    }

    #[test]
    fn test_print_with_nothing_to_do_succeeds() {
        let app = TimetableApp::try_parse_from([
            "railtable", "print", "-f", "does_not_exist", "--no-print",
        ])
        .unwrap();
        assert_eq!(app.log_level(), "error");
        assert!(app.op.run().is_ok());

        let app = TimetableApp::try_parse_from([
            "railtable", "print", "-f", "does_not_exist", "-r", "DART", "-s", "Tara St",
        ])
        .unwrap();
        assert!(app.op.run().is_ok());
    }

    #[test]
    fn test_print_fixture_to_csv() {
        let feed = test_directory().join("dart");
        let output = std::env::temp_dir().join(format!("railtable_app_{}", std::process::id()));
        let app = TimetableApp::try_parse_from([
            "railtable",
            "print",
            "-f",
            feed.to_str().unwrap(),
            "-c",
            test_directory().join("dart_config.toml").to_str().unwrap(),
            "--no-print",
            "--csv",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        app.op.run().unwrap();
        let north = std::fs::read_to_string(output.join("DART_NORTH_20240304.csv")).unwrap();
        assert!(north.starts_with("Days,Origin,Grand Canal Dock,Tara St,Home,Howth Jct,Destination\n"));
        assert!(output.join("DART_SOUTH_20240304.csv").exists());
        std::fs::remove_dir_all(&output).unwrap();
    }
}
