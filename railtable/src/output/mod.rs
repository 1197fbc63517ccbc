//! sinks that consume finished timetables: CSV files and console tables.
pub mod console_sink;
pub mod csv_sink;
