mod print_arguments;
mod timetable_app;

pub use print_arguments::PrintArguments;
pub use timetable_app::{TimetableApp, TimetableOperation};
