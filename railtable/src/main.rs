use clap::Parser;
use railtable::{app::TimetableApp, timetable::TimetableError};

fn main() -> Result<(), TimetableError> {
    let args = TimetableApp::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();
    args.op.run()
}
