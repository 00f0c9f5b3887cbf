use std::io;
use std::process::ExitCode;

use train_finder::cli;
use train_finder::finder::{FinderConfig, TrainFinder};
use train_finder::logger::init_logger;

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    // Timetable is read from ./data.json
    let config = FinderConfig::default();
    let finder = TrainFinder::from_config(&config);

    match cli::run(&finder, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
