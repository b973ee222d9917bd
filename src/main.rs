use clap::Parser;
use fw_version_stamp::args::Args;
use fw_version_stamp::config::RunConfig;
use fw_version_stamp::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = RunConfig::from(args);
    logging::init(config.verbosity);

    match app::run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        // Reported failures only fail the process under --strict.
        Ok(false) if config.strict => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
