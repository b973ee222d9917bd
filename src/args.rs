// src/args.rs
use crate::parsers::DateArg;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fw_version_stamp",
    version,
    about = "Stamp today's date into the FIRMWARE_VERSION declaration of include/config.h"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Project root containing include/config.h (overrides PROJECT_DIR and the working directory)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Run as a pre-build hook: take the project root from PROJECT_DIR and print stage banners
    #[arg(long)]
    pub hosted: bool,

    /// Stamp this date instead of today's (YYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<DateArg>,

    /// Show the new version without writing config.h
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit with a non-zero status when stamping fails
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
