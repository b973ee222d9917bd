// src/config.rs
use crate::args::Args;
use derive_builder::Builder;
use fw_version_stamp_shared_kernel::BuildDate;
use std::path::PathBuf;

/// How the tool was invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Run by hand: project root is the working directory, no stage banners.
    #[default]
    Standalone,
    /// Run by a build orchestrator as a pre-build hook.
    Hosted,
}

/// Resolved run configuration.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
#[allow(clippy::struct_excessive_bools)]
pub struct RunConfig {
    #[builder(default)]
    pub mode: Mode,
    /// Explicit project root; wins over the caller environment and the working directory.
    #[builder(default)]
    pub project_dir: Option<PathBuf>,
    /// Fixed build date; `None` reads the local clock.
    #[builder(default)]
    pub date: Option<BuildDate>,
    #[builder(default)]
    pub dry_run: bool,
    /// Turn a failed stamp into a failing exit status.
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub verbosity: u8,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let mode = if args.hosted { Mode::Hosted } else { Mode::Standalone };

        RunConfigBuilder::default()
            .mode(mode)
            .project_dir(args.project_dir)
            .date(args.date.map(|d| d.0))
            .dry_run(args.dry_run)
            .strict(args.strict)
            .verbosity(args.verbose)
            .build()
            .expect("Failed to build config")
    }
}
