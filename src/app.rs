// src/app.rs
use crate::config::{Mode, RunConfig};
use crate::presentation;
use anyhow::{Context, Result};
use fw_version_stamp_infra::{FixedClock, FsTextStore, ProcessEnvironment, SystemClock};
use fw_version_stamp_ports::{CallerEnvironment, Clock};
use fw_version_stamp_usecase::{StampRequest, StampRequestBuilder, VersionStamper};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Pick the project root: an explicit directory first, then the caller's
/// environment, then the working directory.
pub fn resolve_project_root(
    explicit: Option<&Path>,
    env: Option<&dyn CallerEnvironment>,
    working_dir: &Path,
) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env.and_then(|e| e.project_directory()))
        .unwrap_or_else(|| working_dir.to_path_buf())
}

/// Run one stamp and print its status lines. Failures are reported, never raised.
pub fn stamp_with(out: &mut dyn Write, stamper: &VersionStamper<'_>, request: &StampRequest) -> bool {
    let outcome = stamper.stamp(request);
    if let Err(err) = &outcome {
        debug!(error = %err, "stamping failed");
    }
    if let Err(err) = presentation::print_outcome(out, &outcome) {
        warn!(error = %err, "failed to print stamping status");
    }
    outcome.is_ok()
}

/// Same as [`stamp_with`], wrapped in the pre-build stage banners. The banners
/// are printed whether or not stamping succeeds.
pub fn stamp_hosted_with(
    out: &mut dyn Write,
    stamper: &VersionStamper<'_>,
    request: &StampRequest,
) -> bool {
    if let Err(err) = presentation::print_stage_start(out) {
        warn!(error = %err, "failed to print stage banner");
    }
    let ok = stamp_with(out, stamper, request);
    if let Err(err) = presentation::print_stage_end(out) {
        warn!(error = %err, "failed to print stage banner");
    }
    ok
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn request_for(project_root: PathBuf, working_dir: PathBuf, dry_run: bool) -> StampRequest {
    StampRequest { project_root, working_dir, dry_run }
}

/// Stamp today's date into `<project_root>/include/config.h`, defaulting to the
/// working directory. Returns `false` on any failure after printing why.
pub fn stamp(project_root: Option<&Path>) -> bool {
    let working_dir = working_dir();
    let project_root = resolve_project_root(project_root, None, &working_dir);
    let stamper = VersionStamper::new(&FsTextStore, &SystemClock);
    stamp_with(&mut io::stdout().lock(), &stamper, &request_for(project_root, working_dir, false))
}

/// Pre-build hook entry point: project root from `env`, stage banners around the stamp.
/// The stamp result is deliberately not propagated.
pub fn run_hosted(env: Option<&dyn CallerEnvironment>) {
    let working_dir = working_dir();
    let project_root = resolve_project_root(None, env, &working_dir);
    let stamper = VersionStamper::new(&FsTextStore, &SystemClock);
    stamp_hosted_with(
        &mut io::stdout().lock(),
        &stamper,
        &request_for(project_root, working_dir, false),
    );
}

/// Standalone entry point: stamp the working directory's project.
pub fn run_standalone() {
    stamp(None);
}

/// Command-line driver. `Ok(false)` means stamping failed and was reported.
///
/// # Errors
///
/// Returns an error when the working directory cannot be determined.
pub fn run(config: &RunConfig) -> Result<bool> {
    let working_dir = std::env::current_dir().context("failed to determine the working directory")?;

    let clock: Box<dyn Clock> = match config.date {
        Some(date) => Box::new(FixedClock::from(date)),
        None => Box::new(SystemClock),
    };
    let env = ProcessEnvironment;
    let caller: Option<&dyn CallerEnvironment> = match config.mode {
        Mode::Hosted => Some(&env as &dyn CallerEnvironment),
        Mode::Standalone => None,
    };
    let project_root = resolve_project_root(config.project_dir.as_deref(), caller, &working_dir);
    debug!(project_root = %project_root.display(), mode = ?config.mode, "resolved project root");

    let request = StampRequestBuilder::default()
        .project_root(project_root)
        .working_dir(working_dir)
        .dry_run(config.dry_run)
        .build()?;

    let stamper = VersionStamper::new(&FsTextStore, clock.as_ref());
    let mut out = io::stdout().lock();
    let ok = match config.mode {
        Mode::Hosted => stamp_hosted_with(&mut out, &stamper, &request),
        Mode::Standalone => stamp_with(&mut out, &stamper, &request),
    };
    Ok(ok)
}
