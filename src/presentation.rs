// src/presentation.rs
use fw_version_stamp_shared_kernel::StampError;
use fw_version_stamp_usecase::StampReport;
use fw_version_stamp_usecase::declaration::{VERSION_EXAMPLE, VERSION_TEMPLATE};
use std::io::{self, Write};

pub const STAGE_START: &str = "[PRE-BUILD] Updating firmware version...";
pub const STAGE_END: &str = "[PRE-BUILD] Version ready for compilation";

pub fn print_stage_start(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{STAGE_START}")?;
    out.flush()
}

pub fn print_stage_end(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{STAGE_END}")?;
    out.flush()
}

/// Print the human-readable status lines for one stamping run.
pub fn print_outcome(
    out: &mut dyn Write,
    outcome: &Result<StampReport, StampError>,
) -> io::Result<()> {
    match outcome {
        Ok(report) => print_report(out, report),
        Err(err) => print_error(out, err),
    }
}

fn print_report(out: &mut dyn Write, report: &StampReport) -> io::Result<()> {
    if report.written {
        writeln!(out, "✅ Firmware version updated: {}", report.version)
    } else {
        writeln!(
            out,
            "✅ Firmware version would be updated: {} -> {} (dry run, {} not written)",
            report.previous,
            report.version,
            report.config_path.display()
        )
    }
}

fn print_error(out: &mut dyn Write, err: &StampError) -> io::Result<()> {
    match err {
        StampError::MissingFile { path, working_dir, project_root } => {
            writeln!(out, "❌ File {} not found!", path.display())?;
            writeln!(out, "   Current directory: {}", working_dir.display())?;
            writeln!(out, "   Project directory: {}", project_root.display())
        }
        StampError::PatternMismatch { path } => {
            writeln!(out, "❌ Could not find FIRMWARE_VERSION in {}", path.display())?;
            writeln!(out, "   Expected version format: {VERSION_TEMPLATE}")?;
            writeln!(out, "   Example: {VERSION_EXAMPLE}")
        }
        other => writeln!(out, "❌ Failed to update firmware version: {other}"),
    }
}
