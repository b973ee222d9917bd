// crates/infra/src/environment.rs
use std::{ffi::OsString, path::PathBuf};

use fw_version_stamp_ports::CallerEnvironment;

/// Variable a hosting build tool uses to pass the project root.
const PROJECT_DIR_KEY: &str = "PROJECT_DIR";

/// Adapter over the process environment. Unset and empty values are both
/// treated as "not provided".
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    fn project_dir_from(value: Option<OsString>) -> Option<PathBuf> {
        value.filter(|v| !v.is_empty()).map(PathBuf::from)
    }
}

impl CallerEnvironment for ProcessEnvironment {
    fn project_directory(&self) -> Option<PathBuf> {
        Self::project_dir_from(std::env::var_os(PROJECT_DIR_KEY))
    }
}
