// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StampError {
    #[error("config file '{path}' not found")]
    MissingFile {
        path: PathBuf,
        working_dir: PathBuf,
        project_root: PathBuf,
    },

    #[error("no FIRMWARE_VERSION declaration matching the version template in '{path}'")]
    PatternMismatch { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build date '{input}': expected YYMMDD or YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Invalid firmware version '{input}': expected MCU.HW_VARIANT.RELEASE_TYPE.BUILD_DATE")]
    InvalidVersion { input: String },
}

pub type Result<T> = std::result::Result<T, StampError>;
