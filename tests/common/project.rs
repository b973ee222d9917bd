use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Header from the stamping scenario, before stamping.
#[allow(dead_code)]
pub const SCENARIO_INPUT: &str = "#define FIRMWARE_VERSION \"1.A0.3.251201\"\n#define OTHER 5\n";
/// The same header after stamping on 2025-12-06.
#[allow(dead_code)]
pub const SCENARIO_OUTPUT: &str = "#define FIRMWARE_VERSION \"1.A0.3.251206\"\n#define OTHER 5\n";

/// Temporary firmware project with an optional `include/config.h`.
#[derive(Debug)]
pub struct FirmwareProject {
    dir: TempDir,
}

#[allow(dead_code)]
impl FirmwareProject {
    /// A project directory without a config header.
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// A project whose `include/config.h` holds `contents`.
    pub fn with_config(contents: &str) -> Self {
        let project = Self::empty();
        let path = project.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("include").join("config.h")
    }

    pub fn config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap()
    }
}
