// crates/usecase/src/stamper.rs
use std::path::{Path, PathBuf};

use fw_version_stamp_ports::{Clock, TextStore};
use fw_version_stamp_shared_kernel::{BuildDate, Result, StampError};
use tracing::{debug, info};

use crate::declaration;
use crate::dto::{StampReport, StampRequest};

/// Location of the configuration header, relative to the project root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join("include").join("config.h")
}

/// Rewrites the build-date field of the firmware version declaration.
pub struct VersionStamper<'a> {
    store: &'a dyn TextStore,
    clock: &'a dyn Clock,
}

impl<'a> VersionStamper<'a> {
    pub fn new(store: &'a dyn TextStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Stamp today's date into `<project_root>/include/config.h`.
    ///
    /// # Errors
    ///
    /// - [`StampError::MissingFile`] when the header does not exist (nothing is created).
    /// - [`StampError::PatternMismatch`] when no declaration follows the template
    ///   (the file is left untouched).
    /// - [`StampError::Read`] / [`StampError::Write`] for I/O failures.
    pub fn stamp(&self, request: &StampRequest) -> Result<StampReport> {
        let path = config_path(&request.project_root);
        debug!(path = %path.display(), dry_run = request.dry_run, "stamping firmware version");

        if !self.store.exists(&path) {
            return Err(StampError::MissingFile {
                path,
                working_dir: request.working_dir.clone(),
                project_root: request.project_root.clone(),
            });
        }

        let content = self
            .store
            .read_to_string(&path)
            .map_err(|source| StampError::Read { path: path.clone(), source })?;

        let Some(found) = declaration::find(&content) else {
            return Err(StampError::PatternMismatch { path });
        };
        let previous = found.value.to_string();

        let build_date = BuildDate::new(self.clock.today());
        let version = found.prefix.with_build_date(build_date);
        let updated = declaration::rewrite(&content, &version);
        let changed = updated != content;

        if !request.dry_run {
            self.store
                .write(&path, &updated)
                .map_err(|source| StampError::Write { path: path.clone(), source })?;
        }
        info!(%previous, %version, changed, written = !request.dry_run, "firmware version stamped");

        Ok(StampReport { config_path: path, previous, version, changed, written: !request.dry_run })
    }
}
