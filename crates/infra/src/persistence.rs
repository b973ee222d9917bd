// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;

use std::{io, path::Path};

use fw_version_stamp_ports::TextStore;
use tracing::trace;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;

/// [`TextStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        trace!(path = %path.display(), "reading text file");
        FileReader::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        trace!(path = %path.display(), bytes = contents.len(), "writing text file");
        FileWriter::write_in_place(path, contents.as_bytes())
    }
}
