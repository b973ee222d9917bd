// crates/ports/src/store.rs
use std::{io, path::Path};

/// Port for whole-file UTF-8 text access.
pub trait TextStore {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// Replace the whole content of `path`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
