// crates/ports/src/environment.rs
use std::path::PathBuf;

/// Narrow view of the environment a build orchestrator hands to a pre-build hook.
pub trait CallerEnvironment {
    /// Project root as reported by the caller, if it reported one.
    fn project_directory(&self) -> Option<PathBuf>;
}
