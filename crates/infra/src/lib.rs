// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod environment;
pub mod persistence;

pub use clock::{FixedClock, SystemClock};
pub use environment::ProcessEnvironment;
pub use persistence::FsTextStore;
