// crates/ports/src/clock.rs
use chrono::NaiveDate;

/// Port for reading the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
