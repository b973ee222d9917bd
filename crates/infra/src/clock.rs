// crates/infra/src/clock.rs
use chrono::{Local, NaiveDate};
use fw_version_stamp_ports::Clock;
use fw_version_stamp_shared_kernel::BuildDate;

/// Reads the process's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day; backs `--date`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<BuildDate> for FixedClock {
    fn from(date: BuildDate) -> Self {
        Self::new(date.as_naive())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
