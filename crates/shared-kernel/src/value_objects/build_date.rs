// crates/shared-kernel/src/value_objects/build_date.rs
use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::StampError;

/// Calendar date of a build, rendered as `YYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildDate(NaiveDate);

impl BuildDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BuildDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%y%m%d"))
    }
}

/// Accepts the six-digit `YYMMDD` form (years 2000-2099) or ISO `YYYY-MM-DD`.
impl FromStr for BuildDate {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || StampError::InvalidDate { input: s.to_string() };

        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            let field = |range: std::ops::Range<usize>| s[range].parse::<u32>().map_err(|_| invalid());
            let year = 2000 + i32::try_from(field(0..2)?).map_err(|_| invalid())?;
            return Self::from_ymd(year, field(2..4)?, field(4..6)?).ok_or_else(invalid);
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self).map_err(|_| invalid())
    }
}
