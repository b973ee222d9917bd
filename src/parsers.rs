// src/parsers.rs
use fw_version_stamp_shared_kernel::BuildDate;

/// Wrapper type to parse `--date` in either `YYMMDD` or `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArg(pub BuildDate);

impl std::str::FromStr for DateArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BuildDate>().map(Self).map_err(|e| e.to_string())
    }
}
