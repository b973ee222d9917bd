// crates/shared-kernel/src/value_objects/firmware_version.rs
use std::{fmt, str::FromStr};

use crate::{BuildDate, StampError};

/// The three leading fields of a firmware version: `MCU.HW_VARIANT.RELEASE_TYPE`.
///
/// Fields keep the exact text they were read from so a rewrite reproduces them
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionPrefix {
    mcu: String,
    hw_variant: String,
    release_type: String,
}

impl VersionPrefix {
    /// Builds a prefix after checking each field against the template
    /// (digit, uppercase letter + digit, digit).
    pub fn new(mcu: &str, hw_variant: &str, release_type: &str) -> Result<Self, StampError> {
        let single_digit = |s: &str| s.len() == 1 && s.bytes().all(|b| b.is_ascii_digit());
        let variant = |s: &str| {
            let b = s.as_bytes();
            b.len() == 2 && b[0].is_ascii_uppercase() && b[1].is_ascii_digit()
        };

        if single_digit(mcu) && variant(hw_variant) && single_digit(release_type) {
            Ok(Self {
                mcu: mcu.to_string(),
                hw_variant: hw_variant.to_string(),
                release_type: release_type.to_string(),
            })
        } else {
            Err(StampError::InvalidVersion { input: format!("{mcu}.{hw_variant}.{release_type}") })
        }
    }

    pub fn mcu(&self) -> &str {
        &self.mcu
    }

    pub fn hw_variant(&self) -> &str {
        &self.hw_variant
    }

    pub fn release_type(&self) -> &str {
        &self.release_type
    }

    pub fn with_build_date(self, build_date: BuildDate) -> FirmwareVersion {
        FirmwareVersion { prefix: self, build_date }
    }
}

impl fmt::Display for VersionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.mcu, self.hw_variant, self.release_type)
    }
}

/// Complete firmware version `MCU.HW_VARIANT.RELEASE_TYPE.BUILD_DATE`, e.g. `1.A0.3.251206`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FirmwareVersion {
    prefix: VersionPrefix,
    build_date: BuildDate,
}

impl FirmwareVersion {
    pub fn prefix(&self) -> &VersionPrefix {
        &self.prefix
    }

    pub fn build_date(&self) -> BuildDate {
        self.build_date
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.build_date)
    }
}

impl FromStr for FirmwareVersion {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StampError::InvalidVersion { input: s.to_string() };
        let parts: Vec<&str> = s.split('.').collect();
        let [mcu, hw_variant, release_type, date] = parts.as_slice() else {
            return Err(invalid());
        };
        if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let prefix = VersionPrefix::new(mcu, hw_variant, release_type).map_err(|_| invalid())?;
        let build_date: BuildDate = date.parse().map_err(|_| invalid())?;
        Ok(prefix.with_build_date(build_date))
    }
}
