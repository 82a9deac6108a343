use crate::count::Count;
use crate::error::{Result, TimesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Width
// ---------------------------------------------------------------------------

/// Bit width of a signed integer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Width {
    #[serde(rename = "i8")]
    I8,
    #[serde(rename = "i16")]
    I16,
    #[serde(rename = "i32")]
    I32,
    #[serde(rename = "i64")]
    I64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::I8, Width::I16, Width::I32, Width::I64];

    pub fn bits(self) -> u32 {
        match self {
            Width::I8 => i8::BITS,
            Width::I16 => i16::BITS,
            Width::I32 => i32::BITS,
            Width::I64 => i64::BITS,
        }
    }

    pub fn min(self) -> i64 {
        match self {
            Width::I8 => <i8 as Count>::MIN.to_i64(),
            Width::I16 => <i16 as Count>::MIN.to_i64(),
            Width::I32 => <i32 as Count>::MIN.to_i64(),
            Width::I64 => <i64 as Count>::MIN.to_i64(),
        }
    }

    pub fn max(self) -> i64 {
        match self {
            Width::I8 => <i8 as Count>::MAX.to_i64(),
            Width::I16 => <i16 as Count>::MAX.to_i64(),
            Width::I32 => <i32 as Count>::MAX.to_i64(),
            Width::I64 => <i64 as Count>::MAX.to_i64(),
        }
    }

    pub fn contains(self, value: i64) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Parse `raw` as a count of this width.
    pub fn parse_count(self, raw: &str) -> Result<i64> {
        let out_of_range = || TimesError::CountOutOfRange {
            width: self,
            value: raw.to_string(),
        };
        let value: i64 = raw.trim().parse().map_err(|_| out_of_range())?;
        if !self.contains(value) {
            return Err(out_of_range());
        }
        Ok(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Width::I8 => "i8",
            Width::I16 => "i16",
            Width::I32 => "i32",
            Width::I64 => "i64",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Width {
    type Err = TimesError;

    /// Accepts `i8` style names as well as bare bit counts (`8`, `16`, ...).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i8" | "8" => Ok(Width::I8),
            "i16" | "16" => Ok(Width::I16),
            "i32" | "32" => Ok(Width::I32),
            "i64" | "64" => Ok(Width::I64),
            _ => Err(TimesError::UnknownWidth(s.to_string())),
        }
    }
}
