//! Recurrence rules built from a cadence instead of cron text.
//!
//! A cadence plus an anchor date-time (typically the first occurrence picked
//! in a form) becomes an expression made only of fixed numbers and
//! wildcards. Monthly rules anchored on the 29th-31st skip months that are
//! too short, the same as the equivalent cron text.

use std::fmt;
use std::str::FromStr;

use jiff::civil::DateTime;

use crate::ast::{CronExpression, CronValue};
use crate::error::CronError;

/// How often a rule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Cadence {
    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
            Cadence::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            "monthly" => Ok(Cadence::Monthly),
            "yearly" => Ok(Cadence::Yearly),
            _ => Err(CronError::rule(format!(
                "unknown cadence '{s}', expected daily, weekly, monthly or yearly"
            ))),
        }
    }
}

/// Build the expression for `cadence`, firing at the anchor's time of day.
pub fn build_rule(cadence: Cadence, anchor: DateTime) -> CronExpression {
    let minute = CronValue::number(anchor.minute() as u8);
    let hour = CronValue::number(anchor.hour() as u8);
    let day = CronValue::number(anchor.day() as u8);
    let month = CronValue::number(anchor.month() as u8);
    let weekday = CronValue::number(anchor.weekday().to_sunday_zero_offset() as u8);

    match cadence {
        Cadence::Daily => CronExpression::new(
            minute,
            hour,
            CronValue::Wildcard,
            CronValue::Wildcard,
            CronValue::Wildcard,
        ),
        Cadence::Weekly => CronExpression::new(
            minute,
            hour,
            CronValue::Wildcard,
            CronValue::Wildcard,
            weekday,
        ),
        Cadence::Monthly => {
            CronExpression::new(minute, hour, day, CronValue::Wildcard, CronValue::Wildcard)
        }
        Cadence::Yearly => CronExpression::new(minute, hour, day, month, CronValue::Wildcard),
    }
}
