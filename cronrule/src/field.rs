use std::fmt;

use crate::alias::map_alias;

/// One of the five positions of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// Fields in the order they appear in cron text.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Smallest legal value.
    pub fn min(self) -> u8 {
        match self {
            Field::Minute | Field::Hour | Field::DayOfWeek => 0,
            Field::DayOfMonth | Field::Month => 1,
        }
    }

    /// Largest legal value.
    pub fn max(self) -> u8 {
        match self {
            Field::Minute => 59,
            Field::Hour => 23,
            Field::DayOfMonth => 31,
            Field::Month => 12,
            Field::DayOfWeek => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Resolve aliases in `token` and parse it as an integer within `[min, max]`.
///
/// Returns `None` for anything else: non-digits, signs, empty text, or a
/// number outside the range.
pub fn validate_cron_value(token: &str, min: u8, max: u8) -> Option<u8> {
    let resolved = map_alias(token);
    if resolved.is_empty() || !resolved.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = resolved.parse().ok()?;
    (u32::from(min)..=u32::from(max))
        .contains(&n)
        .then_some(n as u8)
}
