//! cronrule — five-field cron expressions for recurring rules.
//!
//! Parse cron text into a structured [`CronExpression`], render it back, and
//! lazily enumerate the calendar minutes it matches. Date-times are naive
//! civil values ([`jiff::civil::DateTime`]); there is no time zone handling.
//!
//! # Examples
//!
//! ```
//! use cronrule::CronExpression;
//! use jiff::civil::date;
//!
//! let expr: CronExpression = "30 10 * * mon".parse().unwrap();
//! assert_eq!(expr.to_string(), "30 10 * * 1");
//!
//! let start = date(2024, 1, 1).at(0, 0, 0, 0);
//! let end = date(2024, 1, 15).at(23, 59, 0, 0);
//! let mondays: Vec<_> = expr.between(start, end).collect();
//! assert_eq!(mondays.len(), 3);
//! ```

pub mod alias;
pub mod ast;
pub mod builder;
pub mod display;
pub mod error;
pub mod eval;
pub mod field;
pub mod parser;

pub use ast::{CronExpression, CronValue};
pub use builder::{build_rule, Cadence};
pub use display::encode;
pub use error::CronError;
pub use eval::{generate, Occurrences};
pub use field::Field;
pub use parser::parse_cron_expression as parse;

use jiff::civil::DateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- CronExpression convenience methods ---

impl CronExpression {
    /// Parse a five-field cron expression.
    pub fn parse(input: &str) -> Result<Self, CronError> {
        parser::parse_cron_expression(input)
    }

    /// Render back to cron text.
    pub fn encode(&self) -> String {
        display::encode(self)
    }

    /// Build a rule that repeats at `cadence`, anchored at `anchor`.
    pub fn from_cadence(cadence: Cadence, anchor: DateTime) -> Self {
        builder::build_rule(cadence, anchor)
    }

    /// Occurrences from `start` (inclusive) up to the optional inclusive `end`.
    pub fn generate(&self, start: DateTime, end: Option<DateTime>) -> Occurrences {
        eval::generate(self, start, end)
    }

    /// Unbounded occurrences from `start` (inclusive).
    pub fn occurrences(&self, start: DateTime) -> Occurrences {
        eval::generate(self, start, None)
    }

    /// Occurrences in the range `[from, to]`.
    pub fn between(&self, from: DateTime, to: DateTime) -> Occurrences {
        eval::between(self, from, to)
    }

    /// Compute the next occurrence strictly after `now`.
    pub fn next_after(&self, now: DateTime) -> Option<DateTime> {
        eval::next_after(self, now)
    }

    /// Compute up to `n` occurrences strictly after `now`.
    pub fn next_n_after(&self, now: DateTime, n: usize) -> Vec<DateTime> {
        eval::next_n_after(self, now, n)
    }

    /// Check if a datetime matches this expression, ignoring seconds.
    pub fn matches(&self, datetime: DateTime) -> bool {
        eval::matches(self, datetime)
    }

    /// Check whether `input` parses, without keeping the result.
    pub fn validate(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Expressions are stored as their cron text.
#[cfg(feature = "serde")]
impl Serialize for CronExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CronExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CronExpression::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Structured JSON view of an expression: one tagged value per field.
#[cfg(feature = "serde")]
pub fn to_json(expr: &CronExpression) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = expr
        .fields()
        .map(|(field, value)| {
            let value = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
            (field.as_str().replace('-', "_"), value)
        })
        .collect();
    serde_json::json!({
        "expression": expr.to_string(),
        "fields": fields,
    })
}
