use std::iter::FusedIterator;

use jiff::civil::{Date, DateTime};
use jiff::Span;
use tracing::debug;

use crate::ast::{CronExpression, CronValue};
use crate::field::Field;

/// How many years past the cursor a search may run before the expression is
/// considered unsatisfiable. The Gregorian calendar repeats every 400 years,
/// so nothing found in that window is ever found.
const SEARCH_HORIZON_YEARS: i16 = 400;

/// The concrete values accepted by one field, as a bitmask over `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValueSet(u64);

impl ValueSet {
    /// Expand a field value over the field's domain. Values outside the
    /// domain (only reachable through direct construction) are dropped.
    pub(crate) fn expand(value: &CronValue, field: Field) -> Self {
        let (min, max) = (field.min(), field.max());
        match value {
            CronValue::Number { value } => Self::from_values([*value], field),
            CronValue::Wildcard => Self::from_values(min..=max, field),
            CronValue::Step { step } => Self::progression(min, max, *step, field),
            CronValue::StepFrom { from, step } => Self::progression(*from, max, *step, field),
            CronValue::StepRange { from, to, step } => {
                Self::progression(*from, *to, *step, field)
            }
            CronValue::Range { from, to } => Self::from_values(*from..=*to, field),
            CronValue::List { values } => Self::from_values(values.iter().copied(), field),
        }
    }

    fn progression(from: u8, to: u8, step: u8, field: Field) -> Self {
        // A zero step denotes no values at all.
        if step == 0 {
            return Self(0);
        }
        Self::from_values((from..=to).step_by(usize::from(step)), field)
    }

    fn from_values(values: impl IntoIterator<Item = u8>, field: Field) -> Self {
        let domain = field.min()..=field.max();
        let bits = values
            .into_iter()
            .filter(|v| domain.contains(v))
            .fold(0u64, |bits, v| bits | (1 << v));
        Self(bits)
    }

    pub(crate) fn contains(self, value: u8) -> bool {
        value < 64 && (self.0 & (1 << value)) != 0
    }

    /// Smallest member that is `>= value`.
    pub(crate) fn next_from(self, value: u8) -> Option<u8> {
        if value >= 64 {
            return None;
        }
        let rest = self.0 & (u64::MAX << value);
        (rest != 0).then(|| rest.trailing_zeros() as u8)
    }

    pub(crate) fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// An expression with every field expanded, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Matcher {
    minutes: ValueSet,
    hours: ValueSet,
    days: ValueSet,
    months: ValueSet,
    weekdays: ValueSet,
}

impl Matcher {
    pub(crate) fn new(expr: &CronExpression) -> Self {
        Self {
            minutes: ValueSet::expand(&expr.minute, Field::Minute),
            hours: ValueSet::expand(&expr.hour, Field::Hour),
            days: ValueSet::expand(&expr.day_of_month, Field::DayOfMonth),
            months: ValueSet::expand(&expr.month, Field::Month),
            weekdays: ValueSet::expand(&expr.day_of_week, Field::DayOfWeek),
        }
    }

    fn has_empty_field(&self) -> bool {
        [
            self.minutes,
            self.hours,
            self.days,
            self.months,
            self.weekdays,
        ]
        .iter()
        .any(|set| set.is_empty())
    }

    /// Check all five fields. Day-of-month and day-of-week must both match.
    pub(crate) fn matches(&self, dt: DateTime) -> bool {
        self.months.contains(dt.month() as u8)
            && self.days.contains(dt.day() as u8)
            && self
                .weekdays
                .contains(dt.weekday().to_sunday_zero_offset() as u8)
            && self.hours.contains(dt.hour() as u8)
            && self.minutes.contains(dt.minute() as u8)
    }

    /// First matching minute at or after `from`, searching no later than the
    /// year `limit` (and never past the search horizon).
    ///
    /// Works coarse to fine: a mismatch in a field jumps straight to that
    /// field's next accepted value and resets every finer field; running off
    /// the end of a field carries into the next coarser one.
    pub(crate) fn first_at_or_after(
        &self,
        from: DateTime,
        limit: Option<i16>,
    ) -> Option<DateTime> {
        if self.has_empty_field() {
            return None;
        }

        let mut year = from.year();
        let mut month = from.month() as u8;
        let mut day = from.day() as u8;
        let mut hour = from.hour() as u8;
        let mut minute = from.minute() as u8;

        let horizon = year.saturating_add(SEARCH_HORIZON_YEARS);
        let last_year = limit.map_or(horizon, |limit| limit.min(horizon));

        loop {
            if year > last_year {
                if last_year == horizon {
                    debug!(%from, "cron: no occurrence within search horizon");
                }
                return None;
            }

            let Some(m) = self.months.next_from(month) else {
                year = year.checked_add(1)?;
                (month, day, hour, minute) = (1, 1, 0, 0);
                continue;
            };
            if m != month {
                (month, day, hour, minute) = (m, 1, 0, 0);
            }

            // Fails only past the end of the supported calendar.
            let first_of_month = Date::new(year, month as i8, 1).ok()?;
            let Some(d) = self.first_day(first_of_month, day) else {
                month += 1;
                (day, hour, minute) = (1, 0, 0);
                continue;
            };
            if d != day {
                (day, hour, minute) = (d, 0, 0);
            }

            let Some(h) = self.hours.next_from(hour) else {
                day += 1;
                (hour, minute) = (0, 0);
                continue;
            };
            if h != hour {
                (hour, minute) = (h, 0);
            }

            let Some(mi) = self.minutes.next_from(minute) else {
                hour += 1;
                minute = 0;
                continue;
            };

            let date = Date::new(year, month as i8, day as i8).ok()?;
            return Some(date.at(hour as i8, mi as i8, 0, 0));
        }
    }

    /// First day `>= from_day` in the month starting at `first_of_month` that
    /// exists in that month and matches both day fields.
    fn first_day(&self, first_of_month: Date, from_day: u8) -> Option<u8> {
        let last = first_of_month.days_in_month() as u8;
        let first_weekday = first_of_month.weekday().to_sunday_zero_offset() as u8;
        let mut day = from_day;
        while let Some(d) = self.days.next_from(day) {
            if d > last {
                return None;
            }
            if self.weekdays.contains((first_weekday + d - 1) % 7) {
                return Some(d);
            }
            day = d + 1;
        }
        None
    }
}

/// Lazy, ascending iterator over the minutes matched by an expression.
///
/// Created by [`generate`]. The start bound is inclusive after truncation to
/// the minute, the end bound (if any) is inclusive. Without an end bound the
/// sequence only ends if the expression can never match again.
#[derive(Debug, Clone)]
pub struct Occurrences {
    matcher: Matcher,
    cursor: Option<DateTime>,
    end: Option<DateTime>,
}

impl Occurrences {
    /// Create a new iterator starting at `start`.
    pub fn new(expr: &CronExpression, start: DateTime, end: Option<DateTime>) -> Self {
        Self {
            matcher: Matcher::new(expr),
            cursor: Some(truncate_to_minute(start)),
            end,
        }
    }

    /// The inclusive end bound, if any.
    pub fn end(&self) -> Option<DateTime> {
        self.end
    }
}

impl Iterator for Occurrences {
    type Item = DateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.cursor.take()?;
        let found = self
            .matcher
            .first_at_or_after(from, self.end.map(|end| end.year()))?;
        if self.end.is_some_and(|end| found > end) {
            return None;
        }
        // Advance cursor by 1 minute so the same occurrence is never returned twice
        self.cursor = found.checked_add(Span::new().minutes(1)).ok();
        Some(found)
    }
}

impl FusedIterator for Occurrences {}

/// Lazily produce every matching minute from `start` up to and including `end`.
pub fn generate(expr: &CronExpression, start: DateTime, end: Option<DateTime>) -> Occurrences {
    Occurrences::new(expr, start, end)
}

/// Create a bounded iterator of occurrences in the range `[from, to]`.
pub fn between(expr: &CronExpression, from: DateTime, to: DateTime) -> Occurrences {
    Occurrences::new(expr, from, Some(to))
}

/// Check if a datetime (truncated to the minute) matches the expression.
pub fn matches(expr: &CronExpression, datetime: DateTime) -> bool {
    Matcher::new(expr).matches(datetime)
}

/// First occurrence strictly after `now`.
pub fn next_after(expr: &CronExpression, now: DateTime) -> Option<DateTime> {
    let start = truncate_to_minute(now)
        .checked_add(Span::new().minutes(1))
        .ok()?;
    Occurrences::new(expr, start, None).next()
}

/// Compute up to `n` occurrences strictly after `now`.
pub fn next_n_after(expr: &CronExpression, now: DateTime, n: usize) -> Vec<DateTime> {
    match truncate_to_minute(now).checked_add(Span::new().minutes(1)) {
        Ok(start) => Occurrences::new(expr, start, None).take(n).collect(),
        Err(_) => Vec::new(),
    }
}

fn truncate_to_minute(dt: DateTime) -> DateTime {
    dt.date().at(dt.hour(), dt.minute(), 0, 0)
}
