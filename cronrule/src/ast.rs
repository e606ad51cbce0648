use std::collections::BTreeSet;

use crate::field::Field;

/// A parsed five-field cron expression.
///
/// Every slot is always populated; there is no "seconds" field and no
/// notion of an omitted field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CronExpression {
    pub minute: CronValue,
    pub hour: CronValue,
    pub day_of_month: CronValue,
    pub month: CronValue,
    pub day_of_week: CronValue,
}

impl CronExpression {
    /// Assemble an expression from its five values, minute first.
    pub fn new(
        minute: CronValue,
        hour: CronValue,
        day_of_month: CronValue,
        month: CronValue,
        day_of_week: CronValue,
    ) -> Self {
        Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        }
    }

    /// The value in a given field.
    pub fn get(&self, field: Field) -> &CronValue {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Fields paired with their values, in cron text order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &CronValue)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// The values one field accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CronValue {
    /// `5`
    Number { value: u8 },
    /// `*`
    Wildcard,
    /// `*/15` — every `step`-th value starting at the field minimum.
    Step { step: u8 },
    /// `10/15` — every `step`-th value starting at `from`.
    StepFrom { from: u8, step: u8 },
    /// `10-40/15`. Never produced by the parser; only built directly.
    StepRange { from: u8, to: u8, step: u8 },
    /// `9-17`, inclusive.
    Range { from: u8, to: u8 },
    /// `1,15,30`
    List { values: BTreeSet<u8> },
}

impl CronValue {
    pub fn number(value: u8) -> Self {
        Self::Number { value }
    }

    pub fn range(from: u8, to: u8) -> Self {
        Self::Range { from, to }
    }

    pub fn list(values: impl IntoIterator<Item = u8>) -> Self {
        Self::List {
            values: values.into_iter().collect(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}
