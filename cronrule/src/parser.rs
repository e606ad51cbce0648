use std::collections::BTreeSet;

use tracing::debug;

use crate::ast::{CronExpression, CronValue};
use crate::error::{CronError, Span};
use crate::field::{validate_cron_value, Field};

/// Parse a full five-field cron expression.
///
/// Fields are separated by any run of whitespace. The first field that fails
/// to parse is reported; no partial expression is ever returned.
pub fn parse_cron_expression(input: &str) -> Result<CronExpression, CronError> {
    let tokens = tokenize(input);
    if tokens.len() != Field::ALL.len() {
        debug!(input, found = tokens.len(), "cron: wrong field count");
        return Err(CronError::field_count(tokens.len(), input));
    }

    let parse_field = |field: Field| {
        let (span, token) = tokens[field_index(field)];
        parse_cron_value(token, field.min(), field.max()).map_err(|e| {
            debug!(input, %field, token, "cron: invalid field");
            CronError::field(field, token, span, input, e.to_string())
        })
    };

    Ok(CronExpression {
        minute: parse_field(Field::Minute)?,
        hour: parse_field(Field::Hour)?,
        day_of_month: parse_field(Field::DayOfMonth)?,
        month: parse_field(Field::Month)?,
        day_of_week: parse_field(Field::DayOfWeek)?,
    })
}

/// Parse the text of a single field against the domain `[min, max]`.
///
/// Shapes are tried in a fixed order: `*`, anything containing `/`, anything
/// containing `-`, anything containing `,`, then a bare value. Bare values
/// (including each range bound and list entry) may be weekday or month names.
pub fn parse_cron_value(raw: &str, min: u8, max: u8) -> Result<CronValue, CronError> {
    if raw == "*" {
        return Ok(CronValue::Wildcard);
    }

    if let Some((base, step)) = raw.split_once('/') {
        let step = parse_step(raw, step, max)?;
        if base == "*" {
            return Ok(CronValue::Step { step });
        }
        let from = require_value(raw, base, min, max)?;
        return Ok(CronValue::StepFrom { from, step });
    }

    if let Some((from, to)) = raw.split_once('-') {
        let from = require_value(raw, from, min, max)?;
        let to = require_value(raw, to, min, max)?;
        if from > to {
            return Err(CronError::value(format!(
                "range start must be <= end in '{raw}'"
            )));
        }
        return Ok(CronValue::Range { from, to });
    }

    if raw.contains(',') {
        let values = raw
            .split(',')
            .map(|token| require_value(raw, token, min, max))
            .collect::<Result<BTreeSet<u8>, _>>()?;
        // A list that repeats one value renders as that value alone.
        if let (1, Some(&value)) = (values.len(), values.first()) {
            return Ok(CronValue::Number { value });
        }
        return Ok(CronValue::List { values });
    }

    Ok(CronValue::Number {
        value: require_value(raw, raw, min, max)?,
    })
}

fn require_value(raw: &str, token: &str, min: u8, max: u8) -> Result<u8, CronError> {
    validate_cron_value(token, min, max).ok_or_else(|| {
        if token == raw {
            CronError::value(format!("'{token}' is not a value in {min}-{max}"))
        } else {
            CronError::value(format!(
                "'{token}' in '{raw}' is not a value in {min}-{max}"
            ))
        }
    })
}

/// A step must be a plain positive integer no larger than the field maximum.
fn parse_step(raw: &str, step: &str, max: u8) -> Result<u8, CronError> {
    let invalid = || {
        CronError::value(format!(
            "invalid step '{step}' in '{raw}', expected 1-{max}"
        ))
    };
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match step.parse::<u8>() {
        Ok(n) if n >= 1 && n <= max => Ok(n),
        _ => Err(invalid()),
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Minute => 0,
        Field::Hour => 1,
        Field::DayOfMonth => 2,
        Field::Month => 3,
        Field::DayOfWeek => 4,
    }
}

/// Split on runs of whitespace, keeping each token's byte span.
fn tokenize(input: &str) -> Vec<(Span, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((Span::new(s, i), &input[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((Span::new(s, input.len()), &input[s..]));
    }
    tokens
}
