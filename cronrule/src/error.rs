use std::fmt;

use crate::field::Field;

/// Byte range within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// All errors produced by cronrule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CronError {
    /// The input did not split into exactly five whitespace-separated fields.
    FieldCount { found: usize, input: String },

    /// A single field's text could not be parsed against its domain.
    Value { message: String },

    /// A field of a full expression failed; wraps the value-level message.
    Field {
        field: Field,
        token: String,
        span: Span,
        input: String,
        message: String,
    },

    /// A rule could not be built from the given cadence or anchor.
    Rule { message: String },
}

impl fmt::Display for CronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found, .. } => {
                write!(f, "expected 5 cron fields, got {found}")
            }
            Self::Value { message } => write!(f, "{message}"),
            Self::Field {
                field,
                token,
                message,
                ..
            } => write!(
                f,
                "invalid {field} field '{token}' (accepted range {}-{}): {message}",
                field.min(),
                field.max()
            ),
            Self::Rule { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CronError {}

impl CronError {
    pub fn field_count(found: usize, input: impl Into<String>) -> Self {
        Self::FieldCount {
            found,
            input: input.into(),
        }
    }

    pub fn value(message: impl Into<String>) -> Self {
        Self::Value {
            message: message.into(),
        }
    }

    pub fn field(
        field: Field,
        token: impl Into<String>,
        span: Span,
        input: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Field {
            field,
            token: token.into(),
            span,
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule {
            message: message.into(),
        }
    }

    /// The field that failed, if the error is tied to one.
    pub fn failed_field(&self) -> Option<Field> {
        match self {
            Self::Field { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Format a rich error with the failing field underlined.
    pub fn display_rich(&self) -> String {
        match self {
            Self::Field { span, input, .. } => {
                format_span_error("error", &self.to_string(), span, input)
            }
            Self::FieldCount { input, .. } => {
                format!("error: {self}\n  {input}")
            }
            Self::Value { .. } | Self::Rule { .. } => format!("error: {self}"),
        }
    }
}

fn format_span_error(prefix: &str, message: &str, span: &Span, input: &str) -> String {
    let mut out = format!("{prefix}: {message}\n");
    out.push_str(&format!("  {input}\n"));
    let padding = " ".repeat(input[..span.start].chars().count() + 2);
    let underline = "^".repeat(input[span.start..span.end].chars().count().max(1));
    out.push_str(&padding);
    out.push_str(&underline);
    out
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
