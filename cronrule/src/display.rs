use std::fmt;

use crate::ast::*;

/// Render an expression back to five-field cron text.
pub fn encode(expr: &CronExpression) -> String {
    expr.to_string()
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

impl fmt::Display for CronValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronValue::Number { value } => write!(f, "{value}"),
            CronValue::Wildcard => write!(f, "*"),
            CronValue::Step { step } => write!(f, "*/{step}"),
            CronValue::StepFrom { from, step } => write!(f, "{from}/{step}"),
            CronValue::StepRange { from, to, step } => write!(f, "{from}-{to}/{step}"),
            CronValue::Range { from, to } => write!(f, "{from}-{to}"),
            CronValue::List { values } => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}
