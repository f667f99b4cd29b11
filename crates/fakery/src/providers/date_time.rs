//! Dates and times between the Unix epoch and now.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::generator::FakerError;
use crate::providers::base::unsupported;
use crate::providers::{Context, Provider};
use crate::types::{Args, Value};

/// Date and time values. Not localized; names of months and weekdays are
/// English.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeProvider;

/// Render `value` with a strftime `pattern`, failing on bad specifiers.
pub(crate) fn format_with(formatter: &str, value: DateTime<Utc>, pattern: &str) -> Result<String, FakerError> {
    let mut output = String::new();
    write!(output, "{}", value.format(pattern))
        .map_err(|_| FakerError::invalid_argument(formatter, "pattern", format!("invalid format string '{pattern}'")))?;
    Ok(output)
}

impl DateTimeProvider {
    /// Seconds since the epoch, up to `end` (default: now).
    pub fn unix_time(&self, ctx: &Context<'_>, end: Option<i64>) -> i64 {
        let end = end.unwrap_or_else(|| Utc::now().timestamp());
        ctx.random().int_in(0, end.max(0))
    }

    /// A UTC instant up to `end` seconds since the epoch (default: now).
    ///
    /// Fails when `end` lies beyond the range `chrono` can represent.
    pub fn date_time(
        &self,
        formatter: &str,
        ctx: &Context<'_>,
        end: Option<i64>,
    ) -> Result<DateTime<Utc>, FakerError> {
        let latest = DateTime::<Utc>::MAX_UTC.timestamp();
        if let Some(end) = end.filter(|&end| end > latest) {
            return Err(FakerError::invalid_argument(
                formatter,
                "end_datetime",
                format!("{end} seconds since the epoch is out of range"),
            ));
        }
        let seconds = self.unix_time(ctx, end);
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            FakerError::invalid_argument(
                formatter,
                "end_datetime",
                format!("{seconds} seconds since the epoch is out of range"),
            )
        })
    }

    fn formatted(
        &self,
        formatter: &str,
        ctx: &Context<'_>,
        args: &Args,
        default_pattern: &str,
    ) -> Result<String, FakerError> {
        let pattern = args.str_opt(formatter, 0, "pattern")?.unwrap_or(default_pattern);
        let end = args.int_opt(formatter, 1, "end_datetime")?;
        format_with(formatter, self.date_time(formatter, ctx, end)?, pattern)
    }
}

impl Provider for DateTimeProvider {
    fn name(&self) -> &str {
        "date_time"
    }

    fn formatters(&self) -> Vec<&str> {
        vec![
            "am_pm",
            "date",
            "date_time",
            "day_of_month",
            "day_of_week",
            "iso8601",
            "month",
            "month_name",
            "time",
            "unix_time",
            "year",
        ]
    }

    fn call(&self, formatter: &str, ctx: &Context<'_>, args: &Args) -> Result<Value, FakerError> {
        let value: Value = match formatter {
            "unix_time" => {
                let end = args.int_opt(formatter, 0, "end_datetime")?;
                self.unix_time(ctx, end).into()
            }
            "date_time" => {
                let end = args.int_opt(formatter, 0, "end_datetime")?;
                format_with(formatter, self.date_time(formatter, ctx, end)?, "%Y-%m-%d %H:%M:%S")?.into()
            }
            "iso8601" => {
                let end = args.int_opt(formatter, 0, "end_datetime")?;
                let sep = args.str_opt(formatter, 1, "sep")?.unwrap_or("T");
                let pattern = format!("%Y-%m-%d{sep}%H:%M:%S");
                format_with(formatter, self.date_time(formatter, ctx, end)?, &pattern)?.into()
            }
            "date" => self.formatted(formatter, ctx, args, "%Y-%m-%d")?.into(),
            "time" => self.formatted(formatter, ctx, args, "%H:%M:%S")?.into(),
            "year" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%Y")?.into(),
            "month" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%m")?.into(),
            "month_name" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%B")?.into(),
            "day_of_month" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%d")?.into(),
            "day_of_week" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%A")?.into(),
            "am_pm" => format_with(formatter, self.date_time(formatter, ctx, None)?, "%p")?.into(),
            _ => return Err(unsupported(self, formatter, ctx)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_with_rejects_bad_specifiers() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(format_with("date", epoch, "%Y-%m-%d").unwrap(), "1970-01-01");
        assert!(format_with("date", epoch, "%Q").is_err());
    }
}
