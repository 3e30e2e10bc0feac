use anyhow::{anyhow, Context, Result};
use time::macros::format_description;
use time::{Duration, PrimitiveDateTime};

use crate::config::Config;

/// Half-open time span `[start, end)` over which data is fetched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchWindow {
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    num_days: u32,
}

impl FetchWindow {
    /// Parses a `YYYY-MM-DD HH:MM:SS` start time and spans `num_days` days from it.
    ///
    /// # Errors
    /// - `start_time` doesn't match the format.
    /// - The end of the window is out of the representable range.
    pub fn new(start_time: &str, num_days: u32) -> Result<Self> {
        let start = PrimitiveDateTime::parse(
            start_time,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .with_context(|| {
            format!(
                "The start time \"{}\" isn't in YYYY-MM-DD HH:MM:SS format.",
                start_time
            )
        })?;

        let end = start
            .checked_add(Duration::days(i64::from(num_days)))
            .ok_or_else(|| {
                anyhow!(
                    "A {} day window starting at {} overflows.",
                    num_days,
                    start_time
                )
            })?;

        Ok(Self {
            start,
            end,
            num_days,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.start_time(), config.num_days())
    }

    pub fn start(&self) -> PrimitiveDateTime {
        self.start
    }

    /// First instant after the window
    pub fn end(&self) -> PrimitiveDateTime {
        self.end
    }

    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    /// The start of each day in the window, in order
    pub fn days(&self) -> impl Iterator<Item = PrimitiveDateTime> + '_ {
        (0..self.num_days).map(move |day| self.start + Duration::days(i64::from(day)))
    }

    pub fn contains(&self, ts: PrimitiveDateTime) -> bool {
        self.start <= ts && ts < self.end
    }
}

/// Formats a timestamp back into the `YYYY-MM-DD HH:MM:SS` form used by `START_TIME`
pub fn format_timestamp(ts: PrimitiveDateTime) -> Result<String> {
    ts.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .context("Couldn't format the timestamp.")
}
