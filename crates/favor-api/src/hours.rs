//! Merchant operating-hours interpreter.
//!
//! The Favor API describes a merchant's weekly schedule as blocks, each
//! pairing weekday indices (`"0"` = Sunday) with `HHMM` opening windows. A
//! close time prefixed with `+` falls on the calendar day after the opening
//! day. [`MerchantSchedule::resolve_at`] turns one block into concrete UTC
//! instants keyed by weekday index.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

/// Saturday in the upstream weekday convention (0 = Sunday). A wrapped
/// close on Saturday rolls to Sunday, index 0, never 7.
const SATURDAY_INDEX: i64 = 6;

/// Resolved schedule: weekday index to opening windows, in upstream order.
pub type ResolvedHours = BTreeMap<i64, Vec<OpeningHours>>;

/// One weekly schedule block as returned by the Favor API.
///
/// `days` lists the weekday indices the windows apply to; in practice the
/// API rarely sends more than one index per block. A merchant open 7 AM to
/// 9 PM on Mondays arrives as:
///
/// ```json
/// {"days": ["1"], "open": [{"start": "0700", "end": "2100"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MerchantSchedule {
    /// Weekday indices (`"0"` = Sunday) the windows apply to.
    #[serde(default)]
    pub days: Vec<String>,
    /// Opening windows, in upstream order.
    #[serde(default)]
    pub open: Vec<OpenWindow>,
}

/// A single opening window in upstream `HHMM` notation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenWindow {
    /// Opening time, `HHMM`.
    pub start: String,
    /// Closing time, `HHMM`, prefixed with `+` when the merchant closes on
    /// the following day.
    pub end: String,
}

/// Concrete open/close instants resolved from one opening window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    /// Opening instant.
    pub open: DateTime<Utc>,
    /// Closing instant.
    pub close: DateTime<Utc>,
}

/// Failure while interpreting a schedule block.
///
/// The first malformed token aborts the whole resolution; a partial mapping
/// is never returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoursError {
    /// A `days` entry did not parse as an integer.
    #[error("invalid day index {0:?} in merchant hours")]
    Day(String),
    /// A `start` time did not parse as `HHMM`.
    #[error("invalid open time {0:?} in merchant hours")]
    OpenTime(String),
    /// An `end` time did not parse as `HHMM`, after any `+` is stripped.
    #[error("invalid close time {0:?} in merchant hours")]
    CloseTime(String),
}

impl MerchantSchedule {
    /// Resolves this block against the current local year and month.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError`] when a day index or time component fails to
    /// parse. The whole call fails on the first malformed token.
    pub fn resolve(&self) -> Result<ResolvedHours, HoursError> {
        self.resolve_at(Local::now().date_naive())
    }

    /// Resolves this block against the year and month of `anchor`.
    ///
    /// Instants reuse the weekday index as a day-of-month number in the
    /// anchor month: index 3 lands on the 3rd, and index 0 normalizes to
    /// the last day of the previous month. The instants are therefore only
    /// meaningful relative to each other, not as real calendar dates. The
    /// result is keyed by the opening day even when a `+`-prefixed close
    /// rolls to the following day, and days with no windows produce no key.
    ///
    /// The output depends on the anchor's year and month only; any day
    /// within the same month yields the same mapping.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError`] when a day index or time component fails to
    /// parse. The whole call fails on the first malformed token.
    pub fn resolve_at(&self, anchor: NaiveDate) -> Result<ResolvedHours, HoursError> {
        let mut resolved = ResolvedHours::new();

        for raw_day in &self.days {
            let day: i64 = raw_day
                .parse()
                .map_err(|_| HoursError::Day(raw_day.clone()))?;

            for window in &self.open {
                let (close_raw, close_day) = match window.end.strip_prefix('+') {
                    Some(rest) if day == SATURDAY_INDEX => (rest, 0),
                    Some(rest) => (
                        rest,
                        day.checked_add(1)
                            .ok_or_else(|| HoursError::Day(raw_day.clone()))?,
                    ),
                    None => (window.end.as_str(), day),
                };

                let open_offset = clock_offset(&window.start)
                    .ok_or_else(|| HoursError::OpenTime(window.start.clone()))?;
                let close_offset = clock_offset(close_raw)
                    .ok_or_else(|| HoursError::CloseTime(close_raw.to_owned()))?;

                let open = day_start(anchor, day)
                    .ok_or_else(|| HoursError::Day(raw_day.clone()))?
                    .checked_add_signed(open_offset)
                    .ok_or_else(|| HoursError::OpenTime(window.start.clone()))?;
                let close = day_start(anchor, close_day)
                    .ok_or_else(|| HoursError::Day(raw_day.clone()))?
                    .checked_add_signed(close_offset)
                    .ok_or_else(|| HoursError::CloseTime(close_raw.to_owned()))?;

                resolved.entry(day).or_default().push(OpeningHours {
                    open: open.and_utc(),
                    close: close.and_utc(),
                });
            }
        }

        Ok(resolved)
    }
}

/// Midnight of the date addressed by `day` used as a day-of-month number in
/// the anchor's month. Out-of-range indices normalize arithmetically: day 0
/// is the day before the 1st. `None` only when the result leaves chrono's
/// representable range.
fn day_start(anchor: NaiveDate, day: i64) -> Option<NaiveDateTime> {
    let offset = day.checked_sub(i64::from(anchor.day()))?;
    let delta = Duration::try_days(offset)?;
    anchor.and_time(NaiveTime::MIN).checked_add_signed(delta)
}

/// Offset from midnight for an `HHMM` string: the first two characters are
/// the hour, everything after them the minute. Neither component is
/// range-checked, so hour 25 simply spills into the following day.
fn clock_offset(raw: &str) -> Option<Duration> {
    let hour: i64 = raw.get(..2)?.parse().ok()?;
    let minute: i64 = raw.get(2..)?.parse().ok()?;
    let hours = Duration::try_hours(hour)?;
    let minutes = Duration::try_minutes(minute)?;
    hours.checked_add(&minutes)
}
