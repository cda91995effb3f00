use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, RunLensError};

/// The concrete date range a duration token resolves to.
///
/// `end` is the resolution time and `start` lies `end - duration` in the
/// past, so `start <= end` always holds for the non-negative amounts the
/// parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Resolve a duration token such as "7d", "2w" or "1m" into a [`DateWindow`]
/// ending at `now`.
///
/// A month is approximated as exactly 30 days, not a calendar month.
/// Malformed tokens and unrecognized units are fatal; there is no silent
/// fallback window.
pub fn resolve(token: &str, now: DateTime<Utc>) -> Result<DateWindow> {
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (amount, unit) = token.split_at(split);

    // Token must be digits followed by letters, nothing else.
    if amount.is_empty() || unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RunLensError::InvalidDuration(token.to_string()));
    }

    let amount: i64 = amount
        .parse()
        .map_err(|_| RunLensError::InvalidDuration(token.to_string()))?;

    let duration = match unit.to_lowercase().as_str() {
        "d" | "day" | "days" => Duration::days(amount),
        "w" | "week" | "weeks" => Duration::weeks(amount),
        "m" | "month" | "months" => Duration::days(30 * amount),
        _ => return Err(RunLensError::UnknownDurationUnit(unit.to_string())),
    };

    Ok(DateWindow {
        start: now - duration,
        end: now,
    })
}
