use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};

use crate::constants::DAILY_WINDOW_HOURS;

/// Source of "now" for the ledger.
///
/// All ledger timestamps are local wall-clock times, so the clock hands out
/// `NaiveDateTime`. Tests swap in a fixed clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the machine's local timezone, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Returns true when both timestamps fall in the same calendar month.
pub fn same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Returns true when `later` is not before `earlier` and at most one daily
/// window after it.
pub fn within_daily_window(earlier: NaiveDateTime, later: NaiveDateTime) -> bool {
    later >= earlier && later - earlier <= Duration::hours(DAILY_WINDOW_HOURS)
}

/// Returns true when more than one daily window separates the two times.
/// A `later` that is actually earlier never counts as elapsed.
pub fn daily_window_elapsed(earlier: NaiveDateTime, later: NaiveDateTime) -> bool {
    later - earlier > Duration::hours(DAILY_WINDOW_HOURS)
}
