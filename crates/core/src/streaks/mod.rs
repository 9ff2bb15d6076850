//! Daily donation streak rules.
//!
//! - first donation ever: streak = 1
//! - another donation on the same calendar day: unchanged
//! - a new calendar day within 24 hours of the last donation: streak + 1
//! - more than 24 hours since the last donation: streak restarts at 1

use chrono::NaiveDateTime;
use log::debug;

use crate::users::User;
use crate::utils::time_utils::{daily_window_elapsed, within_daily_window};

/// Updates the user's streak for a donation made at `now`.
pub fn record_donation(user: &mut User, now: NaiveDateTime) {
    let streak = match user.streak_last_at {
        None => 1,
        Some(last) if last.date() == now.date() => user.streak_days.max(1),
        Some(last) if within_daily_window(last, now) => user.streak_days.saturating_add(1),
        Some(_) => 1,
    };
    debug!("Streak for {} is now {} day(s)", user.username, streak);
    user.streak_days = streak;
    user.streak_last_at = Some(now);
}

/// Drops the streak to zero after more than 24 hours without a donation.
///
/// Returns true when the user was changed.
pub fn break_if_inactive(user: &mut User, now: NaiveDateTime) -> bool {
    match user.streak_last_at {
        Some(last) if daily_window_elapsed(last, now) && user.streak_days != 0 => {
            user.streak_days = 0;
            true
        }
        _ => false,
    }
}
