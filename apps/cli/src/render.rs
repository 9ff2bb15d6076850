//! Plain-text views of ledger state.

use std::collections::HashMap;

use giveone_core::autopay::Autopay;
use giveone_core::cases::Case;
use giveone_core::friends::LeaderboardEntry;
use giveone_core::history::HistoryEntry;
use giveone_core::settings::Settings;
use giveone_core::users::User;
use giveone_core::utils::money::format_dollars;
use giveone_core::wallet::Wallet;
use giveone_core::DonationReceipt;
use rust_decimal::Decimal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn case_line(case: &Case) -> String {
    let city = case
        .city
        .as_deref()
        .map(|c| format!(", {c}"))
        .unwrap_or_default();
    format!(
        "#{} {} ({}{}) [{}] {} of {} raised, {}% {}",
        case.case_id,
        case.title,
        case.org_name,
        city,
        case.category,
        format_dollars(case.raised),
        format_dollars(case.goal),
        case.percent_funded(),
        case.status.as_str()
    )
}

pub fn cases(cases: &[Case]) -> String {
    cases.iter().map(case_line).collect::<Vec<_>>().join("\n")
}

pub fn wallet(wallet: &Wallet, monthly_total: Decimal) -> String {
    let updated = wallet
        .last_updated
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "never".to_string());
    format!(
        "Balance: {}\nDonated this month: {}\nLast updated: {}",
        format_dollars(wallet.balance),
        format_dollars(monthly_total),
        updated
    )
}

/// History rows, newest first, labelled with case titles where known.
pub fn history(entries: &[HistoryEntry], cases: &[Case]) -> String {
    if entries.is_empty() {
        return "No donations yet.".to_string();
    }
    let titles: HashMap<u32, &str> = cases
        .iter()
        .map(|c| (c.case_id, c.title.as_str()))
        .collect();
    entries
        .iter()
        .map(|entry| {
            let title = titles
                .get(&entry.case_id)
                .copied()
                .unwrap_or("Unknown case");
            format!(
                "{}  {}  #{} {}  (balance {})",
                entry.timestamp.format(TIMESTAMP_FORMAT),
                format_dollars(entry.amount),
                entry.case_id,
                title,
                format_dollars(entry.balance_after)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn receipt(receipt: &DonationReceipt) -> String {
    let mut text = format!(
        "Donated {} to #{} {}. Balance: {}",
        format_dollars(receipt.entry.amount),
        receipt.case.case_id,
        receipt.case.title,
        format_dollars(receipt.entry.balance_after)
    );
    if receipt.newly_funded {
        text.push_str("\nThis case is now fully funded!");
    }
    text
}

pub fn user(user: &User) -> String {
    format!(
        "{} (@{}) <{}>\nInvite code: {}\nStreak: {} day(s), {} freeze token(s)",
        user.display_name(),
        user.username,
        user.email,
        user.invite_code,
        user.streak_days,
        user.streak_freeze_tokens
    )
}

pub fn autopay(autopay: &Autopay) -> String {
    let target = autopay
        .case_id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "Autopay: {} {} daily, target {}",
        if autopay.enabled { "on" } else { "off" },
        format_dollars(autopay.amount),
        target
    )
}

pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "Nobody on the leaderboard yet.".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{:>2}. {} - {} day(s)", e.rank, e.name, e.streak_days))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn settings(settings: &Settings) -> String {
    format!(
        "Theme: {}\nPreferred bank: {}",
        settings.theme, settings.preferred_bank
    )
}
