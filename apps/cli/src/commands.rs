use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use giveone_core::autopay::AutopayUpdate;
use giveone_core::settings::SettingsUpdate;
use giveone_core::users::NewUser;
use giveone_core::utils::money::{format_dollars, parse_amount};
use giveone_core::utils::time_utils::{Clock, SystemClock};
use giveone_core::{LedgerService, LedgerServiceTrait};
use giveone_storage_json::export_document;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::render;

/// Rows shown by `history` unless `--limit` says otherwise.
const DEFAULT_HISTORY_LIMIT: usize = 120;

#[derive(Parser, Debug)]
#[command(name = "giveone")]
#[command(about = "Micro-donation wallet and ledger")]
pub struct Cli {
    /// Ledger file to use instead of GIVEONE_DATA_FILE
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the local account (replaces any previous one)
    Signup {
        first_name: String,
        last_name: String,
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the part of the email before '@'
        #[arg(long)]
        username: Option<String>,
    },
    /// Check the stored credentials
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Add money to the wallet
    Deposit {
        #[arg(value_parser = parse_amount_arg)]
        amount: Decimal,
    },
    /// Give to a case from the wallet
    Donate {
        case_id: u32,
        #[arg(value_parser = parse_amount_arg)]
        amount: Decimal,
    },
    /// List cases, or show one in full
    Cases { case_id: Option<u32> },
    /// Show the wallet balance and this month's giving
    Wallet,
    /// Show donations, newest first
    History {
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    /// Wipe the ledger back to its starting state
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Daily automatic donation
    Autopay {
        #[command(subcommand)]
        action: Option<AutopayAction>,
    },
    /// Friends and the streak leaderboard
    Friends {
        #[command(subcommand)]
        action: Option<FriendsAction>,
    },
    /// Show or change preferences
    Settings {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        bank: Option<String>,
    },
    /// Write a timestamped copy of the ledger
    Export {
        /// Directory to write into instead of GIVEONE_EXPORT_DIR
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AutopayAction {
    Configure {
        #[arg(long, value_parser = parse_amount_arg)]
        amount: Option<Decimal>,
        #[arg(long = "case")]
        case_id: Option<u32>,
        /// Turn autopay off instead of on
        #[arg(long)]
        off: bool,
    },
    Run,
}

#[derive(Subcommand, Debug)]
pub enum FriendsAction {
    Add {
        username: String,
        #[arg(long, default_value_t = 0)]
        streak: u32,
    },
    Leaderboard,
}

impl Commands {
    /// Commands that only read the ledger (exports write elsewhere).
    fn is_read_only(&self) -> bool {
        match self {
            Commands::Login { .. }
            | Commands::Cases { .. }
            | Commands::Wallet
            | Commands::History { .. }
            | Commands::Export { .. } => true,
            Commands::Autopay { action } => action.is_none(),
            Commands::Friends { action } => !matches!(action, Some(FriendsAction::Add { .. })),
            Commands::Settings { theme, bank } => theme.is_none() && bank.is_none(),
            Commands::Signup { .. }
            | Commands::Deposit { .. }
            | Commands::Donate { .. }
            | Commands::Reset { .. } => false,
        }
    }
}

fn parse_amount_arg(input: &str) -> Result<Decimal, String> {
    parse_amount(input).map_err(String::from)
}

/// Runs one command against the ledger, writing the result to `out`.
///
/// Every command first brings the ledger up to date (streak expiry and a due
/// autopay run), except `reset` which discards it anyway. If that update
/// cannot be saved, read-only commands still run on the loaded state.
pub fn run(
    command: Commands,
    service: &LedgerService,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if !matches!(command, Commands::Reset { .. }) {
        match service.refresh() {
            Ok(Some(receipt)) => writeln!(out, "Autopay: {}", render::receipt(&receipt))?,
            Ok(None) => {}
            Err(e) if command.is_read_only() => {
                tracing::warn!("Could not bring the ledger up to date: {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    match command {
        Commands::Signup {
            first_name,
            last_name,
            email,
            password,
            username,
        } => {
            let mut new_user = NewUser::new(&first_name, &last_name, &email, &password);
            if let Some(username) = username {
                new_user = new_user.with_username(&username);
            }
            let user = service.signup(new_user)?;
            writeln!(out, "Welcome, {}!", user.first_name)?;
            writeln!(out, "{}", render::user(&user))?;
        }
        Commands::Login { email, password } => {
            let user = service.login(&email, &password)?;
            writeln!(out, "Signed in.")?;
            writeln!(out, "{}", render::user(&user))?;
        }
        Commands::Deposit { amount } => {
            let balance = service.deposit(amount)?;
            writeln!(
                out,
                "Deposited {}. Balance: {}",
                format_dollars(amount),
                format_dollars(balance)
            )?;
        }
        Commands::Donate { case_id, amount } => {
            let receipt = service.donate(case_id, amount)?;
            writeln!(out, "{}", render::receipt(&receipt))?;
        }
        Commands::Cases { case_id: Some(id) } => {
            let case = service.get_case(id)?;
            writeln!(out, "{}", render::case_line(&case))?;
            writeln!(out, "{}", case.story)?;
        }
        Commands::Cases { case_id: None } => {
            writeln!(out, "{}", render::cases(&service.cases()))?;
        }
        Commands::Wallet => {
            writeln!(
                out,
                "{}",
                render::wallet(&service.wallet(), service.monthly_total())
            )?;
        }
        Commands::History { limit } => {
            let entries = service.history_newest_first(Some(limit));
            writeln!(out, "{}", render::history(&entries, &service.cases()))?;
            writeln!(
                out,
                "Donated this month: {}",
                format_dollars(service.monthly_total())
            )?;
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset erases the wallet, cases and history; pass --yes to confirm");
            }
            service.reset()?;
            writeln!(out, "Ledger reset.")?;
        }
        Commands::Autopay { action: None } => {
            writeln!(out, "{}", render::autopay(&service.autopay()))?;
        }
        Commands::Autopay {
            action:
                Some(AutopayAction::Configure {
                    amount,
                    case_id,
                    off,
                }),
        } => {
            let current = service.autopay();
            let update = AutopayUpdate {
                enabled: !off,
                amount: amount.unwrap_or(current.amount),
                case_id: case_id.or(current.case_id),
            };
            let autopay = service.configure_autopay(update)?;
            writeln!(out, "{}", render::autopay(&autopay))?;
        }
        Commands::Autopay {
            action: Some(AutopayAction::Run),
        } => match service.run_autopay()? {
            Some(receipt) => writeln!(out, "{}", render::receipt(&receipt))?,
            None => writeln!(out, "Autopay had nothing to do.")?,
        },
        Commands::Friends {
            action: Some(FriendsAction::Add { username, streak }),
        } => {
            let friend = service.add_friend(&username, streak)?;
            writeln!(out, "Added {}.", friend.username)?;
        }
        Commands::Friends {
            action: Some(FriendsAction::Leaderboard) | None,
        } => {
            writeln!(out, "{}", render::leaderboard(&service.leaderboard()))?;
        }
        Commands::Settings { theme, bank } => {
            let settings = if theme.is_none() && bank.is_none() {
                service.settings()
            } else {
                service.update_settings(SettingsUpdate {
                    theme,
                    preferred_bank: bank,
                })?
            };
            writeln!(out, "{}", render::settings(&settings))?;
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());
            let path = export_document(&service.snapshot(), &dir, SystemClock.now())
                .with_context(|| format!("exporting to {}", dir.display()))?;
            writeln!(out, "Exported to {}", path.display())?;
        }
    }
    Ok(())
}
