use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default ledger file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "giveone_data.json";

/// Decimal places kept for money (cents)
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// The single local user always has this id
pub const LOCAL_USER_ID: u32 = 1;

/// Streaks and autopay both work on a rolling 24 hour window
pub const DAILY_WINDOW_HOURS: i64 = 24;

/// Freeze tokens granted to a new account
pub const DEFAULT_STREAK_FREEZE_TOKENS: u32 = 1;

/// Default autopay amount ($1.00)
pub const DEFAULT_AUTOPAY_AMOUNT: Decimal = dec!(1.00);

pub const INVITE_CODE_PREFIX: &str = "GV1-";

pub const DEFAULT_THEME: &str = "light";

pub const DEFAULT_PREFERRED_BANK: &str = "Wallet only (demo)";

/// Timestamp format used in exported file names
pub const EXPORT_FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
