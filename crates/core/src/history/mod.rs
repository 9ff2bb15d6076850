mod history_model;

pub use history_model::{monthly_total, HistoryEntry};
