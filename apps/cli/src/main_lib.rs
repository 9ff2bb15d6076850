use std::sync::Arc;

use giveone_core::LedgerService;
use giveone_storage_json::JsonLedgerRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Opens the ledger file named by the config. Unreadable files fall back to
/// the default document; the core service logs that case.
pub fn build_service(config: &Config) -> LedgerService {
    tracing::debug!("Using ledger at {}", config.data_file.display());
    let repository = Arc::new(JsonLedgerRepository::new(config.data_file.clone()));
    LedgerService::new(repository)
}
