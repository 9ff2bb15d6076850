mod repository;

pub use repository::JsonLedgerRepository;
