mod wallet_model;

pub use wallet_model::Wallet;
