//! Users module - the local account profile and password handling.

mod password;
mod users_model;

pub use password::{hash_password, verify_password};
pub use users_model::{invite_code, NewUser, User};
