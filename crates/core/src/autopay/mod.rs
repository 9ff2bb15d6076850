mod autopay_model;

pub use autopay_model::{next_open_case_id, Autopay, AutopayUpdate};
