use std::path::PathBuf;

use giveone_core::constants::DEFAULT_DATA_FILE;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub export_dir: PathBuf,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_file =
            std::env::var("GIVEONE_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.into());
        let export_dir = std::env::var("GIVEONE_EXPORT_DIR").unwrap_or_else(|_| ".".into());
        let log_format = std::env::var("GIVEONE_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Self {
            data_file: PathBuf::from(data_file),
            export_dir: PathBuf::from(export_dir),
            log_format,
        }
    }

    /// Command line flags win over the environment.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}
