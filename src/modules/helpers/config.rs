use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

const DEFAULT_DATA_DIR: &str = "./files";
const DEFAULT_START_LOG: &str = "start.log";
const DEFAULT_END_LOG: &str = "end.log";
const DEFAULT_ABBREVIATIONS: &str = "abbreviations.txt";
const DEFAULT_LOGGING_LEVEL: &str = "INFO";
const DEFAULT_LOG_FILE: &str = "program.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub start_log: String,
    pub end_log: String,
    pub abbreviations: String,
    pub logging_level: String,
    pub log_file: PathBuf,
}

impl Config {
    /// # Build the config from the environment
    /// values from a `.env` file are loaded first; unset variables fall back
    /// to the defaults used by the qualifying data set.
    pub fn init() -> Self {
        dotenv().ok();

        Config {
            data_dir: PathBuf::from(var_or("DATA_DIR", DEFAULT_DATA_DIR)),
            start_log: var_or("START_LOG", DEFAULT_START_LOG),
            end_log: var_or("END_LOG", DEFAULT_END_LOG),
            abbreviations: var_or("ABBREVIATIONS", DEFAULT_ABBREVIATIONS),
            logging_level: var_or("LOGGING_LEVEL", DEFAULT_LOGGING_LEVEL),
            log_file: PathBuf::from(var_or("LOG_FILE", DEFAULT_LOG_FILE)),
        }
    }

    /// default config reading its inputs from `data_dir`
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Config {
            data_dir: data_dir.into(),
            start_log: DEFAULT_START_LOG.to_string(),
            end_log: DEFAULT_END_LOG.to_string(),
            abbreviations: DEFAULT_ABBREVIATIONS.to_string(),
            logging_level: DEFAULT_LOGGING_LEVEL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    pub fn start_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.start_log)
    }

    pub fn end_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.end_log)
    }

    pub fn abbreviations_path(&self) -> PathBuf {
        self.data_dir.join(&self.abbreviations)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
