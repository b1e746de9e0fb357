mod config;
mod file_name;
mod files;
mod ids;

pub use self::config::{
    AppConfig, CONFIG_DIR, DEFAULT_AI_ASSIST_ENDPOINT, DEFAULT_AI_ASSIST_KEY, DEFAULT_SERVER_URL,
};
pub use self::file_name::{FileNameError, is_valid_file_name, validate_file_name};
pub use self::files::{File, Files, NameClash, TabState, VzContent};
pub use self::ids::{FileId, SessionId, random_hex};

#[cfg(test)]
#[path = "../tests/model/file_name_tests.rs"]
mod file_name_tests;

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod config_tests;
