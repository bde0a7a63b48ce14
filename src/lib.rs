pub mod advice;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod entries;
pub mod history;
pub mod log_entry;
pub mod migrate;
pub mod model;
pub mod predict;
pub mod settings;
pub mod store;
pub mod tip;

#[derive(Debug)]
pub enum BloomError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
    Validation(String),
    NotFound(String),
    Remote(String),
}

impl std::fmt::Display for BloomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BloomError::Io(e) => write!(f, "io: {e}"),
            BloomError::Json(e) => write!(f, "json: {e}"),
            BloomError::Config(msg) => write!(f, "config: {msg}"),
            BloomError::Validation(msg) => write!(f, "invalid: {msg}"),
            BloomError::NotFound(msg) => write!(f, "not found: {msg}"),
            BloomError::Remote(msg) => write!(f, "remote: {msg}"),
        }
    }
}

impl std::error::Error for BloomError {}

impl From<std::io::Error> for BloomError {
    fn from(e: std::io::Error) -> Self {
        BloomError::Io(e)
    }
}

impl From<serde_json::Error> for BloomError {
    fn from(e: serde_json::Error) -> Self {
        BloomError::Json(e)
    }
}
