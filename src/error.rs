use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Unknown output format: {0} (expected \"table\" or \"json\")")]
    InvalidFormat(String),

    #[error("Invalid column width: {0}")]
    InvalidWidth(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported payload: expected an object or array, found {0}")]
    UnsupportedPayload(&'static str),

    #[error("Line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<MediaError>,
    },

    #[error("{count} invalid URL{}", if *count == 1 { "" } else { "s" })]
    InvalidUrls { count: usize },
}

pub type Result<T> = std::result::Result<T, MediaError>;
