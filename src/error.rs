use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("cannot render a table of contents without headings")]
    NoHeadings,

    #[error("heading '{text}' has invalid level {level}; levels start at 1")]
    InvalidLevel { level: usize, text: String },

    #[error("invalid placeholder pattern: {0}")]
    Placeholder(#[from] regex::Error),

    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("header detection failed: {0}")]
    Detector(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to serialize headings: {0}")]
    Json(#[from] serde_json::Error),
}
