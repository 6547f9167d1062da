use crate::detect::{HeaderDetector, MarkdownHeaderDetector, WikiHeaderDetector};
use crate::error::TocError;
use crate::heading::HeadingRecord;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Table of Contents";
pub const DEFAULT_PLACEHOLDER: &str = "{toc}";

/// Markup language of the pages being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    #[default]
    Wiki,
    Markdown,
}

impl HeaderDetector for Syntax {
    fn detect(&self, page: &str) -> Result<Vec<HeadingRecord>, TocError> {
        match self {
            Syntax::Wiki => WikiHeaderDetector.detect(page),
            Syntax::Markdown => MarkdownHeaderDetector.detect(page),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Label rendered in the `<h5>` above the entries
    pub title: String,
    /// Token replaced by the TOC, matched case-insensitively
    pub placeholder: String,
    pub syntax: Syntax,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            syntax: Syntax::default(),
        }
    }
}

impl TocConfig {
    pub fn from_toml(source: &str, path: &Path) -> Result<Self, TocError> {
        toml::from_str(source).map_err(|source| TocError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TocError> {
        let source = std::fs::read_to_string(path).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source, path)
    }
}
