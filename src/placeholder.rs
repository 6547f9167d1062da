use crate::config::{DEFAULT_PLACEHOLDER, TocConfig};
use crate::detect::{HeaderDetector, WikiHeaderDetector};
use crate::error::TocError;
use crate::sanitize::{DefaultSanitizer, Sanitizer};
use crate::toc::TocBuilder;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Replaces a `{toc}` placeholder in page text with the rendered TOC.
#[derive(Debug, Clone)]
pub struct PlaceholderSubstitutor<D = WikiHeaderDetector, S = DefaultSanitizer> {
    pattern: Regex,
    detector: D,
    builder: TocBuilder<S>,
}

impl PlaceholderSubstitutor<WikiHeaderDetector, DefaultSanitizer> {
    pub fn new() -> Result<Self, TocError> {
        Self::with_parts(DEFAULT_PLACEHOLDER, WikiHeaderDetector, TocBuilder::new())
    }
}

impl<D: HeaderDetector> PlaceholderSubstitutor<D, DefaultSanitizer> {
    /// Builds a substitutor using the config's placeholder and title.
    pub fn from_config(config: &TocConfig, detector: D) -> Result<Self, TocError> {
        let builder = TocBuilder::new().title(config.title.clone());
        Self::with_parts(&config.placeholder, detector, builder)
    }
}

impl<D: HeaderDetector, S: Sanitizer> PlaceholderSubstitutor<D, S> {
    pub fn with_parts(placeholder: &str, detector: D, builder: TocBuilder<S>) -> Result<Self, TocError> {
        let pattern = RegexBuilder::new(&regex::escape(placeholder))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern,
            detector,
            builder,
        })
    }

    /// Returns `page` with the first placeholder replaced by its TOC.
    ///
    /// Pages without a placeholder come back unchanged and are never scanned
    /// for headings. A page without headings loses the placeholder.
    pub fn substitute(&self, page: &str) -> Result<String, TocError> {
        if page.is_empty() {
            return Ok(String::new());
        }

        let Some(found) = self.pattern.find(page) else {
            debug!("no toc placeholder found");
            return Ok(page.to_string());
        };

        let headings = self.detector.detect(page)?;
        let toc = if headings.is_empty() {
            debug!("toc placeholder found but page has no headings");
            String::new()
        } else {
            self.builder.render(&headings)?
        };

        Ok(page.replacen(found.as_str(), &toc, 1))
    }
}
