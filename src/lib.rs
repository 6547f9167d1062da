//! Table of Contents rendering for wiki pages.
//!
//! Detects headings in a page, renders them as a numbered, nested TOC block and
//! substitutes the block for a `{toc}` placeholder.

pub mod config;
pub mod detect;
pub mod error;
pub mod heading;
pub mod markup;
pub mod placeholder;
pub mod sanitize;
pub mod toc;

pub use config::{Syntax, TocConfig};
pub use detect::{HeaderDetector, MarkdownHeaderDetector, WikiHeaderDetector};
pub use error::TocError;
pub use heading::HeadingRecord;
pub use placeholder::PlaceholderSubstitutor;
pub use sanitize::{DefaultSanitizer, Sanitizer};
pub use toc::TocBuilder;
