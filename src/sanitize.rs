use crate::markup::strip_wiki_markup;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Text services the TOC builder needs for each heading.
pub trait Sanitizer {
    /// Removes HTML tags, keeping their inner text.
    fn strip_html(&self, text: &str) -> String;

    /// Builds the fragment identifier a TOC link points at.
    fn build_anchor(&self, raw_text: &str, id: &str) -> String;
}

/// Regex tag stripping and `{slug}_{id}` anchors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSanitizer;

impl Sanitizer for DefaultSanitizer {
    fn strip_html(&self, text: &str) -> String {
        TAG_REGEX.replace_all(text, "").into_owned()
    }

    fn build_anchor(&self, raw_text: &str, id: &str) -> String {
        let cleaned = strip_wiki_markup(&self.strip_html(raw_text));
        let slug: String = cleaned
            .trim()
            .chars()
            .filter_map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    Some(c)
                } else if c.is_whitespace() {
                    Some('_')
                } else {
                    None
                }
            })
            .collect();

        format!("{slug}_{id}")
    }
}
