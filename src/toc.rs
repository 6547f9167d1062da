//! Table of Contents rendering.
//!
//! Turns a flat list of headings into the nested sidebar block, numbering each
//! entry relative to the level of the first heading on the page (`1`, `1.1`,
//! `1.1.2`, ...).

use crate::config::DEFAULT_TITLE;
use crate::error::TocError;
use crate::heading::HeadingRecord;
use crate::markup::strip_wiki_markup;
use crate::sanitize::{DefaultSanitizer, Sanitizer};
use log::{debug, trace};

/// Levels with a pre-allocated counter; deeper levels grow the counter array.
const TRACKED_LEVELS: usize = 5;

const SIDEBAR_OPEN: &str = r#"<div id="sidebar"><div id="toc-parent"><div id="toc"><h5>"#;
const SIDEBAR_CLOSE: &str = "</div></div></div>";
const INDENT_OPEN: &str = r#"<div class="tocindent">"#;
const LINE_OPEN: &str = r#"<div class="tocline">"#;

/// Open containers and section counters for one render.
struct NestingState {
    lowest: usize,
    /// Open nesting levels, outermost first.
    levels: Vec<usize>,
    /// Indexed by level; slot 0 is unused.
    counters: Vec<usize>,
}

impl NestingState {
    fn new(lowest: usize) -> Self {
        Self {
            lowest,
            levels: vec![lowest],
            counters: vec![0; TRACKED_LEVELS.max(lowest) + 1],
        }
    }

    fn current(&self) -> usize {
        self.levels.last().copied().unwrap_or(self.lowest)
    }

    /// Closes and opens containers to move from the current level to `level`.
    fn enter(&mut self, level: usize, out: &mut String) {
        if self.current() == level {
            return;
        }

        let prev = self.levels.pop().unwrap_or(self.lowest);
        if prev > self.lowest {
            out.push_str("</p>");
        }

        if prev > level {
            for _ in level..prev {
                out.push_str("</div>");
            }
            if level > self.lowest {
                out.push_str("<p>");
            }
        } else if level > self.lowest {
            for _ in prev..level {
                out.push_str(INDENT_OPEN);
                out.push_str("<p>");
            }
        }

        self.levels.push(level);
    }

    fn count(&mut self, level: usize) {
        if self.counters.len() <= level {
            self.counters.resize(level + 1, 0);
        }
        self.counters[level] += 1;
        self.counters[level + 1..].fill(0);
    }

    /// Dot-joined counters from the lowest level down to `level`, without leading zeros.
    ///
    /// Empty for headings shallower than the lowest level.
    fn section_number(&self, level: usize) -> String {
        self.counters
            .get(self.lowest..=level)
            .unwrap_or_default()
            .iter()
            .skip_while(|&&n| n == 0)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    fn finish(&self, out: &mut String) {
        if self.current() != self.lowest {
            out.push_str("</div>");
        }
    }
}

/// Renders heading lists into the TOC sidebar markup.
#[derive(Debug, Clone)]
pub struct TocBuilder<S = DefaultSanitizer> {
    sanitizer: S,
    title: String,
}

impl Default for TocBuilder<DefaultSanitizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl TocBuilder<DefaultSanitizer> {
    pub fn new() -> Self {
        Self::with_sanitizer(DefaultSanitizer)
    }
}

impl<S: Sanitizer> TocBuilder<S> {
    pub fn with_sanitizer(sanitizer: S) -> Self {
        Self {
            sanitizer,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Renders `headings` as the nested, numbered TOC block.
    ///
    /// Headings are ordered by position (then level) before rendering, so the
    /// input order does not matter. Numbering starts at the first heading's
    /// level. Fails on an empty list or a level of 0.
    pub fn render(&self, headings: &[HeadingRecord]) -> Result<String, TocError> {
        if headings.is_empty() {
            return Err(TocError::NoHeadings);
        }
        if let Some(h) = headings.iter().find(|h| h.level == 0) {
            return Err(TocError::InvalidLevel {
                level: h.level,
                text: h.text.clone(),
            });
        }

        let mut sorted = headings.to_vec();
        sorted.sort_by(HeadingRecord::document_order);

        let lowest = sorted[0].level;
        let mut state = NestingState::new(lowest);

        let mut out = String::with_capacity(128 + sorted.len() * 96);
        out.push_str(SIDEBAR_OPEN);
        out.push_str(&self.title);
        out.push_str("</h5>\n");

        for h in &sorted {
            state.enter(h.level, &mut out);
            state.count(h.level);

            let outermost = h.level == lowest;
            if outermost {
                out.push_str(LINE_OPEN);
            }

            let number = state.section_number(h.level);
            let anchor = self.sanitizer.build_anchor(&h.text, &h.id);
            let text = strip_wiki_markup(&self.sanitizer.strip_html(&h.text));
            trace!("toc entry {number} -> #{anchor}");

            out.push_str(r#"<span class="number">"#);
            out.push_str(&number);
            out.push_str("</span> ");
            out.push_str(r##"<a href="#"##);
            out.push_str(&anchor);
            out.push_str(r#"">"#);
            out.push_str(&text);
            out.push_str("</a><br/>");

            if outermost {
                out.push_str("</div>");
            }
        }

        state.finish(&mut out);
        out.push_str(SIDEBAR_CLOSE);

        debug!("rendered toc with {} entries, lowest level {lowest}", sorted.len());
        Ok(out)
    }
}
