//! Heading detection for wiki and markdown pages.

use crate::error::TocError;
use crate::heading::HeadingRecord;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Finds the headings of a page, in document order.
pub trait HeaderDetector {
    fn detect(&self, page: &str) -> Result<Vec<HeadingRecord>, TocError>;
}

/// Detects `==Title==` style headings.
///
/// Two equals signs on each side is level 1, five is level 4. Lines inside
/// `@@` code blocks or `<nowiki>` sections are not headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiHeaderDetector;

const MIN_RUN: usize = 2;
const MAX_RUN: usize = 5;

impl WikiHeaderDetector {
    fn parse_line(line: &str) -> Option<(usize, &str)> {
        let trimmed = line.trim_end();
        let open = trimmed.bytes().take_while(|&b| b == b'=').count();
        let close = trimmed.bytes().rev().take_while(|&b| b == b'=').count();

        if !(MIN_RUN..=MAX_RUN).contains(&open) || open != close || open * 2 >= trimmed.len() {
            return None;
        }

        let text = trimmed[open..trimmed.len() - close].trim();
        if text.is_empty() {
            return None;
        }

        Some((open - 1, text))
    }
}

impl HeaderDetector for WikiHeaderDetector {
    fn detect(&self, page: &str) -> Result<Vec<HeadingRecord>, TocError> {
        let mut headings = Vec::new();
        let mut in_code = false;
        let mut in_nowiki = false;
        let mut offset = 0;

        for line in page.split_inclusive('\n') {
            let position = offset;
            offset += line.len();

            let starts_escaped = in_code || in_nowiki;

            if line.matches("@@").count() % 2 == 1 {
                in_code = !in_code;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(open) = lower.rfind("<nowiki>") {
                in_nowiki = lower.rfind("</nowiki>").is_none_or(|close| close < open);
            } else if lower.contains("</nowiki>") {
                in_nowiki = false;
            }

            if starts_escaped {
                continue;
            }

            if let Some((level, text)) = Self::parse_line(line) {
                let id = headings.len().to_string();
                headings.push(HeadingRecord::new(level, position, text, id));
            }
        }

        Ok(headings)
    }
}

/// Detects ATX and setext headings with `pulldown-cmark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownHeaderDetector;

fn heading_level_to_usize(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

impl HeaderDetector for MarkdownHeaderDetector {
    fn detect(&self, page: &str) -> Result<Vec<HeadingRecord>, TocError> {
        let mut headings = Vec::new();
        let mut current_heading: Option<(usize, HeadingLevel)> = None;
        let mut text_buffer = String::new();

        for (event, range) in Parser::new_ext(page, Options::all()).into_offset_iter() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current_heading = Some((range.start, level));
                    text_buffer.clear();
                }
                Event::Text(text) if current_heading.is_some() => {
                    text_buffer.push_str(&text);
                }
                Event::Code(code) if current_heading.is_some() => {
                    text_buffer.push('`');
                    text_buffer.push_str(&code);
                    text_buffer.push('`');
                }
                Event::SoftBreak | Event::HardBreak if current_heading.is_some() => {
                    text_buffer.push(' ');
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((position, level)) = current_heading.take() {
                        let trimmed = text_buffer.trim();
                        if !trimmed.is_empty() {
                            let id = headings.len().to_string();
                            headings.push(HeadingRecord::new(
                                heading_level_to_usize(level),
                                position,
                                trimmed,
                                id,
                            ));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(headings)
    }
}
