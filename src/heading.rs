use serde::Serialize;
use std::cmp::Ordering;

/// Heading detected on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Nesting level, 1 is the outermost
    pub level: usize,
    /// Byte offset of the heading in the page
    pub position: usize,
    /// Raw heading content, markup included
    pub text: String,
    /// Opaque identity used when building the anchor
    pub id: String,
}

impl HeadingRecord {
    pub fn new(level: usize, position: usize, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            position,
            text: text.into(),
            id: id.into(),
        }
    }

    /// Orders by page position, then by ascending level when two headings share one.
    pub fn document_order(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then(self.level.cmp(&other.level))
    }
}
