use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The editable TeX source, exactly as the user sees it in `getValue`.
/// All offsets are character offsets, not byte offsets.
/// Display-only braces and placeholders never end up in here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExpression {
    value: String,
}

impl RawExpression {
    pub fn new(value: impl Into<String>) -> Self {
        RawExpression {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The characters covered by the span
    pub fn slice(&self, span: Span) -> String {
        self.value
            .chars()
            .skip(span.start)
            .take(span.len())
            .collect()
    }

    pub(crate) fn insert_str(&mut self, offset: usize, text: &str) {
        let byte_offset = self.byte_offset(offset);
        self.value.insert_str(byte_offset, text);
    }

    pub(crate) fn remove_span(&mut self, span: Span) {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        self.value.replace_range(start..end, "");
    }

    fn byte_offset(&self, offset: usize) -> usize {
        assert!(
            offset <= self.len(),
            "offset {} is out of bounds for {:?}",
            offset,
            self.value
        );
        self.value
            .char_indices()
            .nth(offset)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }
}

impl std::fmt::Display for RawExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
