use serde::{Deserialize, Serialize};

use crate::{raw_expression::RawExpression, span::Span};

use super::{editable::Editable, invertible::Invertible};

/// A single change to the raw expression.
///
/// A Vec<BasicEdit> can be inverted by inverting every edit and reversing the order.
/// When creating multiple disjoint edits, create them right to left.
/// That way, one edit doesn't affect the offsets of the other edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasicEdit {
    Insert {
        offset: usize,
        text: String,
    },
    Delete {
        /// Deletes to the right of the offset
        offset: usize,
        /// The text that was removed, used for undo.
        text: String,
    },
}

impl BasicEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        BasicEdit::Insert {
            offset,
            text: text.into(),
        }
    }

    /// Creates an edit that removes the span, remembering the removed text.
    pub fn remove_span(value: &RawExpression, span: Span) -> Self {
        BasicEdit::Delete {
            offset: span.start,
            text: value.slice(span),
        }
    }

    /// The span that the edit covers *after* it has been applied.
    /// Empty for deletions.
    pub fn affected_span(&self) -> Span {
        match self {
            BasicEdit::Insert { offset, text } => Span::new(*offset, offset + text.chars().count()),
            BasicEdit::Delete { offset, .. } => Span::new(*offset, *offset),
        }
    }
}

impl Invertible for BasicEdit {
    type Inverse = BasicEdit;

    fn inverse(&self) -> Self::Inverse {
        match self {
            BasicEdit::Insert { offset, text } => BasicEdit::Delete {
                offset: *offset,
                text: text.clone(),
            },
            BasicEdit::Delete { offset, text } => BasicEdit::Insert {
                offset: *offset,
                text: text.clone(),
            },
        }
    }
}

impl Editable for RawExpression {
    fn apply_edit(&mut self, edit: &BasicEdit) {
        match edit {
            BasicEdit::Insert { offset, text } => self.insert_str(*offset, text),
            BasicEdit::Delete { offset, text } => {
                let span = Span::new(*offset, offset + text.chars().count());
                debug_assert_eq!(&self.slice(span), text);
                self.remove_span(span);
            }
        }
    }
}
