use parser::{Element, ParsedTex};
use serde::{Deserialize, Serialize};
use tex_input::{editing::BasicEdit, RawExpression, Span};

use crate::caret::MinimalCaret;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum CaretRemoveMode {
    /// Backspace
    Left,
    /// Delete
    Right,
}

// The functions here return edits that still need to be applied to the raw expression.
pub fn insert_at_caret(caret: MinimalCaret, text: &str) -> (Vec<BasicEdit>, MinimalCaret) {
    let edit = BasicEdit::insert(caret.offset, text);
    let caret_after = MinimalCaret::new(edit.affected_span().end);
    (vec![edit], caret_after)
}

pub fn remove_at_caret(
    value: &RawExpression,
    parsed: &ParsedTex,
    caret: MinimalCaret,
    mode: CaretRemoveMode,
) -> Option<(Vec<BasicEdit>, MinimalCaret)> {
    let span = removal_span(parsed, caret.offset, mode)?;
    Some((
        vec![BasicEdit::remove_span(value, span)],
        MinimalCaret::new(span.start),
    ))
}

/// Finds what has to be removed as a whole when deleting next to the offset.
/// Structures are never split: deleting any brace of a command removes the command.
pub fn removal_span(parsed: &ParsedTex, offset: usize, mode: CaretRemoveMode) -> Option<Span> {
    let comparator = match mode {
        CaretRemoveMode::Left => offset.checked_sub(1)?,
        CaretRemoveMode::Right if offset < parsed.len() => offset,
        CaretRemoveMode::Right => return None,
    };

    if let Some(new_line) = parsed.new_line_at(comparator) {
        return Some(Span::new(new_line.start, new_line.end + 1));
    }

    for (i, element) in parsed.elements.iter().enumerate() {
        match element {
            Element::Command(command) => {
                let boundary = match mode {
                    CaretRemoveMode::Left => command.end,
                    CaretRemoveMode::Right => command.start,
                };
                if comparator == boundary || command.is_delimiter(comparator) {
                    return Some(command.span());
                }
            }
            Element::Number(token) | Element::Variable(token) | Element::Operator(token) => {
                match token.extent {
                    Some(extent) => {
                        let boundary = match mode {
                            CaretRemoveMode::Left => extent.end - 1,
                            CaretRemoveMode::Right => extent.start,
                        };
                        if comparator == boundary {
                            return Some(extent);
                        }
                    }
                    None if token.index == comparator => {
                        return Some(Span::new(comparator, comparator + 1));
                    }
                    None => {}
                }
            }
            Element::Begin(begin) => {
                if is_boundary(begin.span(), comparator, mode) {
                    let end = parsed.elements[i..]
                        .iter()
                        .find_map(|element| match element {
                            Element::End(end) => Some(end.end + 1),
                            _ => None,
                        })
                        .unwrap_or(begin.end + 1);
                    return Some(Span::new(begin.start, end));
                }
            }
            Element::End(end) => {
                if is_boundary(end.span(), comparator, mode) {
                    let start = parsed.elements[..i]
                        .iter()
                        .rev()
                        .find_map(|element| match element {
                            Element::Begin(begin) => Some(begin.start),
                            _ => None,
                        })
                        .unwrap_or(end.start);
                    return Some(Span::new(start, end.end + 1));
                }
            }
            Element::EndOfLine { .. } | Element::Skip => {}
        }
    }

    None
}

/// Whether deleting in that direction would touch the span from the outside
fn is_boundary(span: Span, comparator: usize, mode: CaretRemoveMode) -> bool {
    match mode {
        CaretRemoveMode::Left => comparator + 1 == span.end,
        CaretRemoveMode::Right => comparator == span.start,
    }
}
