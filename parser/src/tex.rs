use std::collections::BTreeMap;

use grammar::{
    is_escaped_operator, is_near_closure, is_number, is_operator, is_relation_command,
    is_sup_or_sub, is_variable, CURSOR_TEX, EMPTY_TEX, SPACING_TEX,
};
use serde::{Deserialize, Serialize};

use crate::{
    command::CommandEdge,
    element::{Element, Token},
    lexer::Lexer,
    parse_error::ParseError,
};

/// A `\\` line break. Both backslashes map to the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct NewLine {
    pub start: usize,
    /// Index of the second backslash
    pub end: usize,
}

/// Everything that one pass over the raw expression produces.
/// Rebuilt from scratch after every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTex {
    /// Length of the raw expression, in characters
    pub length: usize,
    /// What the typesetter gets to see
    pub display_tex: String,
    pub elements: Vec<Element>,
    /// Sorted offsets where the caret may rest
    pub cursor_points: Vec<usize>,
    pub new_lines: BTreeMap<usize, NewLine>,
}

impl ParsedTex {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_cursor_point(&self, offset: usize) -> bool {
        self.cursor_points.binary_search(&offset).is_ok()
    }

    pub fn new_line_at(&self, offset: usize) -> Option<&NewLine> {
        self.new_lines.get(&offset)
    }
}

/// Parses the raw expression. The caret marker is placed at `cursor_index`,
/// or at the very end if no valid position matches.
pub fn parse(raw: &str, cursor_index: Option<usize>) -> Result<ParsedTex, ParseError> {
    let parsed = TexParser::new(raw, cursor_index).parse()?;
    log::trace!(
        "Parsed {} elements, display {}",
        parsed.elements.len(),
        parsed.display_tex
    );
    Ok(parsed)
}

pub(crate) struct TexParser {
    pub(crate) lexer: Lexer,
    cursor_index: Option<usize>,
    cursor_placed: bool,
    pub(crate) display_tex: String,
    pub(crate) elements: Vec<Element>,
    cursor_points: Vec<usize>,
    new_lines: BTreeMap<usize, NewLine>,
    /// For every raw offset, the first character of the command that owns the brace there.
    /// Only set for the braces and brackets that delimit a command's own blocks.
    owners: Vec<Option<char>>,
}

impl TexParser {
    fn new(raw: &str, cursor_index: Option<usize>) -> Self {
        let lexer = Lexer::new(raw);
        let length = lexer.len();
        TexParser {
            lexer,
            cursor_index,
            cursor_placed: false,
            display_tex: String::with_capacity(raw.len() * 2),
            elements: Vec::new(),
            cursor_points: Vec::with_capacity(length + 1),
            new_lines: BTreeMap::new(),
            owners: vec![None; length + 1],
        }
    }

    fn parse(mut self) -> Result<ParsedTex, ParseError> {
        let length = self.lexer.len();
        // Position of the currently open `Begin` in the elements
        let mut open_environment: Option<usize> = None;
        // The very start is always reachable, even before a brace or a space
        self.cursor_points.push(0);

        let mut i = 0;
        while i < length {
            let index = i;
            let mut resume_at = index;
            let Some(c) = self.lexer.char_at(index) else {
                break;
            };
            let next = self.lexer.char_at(index + 1);
            let near_closure = next.map(is_near_closure).unwrap_or(false);
            let is_inside_environment = open_environment.is_some();
            let wrap_in_braces = matches!(c, ',' | '<' | '>') || is_number(c);
            let is_relation = c == '\\' && self.is_relation_command_ahead(index);

            self.add_cursor_marker(index);

            if wrap_in_braces || is_relation {
                self.display_tex.push('{');
            }

            // Closing a command block
            if c == '}' && self.lexer.char_before(index) != Some('\\') && !self.is_owned_by_script(index) {
                self.display_tex.push_str(SPACING_TEX);
            }

            self.display_tex.push(c);

            if wrap_in_braces {
                self.display_tex.push('}');
            }

            if is_number(c) {
                self.elements.push(Element::Number(Token::new(
                    index,
                    grammar::DisplayType::Number,
                    near_closure,
                )));
            }

            if is_variable(c) {
                self.elements.push(Element::Variable(Token::new(
                    index,
                    grammar::DisplayType::Identifier,
                    near_closure,
                )));
            }

            if is_operator(c) && !self.is_owned(index) {
                self.elements.push(Element::Operator(Token::new(
                    index,
                    grammar::DisplayType::Operator,
                    near_closure,
                )));
            }

            if c == '\\' {
                match next {
                    Some(escaped) if is_escaped_operator(escaped) => {
                        let near_closure = self
                            .lexer
                            .char_at(index + 2)
                            .map(is_near_closure)
                            .unwrap_or(false);
                        self.elements.push(Element::Operator(Token {
                            index,
                            display_type: grammar::escaped_display_type(escaped),
                            near_closure,
                            extent: Some(tex_input::Span::new(index, index + 2)),
                        }));
                        self.display_tex.push(escaped);
                        resume_at = index + 1;
                    }
                    Some('\\') => {
                        if !is_inside_environment {
                            let new_line = NewLine {
                                start: index,
                                end: index + 1,
                            };
                            self.new_lines.insert(index, new_line);
                            self.new_lines.insert(index + 1, new_line);
                            self.elements.push(Element::EndOfLine { index });
                        }
                        self.display_tex.push('\\');
                        resume_at = index + 1;

                        if is_inside_environment && self.is_empty_cell_ahead(index + 2) {
                            self.display_tex.push_str(EMPTY_TEX);
                        }
                    }
                    Some(letter) if is_variable(letter) => {
                        let parsed = self.parse_command(index)?;
                        match parsed.edge {
                            Some(CommandEdge::Begin {
                                element_index,
                                end,
                            }) => {
                                open_environment = Some(element_index);
                                if self.is_empty_cell_ahead(end + 1) {
                                    self.display_tex.push_str(EMPTY_TEX);
                                }
                            }
                            Some(CommandEdge::End) => {
                                let begin = open_environment
                                    .take()
                                    .ok_or(ParseError::UnmatchedEnd { start: index })?;
                                self.split_cells(begin, index);
                            }
                            None => {}
                        }
                        resume_at = parsed.continue_at;
                    }
                    _ => {}
                }
            }

            if is_sup_or_sub(c) {
                resume_at = self.parse_command(index)?.continue_at;
            }

            let is_cursor_point = match c {
                // Opening a block
                '{' => {
                    if next == Some('}') {
                        self.add_cursor_marker(index + 1);
                        self.display_tex.push_str(EMPTY_TEX);
                    } else if !self.is_owned_by_script(index) && !is_inside_environment {
                        self.display_tex.push_str(SPACING_TEX);
                    }
                    false
                }
                ' ' => false,
                '&' => {
                    if self.is_empty_cell_ahead(index + 1) {
                        self.display_tex.push_str(EMPTY_TEX);
                    }
                    true
                }
                _ => true,
            };
            if is_cursor_point {
                self.cursor_points.push(index);
            }

            i = resume_at + 1;
        }

        // The last line also ends somewhere
        if length > 0 {
            self.elements.push(Element::EndOfLine { index: length });
        }

        self.add_cursor_marker(length);

        self.cursor_points.push(length);
        self.cursor_points.dedup();

        Ok(ParsedTex {
            length,
            display_tex: self.display_tex,
            elements: self.elements,
            cursor_points: self.cursor_points,
            new_lines: self.new_lines,
        })
    }

    /// Places the caret marker in the display TeX, if it is at the given index and was not placed before.
    pub(crate) fn add_cursor_marker(&mut self, index: usize) {
        let length = self.lexer.len();
        if !self.cursor_placed
            && (self.cursor_index == Some(index) || length == 0 || index == length)
        {
            self.cursor_placed = true;
            self.display_tex.push_str(CURSOR_TEX);
        }
    }

    pub(crate) fn set_owner(&mut self, index: usize, first_char: char) {
        if let Some(owner) = self.owners.get_mut(index) {
            *owner = Some(first_char);
        }
    }

    fn is_owned(&self, index: usize) -> bool {
        matches!(self.owners.get(index), Some(Some(_)))
    }

    pub(crate) fn is_owned_by_script(&self, index: usize) -> bool {
        matches!(self.owners.get(index), Some(Some(c)) if is_sup_or_sub(*c))
    }

    /// Whether a cell starting at the index has no content
    fn is_empty_cell_ahead(&self, index: usize) -> bool {
        self.lexer.char_at(index) == Some('&')
            || self.lexer.find_ahead(index, r"\\")
            || self.lexer.find_ahead(index, r"\end")
    }

    /// Checks for a relation command like `\geq ` at the index.
    fn is_relation_command_ahead(&self, index: usize) -> bool {
        let mut name = String::new();
        let mut i = index + 1;
        while let Some(c) = self.lexer.char_at(i) {
            if c == ' ' {
                return is_relation_command(&name);
            }
            if !is_variable(c) {
                return false;
            }
            name.push(c);
            i += 1;
        }
        false
    }
}
