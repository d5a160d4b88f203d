use grammar::{classify_command, is_near_closure, is_relation_command, is_variable, CommandClass};
use grammar::{EMPTY_TEX, SPACING_TEX};
use tex_input::Span;

use crate::{
    element::{Block, Brackets, Command, Element, Environment, ScriptKind, Token},
    parse_error::ParseError,
    tex::TexParser,
};

/// Tells the main loop that a table environment was opened or closed.
pub(crate) enum CommandEdge {
    Begin {
        /// Where the `Begin` element lives, so that its cells can be filled in later
        element_index: usize,
        /// Index of the `}` after the environment name
        end: usize,
    },
    End,
}

pub(crate) struct ParsedCommand {
    /// The main loop resumes right after this index
    pub continue_at: usize,
    pub edge: Option<CommandEdge>,
}

impl TexParser {
    /// Scans a command starting at a backslash, `^` or `_`.
    ///
    /// The command's name goes into the display TeX here. Its blocks are left to the main loop,
    /// which is why a command usually continues at its opening delimiter.
    pub(crate) fn parse_command(&mut self, start: usize) -> Result<ParsedCommand, ParseError> {
        let first = self
            .lexer
            .char_at(start)
            .ok_or(ParseError::UnterminatedCommand { start })?;
        let sub_kind = ScriptKind::from_char(first);

        let mut name = String::new();
        let mut opening: Option<usize> = None;
        let mut end: Option<usize> = None;
        let mut depth = 0usize;
        let mut blocks: Vec<Block> = Vec::new();
        let mut open_block: Option<usize> = None;
        let mut open_bracket: Option<usize> = None;
        let mut brackets: Option<Brackets> = None;

        let mut i = start + 1;
        while let Some(c) = self.lexer.char_at(i) {
            if opening.is_none() {
                match c {
                    c if sub_kind.is_none() && is_variable(c) => {
                        self.display_tex.push(c);
                        name.push(c);
                        i += 1;
                        continue;
                    }
                    ' ' => {
                        return Ok(self.finish_token_command(start, i, &name));
                    }
                    '{' => {}
                    '[' if sub_kind.is_none() => {}
                    found => return Err(ParseError::InvalidCommandName { start, found }),
                }
            }

            if opening.is_some() && self.lexer.is_escaped_brace(i) {
                i += 2;
                continue;
            }

            let next = self.lexer.char_at(i + 1);

            // Inside the brackets, braces only nest
            if let Some(open_index) = open_bracket {
                match c {
                    '{' => depth += 1,
                    '}' => depth = depth.saturating_sub(1),
                    ']' if depth == 0 => {
                        open_bracket = None;
                        brackets = Some(Brackets {
                            open_index,
                            close_index: i,
                        });
                        self.set_owner(i, first);
                        if next != Some('{') {
                            end = Some(i);
                            break;
                        }
                    }
                    _ => {}
                }
                i += 1;
                continue;
            }

            match c {
                '[' if depth == 0 && blocks.is_empty() && brackets.is_none() => {
                    open_bracket = Some(i);
                    self.set_owner(i, first);
                    if opening.is_none() {
                        opening = Some(i);
                        self.display_tex.push('[');
                        if next == Some(']') {
                            self.add_cursor_marker(i + 1);
                            self.display_tex.push_str(EMPTY_TEX);
                        }
                    }
                }
                '{' => {
                    if depth == 0 {
                        open_block = Some(i);
                        self.set_owner(i, first);
                        if opening.is_none() {
                            opening = Some(i);
                            self.display_tex.push('{');
                            let is_environment =
                                classify_command(&name) == CommandClass::TableEnvironment;
                            if !is_environment {
                                if sub_kind.is_none() {
                                    self.display_tex.push_str(SPACING_TEX);
                                }
                                self.add_cursor_marker(i + 1);
                                if next == Some('}') {
                                    self.display_tex.push_str(EMPTY_TEX);
                                }
                            }
                        }
                    }
                    depth += 1;
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some(open_index) = open_block.take() {
                            blocks.push(Block {
                                open_index,
                                close_index: i,
                                length: i - open_index,
                                contents: self.lexer.slice(open_index + 1, i),
                            });
                            self.set_owner(i, first);
                        }
                        if next != Some('{') {
                            end = Some(i);
                            break;
                        }
                    }
                }
                _ => {}
            }
            i += 1;
        }

        let (Some(opening), Some(end)) = (opening, end) else {
            return Err(ParseError::UnterminatedCommand { start });
        };

        if classify_command(&name) == CommandClass::TableEnvironment {
            let environment_name = blocks
                .first()
                .map(|block| block.contents.clone())
                .unwrap_or_default();
            self.display_tex.push_str(&environment_name);
            self.display_tex.push('}');

            let environment = Environment {
                name: environment_name,
                start,
                end,
                cells: Vec::new(),
            };
            let edge = if name == "begin" {
                self.elements.push(Element::Skip);
                self.elements.push(Element::Begin(environment));
                CommandEdge::Begin {
                    element_index: self.elements.len() - 1,
                    end,
                }
            } else {
                self.elements.push(Element::End(environment));
                self.elements.push(Element::Skip);
                CommandEdge::End
            };
            return Ok(ParsedCommand {
                continue_at: end,
                edge: Some(edge),
            });
        }

        self.elements.push(Element::Command(Command {
            name,
            start,
            end,
            opening,
            blocks,
            brackets,
            sub_kind,
        }));

        Ok(ParsedCommand {
            continue_at: opening,
            edge: None,
        })
    }

    /// A command without blocks, like `\alpha `. It renders as a single token.
    fn finish_token_command(&mut self, start: usize, end: usize, name: &str) -> ParsedCommand {
        self.display_tex.push(' ');
        if is_relation_command(name) {
            self.display_tex.push('}');
        }

        let near_closure = self
            .lexer
            .char_at(end + 1)
            .map(is_near_closure)
            .unwrap_or(false);
        let display_type = classify_command(name).display_type();
        let token = Token {
            index: start,
            display_type,
            near_closure,
            extent: Some(Span::new(start, end + 1)),
        };
        self.elements.push(match classify_command(name) {
            CommandClass::VariableLike => Element::Variable(token),
            _ => Element::Operator(token),
        });

        ParsedCommand {
            continue_at: end,
            edge: None,
        }
    }
}
