//! The fixed TeX subset that the editor understands.
//!
//! Everything in here is plain data. The parser and the editor decide what to do with it.

pub mod command_class;
pub mod display_type;

pub use command_class::{classify_command, CommandClass};
pub use display_type::DisplayType;

/// Spliced into the display TeX where the caret is. The typesetter knows the `\cursor` macro.
pub const CURSOR_TEX: &str = r"{\cursor}";

/// Shown for empty blocks and empty table cells, so that there is something to click on.
pub const EMPTY_TEX: &str = r"\isEmpty";

/// Inserted next to block braces, so that the caret has some room.
pub const SPACING_TEX: &str = r"\;";

pub const OPERATORS: [char; 15] = [
    '+', '-', '=', '<', '>', ',', '.', ':', ';', '?', '(', ')', '[', ']', '|',
];

/// Only valid when preceded by a backslash
pub const ESCAPED_OPERATORS: [char; 3] = ['{', '}', '%'];

/// A token right before one of these gets a zero-width neighbour when hit-testing
pub const NEAR_CLOSURE: [char; 2] = ['}', ']'];

pub const SUP_OR_SUB: [char; 2] = ['^', '_'];

/// Typed characters that are shortcuts for a command
pub const CHAR_TO_COMMAND: [(char, &str); 2] = [('*', "cdot"), ('/', "div")];

/// Relation commands that have to be wrapped in braces,
/// otherwise the typesetter merges them with their neighbours.
pub const RELATION_COMMANDS: [&str; 24] = [
    "geq",
    "leq",
    "ll",
    "gg",
    "doteq",
    "equiv",
    "approx",
    "cong",
    "simeq",
    "sim",
    "propto",
    "neq",
    "subset",
    "subseteq",
    "nsubseteq",
    "sqsubset",
    "sqsubseteq",
    "preceq",
    "supset",
    "supseteq",
    "nsupseteq",
    "sqsupset",
    "sqsupseteq",
    "succeq",
];

pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_variable(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

pub fn is_escaped_operator(c: char) -> bool {
    ESCAPED_OPERATORS.contains(&c)
}

pub fn is_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_operator(c) || is_escaped_operator(c),
        _ => false,
    }
}

pub fn is_near_closure(c: char) -> bool {
    NEAR_CLOSURE.contains(&c)
}

pub fn is_sup_or_sub(c: char) -> bool {
    SUP_OR_SUB.contains(&c)
}

pub fn is_relation_command(name: &str) -> bool {
    RELATION_COMMANDS.contains(&name)
}

pub fn char_to_command(c: char) -> Option<&'static str> {
    CHAR_TO_COMMAND
        .iter()
        .find(|(shortcut, _)| *shortcut == c)
        .map(|(_, command)| *command)
}

/// How an escaped operator is rendered. `\%` looks like an identifier.
pub fn escaped_display_type(c: char) -> DisplayType {
    match c {
        '%' => DisplayType::Identifier,
        _ => DisplayType::Operator,
    }
}
