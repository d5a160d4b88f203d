mod command;
pub mod element;
mod environment;
mod lexer;
pub mod parse_error;
pub mod tex;

pub use element::{Block, Brackets, Command, CommandKind, Element, Environment, ScriptKind, Token};
pub use parse_error::ParseError;
pub use tex::{parse, NewLine, ParsedTex};
