use grammar::DisplayType;
use serde::{Deserialize, Serialize};
use tex_input::Span;

/// One semantic unit of the raw expression.
/// Elements are stored in the order in which they appear in the raw expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "is", rename_all = "camelCase")]
pub enum Element {
    Number(Token),
    Variable(Token),
    Operator(Token),
    Command(Command),
    /// `\begin{name}`, together with the cells of its table
    Begin(Environment),
    /// `\end{name}`, never has cells
    End(Environment),
    /// A line break, or the end of the last line
    EndOfLine { index: usize },
    /// The typesetter creates an extra node around every environment.
    /// This keeps the node counting in the hit-tester aligned.
    Skip,
}

impl Element {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Number(token) | Element::Variable(token) | Element::Operator(token) => {
                Some(token)
            }
            _ => None,
        }
    }
}

/// A number, variable or operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub index: usize,
    pub display_type: DisplayType,
    /// Followed by a `}` or a `]`
    pub near_closure: bool,
    /// Set when the token is written with more than one character, like `\{` or `\alpha `.
    /// Those can only be deleted as a whole.
    pub extent: Option<Span>,
}

impl Token {
    pub fn new(index: usize, display_type: DisplayType, near_closure: bool) -> Self {
        Token {
            index,
            display_type,
            near_closure,
            extent: None,
        }
    }

    /// The offset right after the token
    pub fn end(&self) -> usize {
        self.extent.map(|extent| extent.end).unwrap_or(self.index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum ScriptKind {
    Sup,
    Sub,
}

impl ScriptKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(ScriptKind::Sup),
            '_' => Some(ScriptKind::Sub),
            _ => None,
        }
    }
}

/// A `{...}` block of a command. The indices point at the braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub open_index: usize,
    pub close_index: usize,
    /// `close_index - open_index`, so an empty block has a length of 1
    pub length: usize,
    pub contents: String,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.length == 1
    }
}

/// The optional `[...]` of a command, like the index of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct Brackets {
    pub open_index: usize,
    pub close_index: usize,
}

impl Brackets {
    pub fn is_empty(&self) -> bool {
        self.close_index - self.open_index == 1
    }
}

/// A command with blocks, like `\frac{a}{b}`, `\sqrt[3]{x}` or `^{2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Without the backslash. Empty for `^` and `_`.
    pub name: String,
    pub start: usize,
    /// Index of the last character, usually the last `}`
    pub end: usize,
    /// The first `{` or `[`
    pub opening: usize,
    pub blocks: Vec<Block>,
    pub brackets: Option<Brackets>,
    pub sub_kind: Option<ScriptKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Fraction,
    SquareRoot,
    /// `\sqrt` with an index
    Root,
    Script(ScriptKind),
    Other,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        if let Some(sub_kind) = self.sub_kind {
            return CommandKind::Script(sub_kind);
        }
        match self.name.as_str() {
            "frac" => CommandKind::Fraction,
            "sqrt" if self.brackets.is_some() => CommandKind::Root,
            "sqrt" => CommandKind::SquareRoot,
            _ => CommandKind::Other,
        }
    }

    /// The class of the node that the typesetter creates for this command
    pub fn class_name(&self) -> String {
        match self.kind() {
            CommandKind::Fraction => "mfrac".to_string(),
            CommandKind::SquareRoot => "msqrt".to_string(),
            CommandKind::Root => "mroot".to_string(),
            CommandKind::Script(_) => "msubsup".to_string(),
            CommandKind::Other => format!("m{}", self.name),
        }
    }

    /// The whole command, from the backslash to the last brace
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end + 1)
    }

    /// Whether the offset is one of the braces or brackets that belong to this command
    pub fn is_delimiter(&self, offset: usize) -> bool {
        let is_bracket = self
            .brackets
            .map(|brackets| brackets.open_index == offset || brackets.close_index == offset)
            .unwrap_or(false);
        is_bracket
            || self
                .blocks
                .iter()
                .any(|block| block.open_index == offset || block.close_index == offset)
    }
}

/// `\begin{name}` or `\end{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Like `matrix` or `bmatrix`
    pub name: String,
    pub start: usize,
    /// Index of the closing `}`
    pub end: usize,
    /// The raw content of every cell, row by row
    pub cells: Vec<Span>,
}

impl Environment {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end + 1)
    }
}
