use serde::{Deserialize, Serialize};

/// The kind of node that the typesetter creates for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum DisplayType {
    /// `mn`
    Number,
    /// `mi`
    Identifier,
    /// `mo`
    Operator,
}

impl DisplayType {
    pub fn class_name(&self) -> &'static str {
        match self {
            DisplayType::Number => "mn",
            DisplayType::Identifier => "mi",
            DisplayType::Operator => "mo",
        }
    }
}
