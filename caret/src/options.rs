use serde::{Deserialize, Serialize};

/// How the editor behaves. Every field can be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Logs every caret change
    pub debug: bool,
    /// Enter inserts a line break
    pub new_line: bool,
    /// The initial raw expression
    pub value: String,
}
