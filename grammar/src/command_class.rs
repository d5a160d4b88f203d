use serde::{Deserialize, Serialize};

use crate::DisplayType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum CommandClass {
    /// Greek letters and `%`, rendered like a variable
    VariableLike,
    /// Everything else, including unknown commands
    OperatorLike,
    /// `\begin` and `\end`
    TableEnvironment,
}

impl CommandClass {
    /// Only meaningful for commands that end up as a single token
    pub fn display_type(&self) -> DisplayType {
        match self {
            CommandClass::VariableLike => DisplayType::Identifier,
            CommandClass::OperatorLike | CommandClass::TableEnvironment => DisplayType::Operator,
        }
    }
}

const VARIABLE_LIKE_COMMANDS: [&str; 38] = [
    "alpha",
    "beta",
    "gamma",
    "Gamma",
    "delta",
    "Delta",
    "epsilon",
    "varepsilon",
    "zeta",
    "eta",
    "theta",
    "vartheta",
    "Theta",
    "iota",
    "kappa",
    "lambda",
    "mu",
    "nu",
    "xi",
    "Xi",
    "pi",
    "Pi",
    "rho",
    "varrho",
    "sigma",
    "Sigma",
    "tau",
    "upsilon",
    "Upsilon",
    "phi",
    "varphi",
    "Phi",
    "chi",
    "psi",
    "Psi",
    "omega",
    "Omega",
    "%",
];

pub fn classify_command(name: &str) -> CommandClass {
    match name {
        "begin" | "end" => CommandClass::TableEnvironment,
        name if VARIABLE_LIKE_COMMANDS.contains(&name) => CommandClass::VariableLike,
        _ => CommandClass::OperatorLike,
    }
}
