use placer::Placer;
use serde::{Deserialize, Serialize};

/// Rendering happens outside of the editor, so the rects show up some time after parsing.
#[derive(Debug, Clone)]
pub enum RenderState {
    /// The display TeX is waiting to be typeset
    Parsed { generation: u64 },
    /// The typeset result has been measured, clicks can be resolved
    Measured { generation: u64, placer: Placer },
}

impl RenderState {
    pub fn generation(&self) -> u64 {
        match self {
            RenderState::Parsed { generation } | RenderState::Measured { generation, .. } => {
                *generation
            }
        }
    }

    pub fn placer(&self) -> Option<&Placer> {
        match self {
            RenderState::Parsed { .. } => None,
            RenderState::Measured { placer, .. } => Some(placer),
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, RenderState::Measured { .. })
    }
}

/// What the host has to typeset, and the generation to report back with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub generation: u64,
    pub display_tex: String,
}
