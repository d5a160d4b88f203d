use serde::{Deserialize, Serialize};

/// Where the caret is in the raw expression.
/// Always one of the cursor points of the latest parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct MinimalCaret {
    pub offset: usize,
}

impl MinimalCaret {
    pub fn new(offset: usize) -> Self {
        MinimalCaret { offset }
    }

    /// The greatest cursor point that is not after the caret.
    /// Used after the raw expression was replaced.
    pub fn snapped(self, cursor_points: &[usize]) -> Self {
        match cursor_points.binary_search(&self.offset) {
            Ok(_) => self,
            Err(0) => MinimalCaret::new(0),
            Err(position) => MinimalCaret::new(cursor_points[position - 1]),
        }
    }
}

impl From<usize> for MinimalCaret {
    fn from(offset: usize) -> Self {
        MinimalCaret::new(offset)
    }
}
