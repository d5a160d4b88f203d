use parser::ScriptKind;
use serde::{Deserialize, Serialize};

/// A bounding box in screen coordinates, like the ones that `getBoundingClientRect` returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Rect {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn contains_y(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// The n-th rendered node with the given class, counted in document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct ElementKey {
    /// Like `mn`, `mfrac` or `mtable`
    pub class: String,
    pub nth: usize,
}

impl ElementKey {
    pub fn new(class: impl Into<String>, nth: usize) -> Self {
        ElementKey {
            class: class.into(),
            nth,
        }
    }
}

/// A part inside of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub enum NodePart {
    Numerator,
    Denominator,
    /// The glyph of the index of a root
    RootIndex,
    Radicand,
    /// The superscript or subscript
    Script(ScriptKind),
    /// The k-th empty placeholder inside of a table
    EmptyPlaceholder(usize),
    /// The box that wraps one line
    LineBox,
}

/// What the host is asked to measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(tag = "query", rename_all = "camelCase")]
pub enum RectQuery {
    Node { key: ElementKey },
    Part { key: ElementKey, part: NodePart },
    /// The whole rendered formula
    Math,
    /// The area that the formula is displayed in
    Display,
}

/// Measures the rendered display TeX. Implemented by whatever did the typesetting.
pub trait RectProvider {
    /// Returns `None` when there is no such node
    fn rect_of(&self, query: &RectQuery) -> Option<Rect>;
}

impl<F> RectProvider for F
where
    F: Fn(&RectQuery) -> Option<Rect>,
{
    fn rect_of(&self, query: &RectQuery) -> Option<Rect> {
        self(query)
    }
}
