//! Hit-testing for the typeset formula.
//!
//! The host measures the rendered nodes, and the placer turns a click into a raw offset.

mod interval;
mod placer;
mod rect;

pub use interval::{Interval, IntervalKind};
pub use placer::{Placer, LINE_EDGE_WIDTH};
pub use rect::{ElementKey, NodePart, Rect, RectProvider, RectQuery};
