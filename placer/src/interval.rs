use serde::{Deserialize, Serialize};

use crate::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalKind {
    /// A glyph. Clicking its left half goes before it, its right half goes after it.
    Token,
    /// Clicking anywhere inside goes to its index
    Box,
    /// Never clicked directly, only gives the index after the previous token.
    Marker,
}

/// A clickable area, and the raw offset it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub start_x: f64,
    pub end_x: f64,
    pub start_y: f64,
    pub end_y: f64,
    pub index: usize,
    pub kind: IntervalKind,
    /// The box to the right of a line
    pub line_end: bool,
}

impl Interval {
    pub fn token(index: usize, rect: Rect) -> Self {
        Interval::from_rect(index, rect, IntervalKind::Token)
    }

    pub fn boxed(index: usize, rect: Rect) -> Self {
        Interval::from_rect(index, rect, IntervalKind::Box)
    }

    pub fn marker(index: usize) -> Self {
        Interval {
            start_x: 0.0,
            end_x: 0.0,
            start_y: 0.0,
            end_y: 0.0,
            index,
            kind: IntervalKind::Marker,
            line_end: false,
        }
    }

    fn from_rect(index: usize, rect: Rect, kind: IntervalKind) -> Self {
        Interval {
            start_x: rect.left,
            end_x: rect.right,
            start_y: rect.top,
            end_y: rect.bottom,
            index,
            kind,
            line_end: false,
        }
    }

    pub fn is_box(&self) -> bool {
        self.kind == IntervalKind::Box
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.kind != IntervalKind::Marker
            && self.start_x <= x
            && x < self.end_x
            && self.start_y <= y
            && y < self.end_y
    }

    /// Strictly inside of the vertical band
    pub fn is_in_band(&self, y: f64) -> bool {
        self.kind != IntervalKind::Marker && self.start_y < y && y < self.end_y
    }

    pub fn distance_x(&self, x: f64) -> f64 {
        (self.start_x - x).abs().min((self.end_x - x).abs())
    }

    pub fn is_right_half(&self, x: f64) -> bool {
        x > self.start_x + (self.end_x - self.start_x) / 2.0
    }
}
