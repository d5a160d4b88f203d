use tex_input::editing::{invertible::Invertible, BasicEdit};

use crate::caret::MinimalCaret;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    CaretEdit(CaretEdit),
}

impl Invertible for UndoAction {
    type Inverse = Self;

    fn inverse(&self) -> Self::Inverse {
        match self {
            UndoAction::CaretEdit(caret_edit) => UndoAction::CaretEdit(caret_edit.inverse()),
        }
    }
}

/// Edits to the raw expression, and where the caret was before and after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretEdit {
    pub caret_before: MinimalCaret,
    pub caret_after: MinimalCaret,
    pub edits: Vec<BasicEdit>,
}

impl CaretEdit {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl Invertible for CaretEdit {
    type Inverse = Self;

    fn inverse(&self) -> Self::Inverse {
        CaretEdit {
            caret_before: self.caret_after,
            caret_after: self.caret_before,
            edits: self.edits.iter().rev().map(|edit| edit.inverse()).collect(),
        }
    }
}

impl From<CaretEdit> for UndoAction {
    fn from(edit: CaretEdit) -> Self {
        UndoAction::CaretEdit(edit)
    }
}
