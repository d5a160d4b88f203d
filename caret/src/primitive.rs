pub mod caret_edit;
pub mod movement;
pub mod primitive_edit;

pub use caret_edit::{CaretEdit, UndoAction};
pub use primitive_edit::CaretRemoveMode;
