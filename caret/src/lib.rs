pub mod caret;
mod editor_action_builder;
pub mod editor_error;
pub mod input;
pub mod math_editor;
pub mod options;
pub mod primitive;
pub mod render_state;
mod undo_redo_manager;

pub use caret::MinimalCaret;
pub use editor_error::EditorError;
pub use input::EditorKey;
pub use math_editor::{MathEditor, SerializedDataType};
pub use options::EditorOptions;
pub use primitive::CaretRemoveMode;
pub use render_state::{RenderRequest, RenderState};
