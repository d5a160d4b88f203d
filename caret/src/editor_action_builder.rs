use std::ops::Deref;

use tex_input::editing::{editable::Editable, BasicEdit};

use crate::{
    caret::MinimalCaret, editor_error::EditorError, math_editor::MathEditor, primitive::CaretEdit,
};

/// Almost every function in the math editor delays the actual editing until the end of the function.
/// So this struct is used to build up the edits and then convert it into a CaretEdit at the end.
/// The edits only go through if the result still parses.
#[must_use]
pub struct EditorActionBuilder<'editor> {
    editor: &'editor mut MathEditor,
    caret_before: MinimalCaret,
    edits: Vec<BasicEdit>,
}

impl<'editor> EditorActionBuilder<'editor> {
    pub fn new(editor: &'editor mut MathEditor) -> Self {
        let caret_before = editor.caret;
        Self {
            editor,
            caret_before,
            edits: Vec::new(),
        }
    }

    pub fn add_edit(&mut self, edit: BasicEdit) {
        self.edits.push(edit);
    }

    pub fn add_edits(&mut self, edits: Vec<BasicEdit>) {
        self.edits.extend(edits);
    }

    pub fn finish(self, caret_after: MinimalCaret) -> Result<CaretEdit, EditorError> {
        let mut input = self.editor.input.clone();
        input.apply_edits(&self.edits);
        let caret_after = self.editor.adopt(input, caret_after)?;

        let edit = CaretEdit {
            caret_before: self.caret_before,
            caret_after,
            edits: self.edits,
        };
        if !edit.is_empty() {
            self.editor.undo_stack.push(edit.clone().into());
        }
        Ok(edit)
    }
}

impl<'editor> Deref for EditorActionBuilder<'editor> {
    type Target = MathEditor;

    fn deref(&self) -> &Self::Target {
        self.editor
    }
}
