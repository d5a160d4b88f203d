use tex_input::editing::invertible::Invertible;

pub struct UndoRedoManager<T>
where
    T: Invertible + Clone,
{
    /// Undo-stack, with *normal* actions.
    /// Have to be inverted before they can be applied.
    undo_stack: Vec<T>,

    /// Redo-stack, with *normal* actions.
    /// Can simply be applied.
    redo_stack: Vec<T>,
}

impl<T: Invertible + Clone> UndoRedoManager<T> {
    pub fn new() -> Self {
        Self {
            undo_stack: vec![],
            redo_stack: vec![],
        }
    }

    /// Push a redo-action to the undo-stack and clear the redo-stack.
    pub fn push(&mut self, action: T) {
        self.undo_stack.push(action);
        self.redo_stack = Vec::new();
    }

    /// Take an undo-action
    pub fn undo(&mut self) -> Option<T::Inverse> {
        let action = self.undo_stack.pop()?;
        let inverse_action = action.inverse();
        self.redo_stack.push(action);
        Some(inverse_action)
    }

    /// Take a redo-action
    pub fn redo(&mut self) -> Option<T> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Puts an undo-action back, when it could not be applied
    pub fn restore_undo(&mut self) {
        if let Some(action) = self.redo_stack.pop() {
            self.undo_stack.push(action);
        }
    }

    /// Puts a redo-action back, when it could not be applied
    pub fn restore_redo(&mut self) {
        if let Some(action) = self.undo_stack.pop() {
            self.redo_stack.push(action);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T: Invertible + Clone> Default for UndoRedoManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
