use grammar::{char_to_command, is_number, is_symbol, is_variable};
use serde::{Deserialize, Serialize};

use crate::{editor_error::EditorError, math_editor::MathEditor};

/// The keys that the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum EditorKey {
    Left,
    Right,
    Backspace,
    Delete,
    Enter,
}

impl EditorKey {
    /// Takes the `key` of a browser keyboard event
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(EditorKey::Left),
            "ArrowRight" | "Right" => Some(EditorKey::Right),
            "Backspace" => Some(EditorKey::Backspace),
            "Delete" | "Del" => Some(EditorKey::Delete),
            "Enter" => Some(EditorKey::Enter),
            _ => None,
        }
    }
}

impl MathEditor {
    pub fn handle_key(&mut self, key: EditorKey) -> Result<(), EditorError> {
        match key {
            EditorKey::Left => self.move_cursor_left(),
            EditorKey::Right => self.move_cursor_right(),
            EditorKey::Backspace => self.erase()?,
            EditorKey::Delete => self.delete()?,
            EditorKey::Enter => {
                if self.options.new_line {
                    self.insert_line_break()?;
                }
            }
        }
        Ok(())
    }

    /// Like [`MathEditor::handle_key`], for keys that might not be known
    pub fn handle_key_name(&mut self, name: &str) -> Result<(), EditorError> {
        match EditorKey::from_key_name(name) {
            Some(key) => self.handle_key(key),
            None => {
                if self.options.debug {
                    log::warn!("The key {} was pressed", name);
                }
                Ok(())
            }
        }
    }

    /// Typed text. Every character is inserted on its own, and unknown characters are dropped.
    pub fn handle_text_input(&mut self, text: &str) -> Result<(), EditorError> {
        for c in text.trim().chars() {
            let mut buffer = [0; 4];
            let value: &str = c.encode_utf8(&mut buffer);
            if is_number(c) || is_variable(c) {
                self.insert(value)?;
            } else if let Some(command) = char_to_command(c) {
                self.insert_command(command, 0, false)?;
            } else if is_symbol(value) {
                self.insert_symbol(value)?;
            } else {
                log::debug!("Ignoring typed {:?}", c);
            }
        }
        Ok(())
    }
}
