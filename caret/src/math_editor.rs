use grammar::{is_escaped_operator, is_number, is_sup_or_sub, is_symbol, is_variable};
use parser::{parse, ParseError, ParsedTex};
use placer::{Placer, RectProvider};
use serialization::{deserialize_expression, serialize_expression, SerializationError};
use tex_input::{
    direction::HorizontalDirection,
    editing::{editable::Editable, BasicEdit},
    print_helpers::with_caret,
    RawExpression,
};

use crate::{
    caret::MinimalCaret,
    editor_action_builder::EditorActionBuilder,
    editor_error::EditorError,
    options::EditorOptions,
    primitive::{
        movement::move_caret,
        primitive_edit::{insert_at_caret, remove_at_caret},
        CaretRemoveMode, UndoAction,
    },
    render_state::{RenderRequest, RenderState},
    undo_redo_manager::UndoRedoManager,
};

pub use serialization::SerializedDataType;

/// One editing session over a raw expression.
pub struct MathEditor {
    /// User input
    pub(crate) input: RawExpression,
    /// Always in sync with the input and the caret
    pub(crate) parsed: ParsedTex,
    /// Main caret
    pub(crate) caret: MinimalCaret,
    /// Undo-redo stack, will record actual edits
    pub(crate) undo_stack: UndoRedoManager<UndoAction>,
    pub(crate) options: EditorOptions,
    /// Its generation is bumped on every parse
    render_state: RenderState,
}

impl MathEditor {
    pub fn new(options: EditorOptions) -> Result<Self, EditorError> {
        let input = RawExpression::new(options.value.as_str());
        let caret = MinimalCaret::default();
        let parsed = parse(input.as_str(), Some(caret.offset))?;
        Ok(Self {
            input,
            parsed,
            caret,
            undo_stack: UndoRedoManager::new(),
            options,
            render_state: RenderState::Parsed { generation: 0 },
        })
    }

    pub fn get_value(&self) -> &str {
        self.input.as_str()
    }

    pub fn caret(&self) -> MinimalCaret {
        self.caret
    }

    pub fn cursor_index(&self) -> usize {
        self.caret.offset
    }

    pub fn parsed(&self) -> &ParsedTex {
        &self.parsed
    }

    pub fn display_tex(&self) -> &str {
        &self.parsed.display_tex
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// The raw expression with a `|` where the caret is
    pub fn debug_string(&self) -> String {
        with_caret(self.input.as_str(), self.caret.offset)
    }

    /// Replaces the whole expression. This cannot be undone.
    pub fn set_value(&mut self, value: &str, reset_cursor: bool) -> Result<(), EditorError> {
        let caret = if reset_cursor {
            MinimalCaret::default()
        } else {
            self.caret
        };
        self.adopt(RawExpression::new(value), caret)?;
        self.undo_stack.clear();
        Ok(())
    }

    /// Reparses the input. Nothing is changed if the input does not parse.
    /// Returns where the caret ended up.
    pub(crate) fn adopt(
        &mut self,
        input: RawExpression,
        caret: MinimalCaret,
    ) -> Result<MinimalCaret, ParseError> {
        let (parsed, caret) = parse_with_caret(input.as_str(), caret)?;
        self.input = input;
        self.parsed = parsed;
        self.caret = caret;
        self.render_state = RenderState::Parsed {
            generation: self.render_state.generation() + 1,
        };
        if self.options.debug {
            log::info!("Caret at {}", self.debug_string());
        }
        Ok(caret)
    }

    pub fn move_caret(&mut self, direction: HorizontalDirection) {
        let caret = move_caret(self.caret, direction, &self.parsed.cursor_points);
        self.set_caret(caret);
    }

    pub fn move_cursor_left(&mut self) {
        self.move_caret(HorizontalDirection::Left);
    }

    pub fn move_cursor_right(&mut self) {
        self.move_caret(HorizontalDirection::Right);
    }

    /// Moves the caret without editing anything. Snaps to the closest cursor point.
    pub fn set_caret(&mut self, caret: MinimalCaret) {
        if caret == self.caret {
            return;
        }
        // The input parsed before, only the caret marker moves
        if let Err(error) = self.adopt(self.input.clone(), caret) {
            log::error!("Could not move the caret: {}", error);
        }
    }

    /// Inserts a single number or variable
    pub fn insert(&mut self, value: &str) -> Result<(), EditorError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_number(c) || is_variable(c) => self.insert_text(value),
            _ => Err(EditorError::InvalidCharacter(value.to_string())),
        }
    }

    /// Inserts an operator. Braces and `%` are escaped.
    pub fn insert_symbol(&mut self, symbol: &str) -> Result<(), EditorError> {
        if !is_symbol(symbol) {
            return Err(EditorError::InvalidSymbol(symbol.to_string()));
        }
        if symbol.chars().all(is_escaped_operator) {
            self.insert_text(&format!("\\{}", symbol))
        } else {
            self.insert_text(symbol)
        }
    }

    /// Inserts a command like `\frac{}{}`, and puts the caret into its first block.
    /// A command without blocks gets a trailing space instead.
    pub fn insert_command(
        &mut self,
        name: &str,
        block_count: usize,
        brackets: bool,
    ) -> Result<(), EditorError> {
        let mut name_chars = name.chars();
        let is_script = matches!(
            (name_chars.next(), name_chars.next()),
            (Some(c), None) if is_sup_or_sub(c)
        );

        let mut command = String::new();
        if !name.starts_with('\\') && !is_script {
            command.push('\\');
        }
        command.push_str(name);
        if brackets {
            command.push_str("[]");
        }
        if block_count == 0 {
            command.push(' ');
            return self.insert_text(&command);
        }

        command.push('{');
        let caret_after = MinimalCaret::new(self.caret.offset + command.chars().count());
        command.push('}');
        for _ in 1..block_count {
            command.push_str("{}");
        }

        let mut builder = EditorActionBuilder::new(self);
        let offset = builder.caret.offset;
        builder.add_edit(BasicEdit::insert(offset, command));
        builder.finish(caret_after)?;
        Ok(())
    }

    /// Inserts an empty `bmatrix`
    pub fn insert_matrix(&mut self, columns: usize, rows: usize) -> Result<(), EditorError> {
        if columns == 0 || rows == 0 {
            return Err(EditorError::InvalidMatrixSize { columns, rows });
        }
        let row = "&".repeat(columns - 1);
        let matrix = format!(
            r"\begin{{bmatrix}}{}\end{{bmatrix}}",
            vec![row; rows].join(r"\\")
        );
        self.insert_text(&matrix)
    }

    /// Inserts a `\\`, which breaks the line outside of tables
    pub fn insert_line_break(&mut self) -> Result<(), EditorError> {
        self.insert_text(r"\\")
    }

    fn insert_text(&mut self, text: &str) -> Result<(), EditorError> {
        let mut builder = EditorActionBuilder::new(self);
        let (edits, caret_after) = insert_at_caret(builder.caret, text);
        builder.add_edits(edits);
        builder.finish(caret_after)?;
        Ok(())
    }

    /// Deletes whatever is next to the caret. Commands are always deleted as a whole.
    pub fn remove_at_caret(&mut self, mode: CaretRemoveMode) -> Result<(), EditorError> {
        let Some((edits, caret_after)) =
            remove_at_caret(&self.input, &self.parsed, self.caret, mode)
        else {
            return Ok(());
        };
        let mut builder = EditorActionBuilder::new(self);
        builder.add_edits(edits);
        builder.finish(caret_after)?;
        Ok(())
    }

    /// Backspace
    pub fn erase(&mut self) -> Result<(), EditorError> {
        self.remove_at_caret(CaretRemoveMode::Left)
    }

    pub fn delete(&mut self) -> Result<(), EditorError> {
        self.remove_at_caret(CaretRemoveMode::Right)
    }

    pub fn undo(&mut self) -> Option<()> {
        let action = self.undo_stack.undo()?;
        if let Err(error) = self.apply_action(action) {
            log::error!("Could not undo: {}", error);
            self.undo_stack.restore_undo();
            return None;
        }
        Some(())
    }

    pub fn redo(&mut self) -> Option<()> {
        let action = self.undo_stack.redo()?;
        if let Err(error) = self.apply_action(action) {
            log::error!("Could not redo: {}", error);
            self.undo_stack.restore_redo();
            return None;
        }
        Some(())
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn apply_action(&mut self, action: UndoAction) -> Result<(), ParseError> {
        match action {
            UndoAction::CaretEdit(caret_edit) => {
                let mut input = self.input.clone();
                input.apply_edits(&caret_edit.edits);
                self.adopt(input, caret_edit.caret_after)?;
            }
        }
        Ok(())
    }

    pub fn copy(&self, data_type: SerializedDataType) -> Result<String, SerializationError> {
        serialize_expression(&self.input, data_type)
    }

    /// Inserts pasted data at the caret. It has to be a valid expression on its own.
    pub fn paste(
        &mut self,
        data: String,
        data_type: Option<SerializedDataType>,
    ) -> Result<(), EditorError> {
        let expression = deserialize_expression(data, data_type)?;
        parse(expression.as_str(), None)?;
        self.insert_text(expression.as_str())
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render_state
    }

    /// What the host should typeset next
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            generation: self.render_state.generation(),
            display_tex: self.parsed.display_tex.clone(),
        }
    }

    /// Called by the host once the display TeX has been typeset and laid out.
    /// Measurements of an older parse are ignored.
    pub fn finish_render(&mut self, generation: u64, provider: &impl RectProvider) -> bool {
        let latest = self.render_state.generation();
        if generation != latest {
            log::debug!(
                "Ignoring render of generation {}, the latest is {}",
                generation,
                latest
            );
            return false;
        }
        let placer = Placer::new(&self.parsed, provider);
        self.render_state = RenderState::Measured { generation, placer };
        true
    }

    /// Moves the caret to where the user clicked.
    /// Returns the new caret offset, or `None` if nothing was hit.
    pub fn locate(&mut self, x: f64, y: f64) -> Option<usize> {
        let Some(placer) = self.render_state.placer() else {
            log::debug!("Click before the formula was measured");
            return None;
        };
        let offset = placer.locate(x, y)?;
        self.set_caret(MinimalCaret::new(offset));
        Some(self.caret.offset)
    }
}

/// Parses with the caret marker in place. A caret that is not on a cursor point is moved to the left.
fn parse_with_caret(value: &str, caret: MinimalCaret) -> Result<(ParsedTex, MinimalCaret), ParseError> {
    let parsed = parse(value, Some(caret.offset))?;
    if parsed.is_cursor_point(caret.offset) {
        return Ok((parsed, caret));
    }
    let caret = caret.snapped(&parsed.cursor_points);
    Ok((parse(value, Some(caret.offset))?, caret))
}
