use caret::{
    CaretRemoveMode, EditorError, EditorOptions, MathEditor, RenderRequest, SerializedDataType,
};
use placer::{Rect, RectQuery};
use serde::Serialize;
use tex_input::direction::HorizontalDirection;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Whatever typeset the display TeX. Answers with a `Rect`, or `null` if the node does not exist.
    pub type RenderHost;

    #[wasm_bindgen(method, js_name = rectOf)]
    fn rect_of(this: &RenderHost, query: JsValue) -> JsValue;
}

#[wasm_bindgen]
pub struct MathEditorBindings {
    editor: MathEditor,
    serializer: serde_wasm_bindgen::Serializer,
}

#[wasm_bindgen]
impl MathEditorBindings {
    /// Takes an optional `EditorOptions` object
    pub fn new(options: JsValue) -> Result<MathEditorBindings, JsValue> {
        let options: EditorOptions = if options.is_undefined() || options.is_null() {
            EditorOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self {
            editor: MathEditor::new(options).map_err(to_js_error)?,
            // Do note that large numbers won't be serialized correctly, because JS doesn't have 64 bit integers.
            serializer: serde_wasm_bindgen::Serializer::new(),
        })
    }

    pub fn get_value(&self) -> String {
        self.editor.get_value().to_string()
    }

    pub fn set_value(&mut self, value: &str, reset_cursor: bool) -> Result<(), JsValue> {
        self.editor
            .set_value(value, reset_cursor)
            .map_err(to_js_error)
    }

    pub fn cursor_index(&self) -> usize {
        self.editor.cursor_index()
    }

    pub fn display_tex(&self) -> String {
        self.editor.display_tex().to_string()
    }

    pub fn debug_string(&self) -> String {
        self.editor.debug_string()
    }

    pub fn move_caret(&mut self, direction: HorizontalDirection) {
        self.editor.move_caret(direction);
    }

    pub fn move_cursor_left(&mut self) {
        self.editor.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.editor.move_cursor_right();
    }

    pub fn insert(&mut self, value: &str) -> Result<(), JsValue> {
        self.editor.insert(value).map_err(to_js_error)
    }

    pub fn insert_symbol(&mut self, symbol: &str) -> Result<(), JsValue> {
        self.editor.insert_symbol(symbol).map_err(to_js_error)
    }

    pub fn insert_command(
        &mut self,
        name: &str,
        block_count: usize,
        brackets: bool,
    ) -> Result<(), JsValue> {
        self.editor
            .insert_command(name, block_count, brackets)
            .map_err(to_js_error)
    }

    pub fn insert_matrix(&mut self, columns: usize, rows: usize) -> Result<(), JsValue> {
        self.editor
            .insert_matrix(columns, rows)
            .map_err(to_js_error)
    }

    pub fn remove_at_caret(&mut self, mode: CaretRemoveMode) -> Result<(), JsValue> {
        self.editor.remove_at_caret(mode).map_err(to_js_error)
    }

    pub fn erase(&mut self) -> Result<(), JsValue> {
        self.editor.erase().map_err(to_js_error)
    }

    pub fn delete(&mut self) -> Result<(), JsValue> {
        self.editor.delete().map_err(to_js_error)
    }

    /// Takes the `key` of a keyboard event
    pub fn handle_key(&mut self, key: &str) -> Result<(), JsValue> {
        self.editor.handle_key_name(key).map_err(to_js_error)
    }

    pub fn handle_text_input(&mut self, text: &str) -> Result<(), JsValue> {
        self.editor.handle_text_input(text).map_err(to_js_error)
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    pub fn copy(&self, data_type: SerializedDataType) -> Result<String, JsValue> {
        self.editor
            .copy(data_type)
            .map_err(|error| to_js_error(error.into()))
    }

    /// Leave out the data type to detect it
    pub fn paste(
        &mut self,
        data: String,
        data_type: Option<SerializedDataType>,
    ) -> Result<(), JsValue> {
        self.editor.paste(data, data_type).map_err(to_js_error)
    }

    pub fn render_request(&self) -> Result<JsValue, JsValue> {
        let request: RenderRequest = self.editor.render_request();
        Ok(request.serialize(&self.serializer)?)
    }

    /// Measures the typeset formula. Returns `false` if the generation is outdated.
    pub fn finish_render(&mut self, generation: JsValue, host: &RenderHost) -> Result<bool, JsValue> {
        let generation: u64 = serde_wasm_bindgen::from_value(generation)?;
        let serializer = &self.serializer;
        let provider = |query: &RectQuery| -> Option<Rect> {
            let query = match query.serialize(serializer) {
                Ok(query) => query,
                Err(error) => {
                    log::error!("Could not serialize {:?}: {}", query, error);
                    return None;
                }
            };
            let rect = host.rect_of(query);
            if rect.is_null() || rect.is_undefined() {
                return None;
            }
            serde_wasm_bindgen::from_value(rect)
                .map_err(|error| log::error!("Invalid rect: {}", error))
                .ok()
        };
        Ok(self.editor.finish_render(generation, &provider))
    }

    /// Moves the caret to a click. Returns the new cursor index.
    pub fn locate(&mut self, x: f64, y: f64) -> Option<usize> {
        self.editor.locate(x, y)
    }
}

fn to_js_error(error: EditorError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
