mod math_editor;
mod utils;

pub use math_editor::MathEditorBindings;
use utils::set_panic_hook;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use lol_alloc::{FreeListAllocator, LockedAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: LockedAllocator<FreeListAllocator> =
    LockedAllocator::new(FreeListAllocator::new());

#[wasm_bindgen(start)]
fn main() {
    set_panic_hook();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger was already set up");
    }
}

/// Checks whether a raw expression parses, without creating an editor
#[wasm_bindgen(js_name = isValidTex)]
pub fn is_valid_tex(value: &str) -> bool {
    parser::parse(value, None).is_ok()
}

/// Where the construct that breaks the raw expression starts, or `undefined` if it parses
#[wasm_bindgen(js_name = syntaxErrorAt)]
pub fn syntax_error_at(value: &str) -> Option<usize> {
    parser::parse(value, None).err().map(|error| error.start())
}
