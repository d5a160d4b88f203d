use caret::{
    EditorError, EditorKey, EditorOptions, MathEditor, MinimalCaret, SerializedDataType,
};
use placer::{ElementKey, Rect, RectQuery};

fn new_editor(value: &str) -> MathEditor {
    let mut editor = MathEditor::new(EditorOptions::default()).unwrap();
    editor.set_value(value, true).unwrap();
    editor
}

fn editor_at(value: &str, offset: usize) -> MathEditor {
    let mut editor = new_editor(value);
    editor.set_caret(MinimalCaret::new(offset));
    assert_eq!(editor.cursor_index(), offset);
    editor
}

#[test]
fn test_options_from_json() {
    let options: EditorOptions = serde_json::from_str(r#"{"newLine":true}"#).unwrap();
    assert!(options.new_line);
    assert!(!options.debug);
    assert_eq!(options.value, "");

    let editor = MathEditor::new(EditorOptions {
        value: "1+2".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(editor.get_value(), "1+2");
    assert_eq!(editor.display_tex(), r"{\cursor}{1}+{2}");
}

#[test]
fn test_invalid_initial_value() {
    let result = MathEditor::new(EditorOptions {
        value: r"\frac{".to_string(),
        ..Default::default()
    });
    assert!(matches!(result, Err(EditorError::Syntax(_))));
}

#[test]
fn test_move_through_fraction() {
    let mut editor = new_editor(r"\frac{a}{b}");
    let mut offsets = vec![editor.cursor_index()];
    for _ in 0..6 {
        editor.move_cursor_right();
        offsets.push(editor.cursor_index());
    }
    assert_eq!(offsets, vec![0, 6, 7, 9, 10, 11, 11]);

    editor.move_cursor_left();
    assert_eq!(editor.cursor_index(), 10);
    assert!(editor.display_tex().contains(r"b{\cursor}\;}"));
}

#[test]
fn test_erase_single_character() {
    let mut editor = editor_at("ab", 2);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "a");
    assert_eq!(editor.cursor_index(), 1);
}

#[test]
fn test_delete_single_character() {
    let mut editor = editor_at("ab", 0);
    editor.delete().unwrap();
    assert_eq!(editor.get_value(), "b");
    assert_eq!(editor.cursor_index(), 0);
}

#[test]
fn test_erase_fraction_at_any_boundary() {
    for offset in [6, 9, 11] {
        let mut editor = editor_at(r"\frac{a}{b}", offset);
        editor.erase().unwrap();
        assert_eq!(editor.get_value(), "", "erasing at {}", offset);
        assert_eq!(editor.cursor_index(), 0);
    }
    for offset in [0, 7] {
        let mut editor = editor_at(r"\frac{a}{b}", offset);
        editor.delete().unwrap();
        assert_eq!(editor.get_value(), "", "deleting at {}", offset);
    }
}

#[test]
fn test_erase_inside_of_a_block() {
    let mut editor = editor_at(r"\frac{a}{b}", 10);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), r"\frac{a}{}");
    assert_eq!(editor.cursor_index(), 9);
}

#[test]
fn test_erase_multi_character_tokens() {
    let mut editor = editor_at(r"1+\alpha ", 9);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "1+");

    let mut editor = editor_at(r"\{a", 2);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "a");
}

#[test]
fn test_erase_line_break() {
    let mut editor = editor_at(r"a\\b", 3);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "ab");
    assert_eq!(editor.cursor_index(), 1);
}

#[test]
fn test_erase_whole_table() {
    let mut editor = new_editor(r"\begin{matrix}a&b\end{matrix}");
    editor.set_caret(MinimalCaret::new(29));
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "");
}

#[test]
fn test_nothing_to_erase() {
    let mut editor = editor_at("ab", 0);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "ab");
    assert!(!editor.can_undo());

    let mut editor = editor_at("ab", 2);
    editor.delete().unwrap();
    assert_eq!(editor.get_value(), "ab");
}

#[test]
fn test_undo_restores_value_and_caret() {
    let mut editor = editor_at(r"\frac{a}{b}", 11);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "");

    editor.undo().unwrap();
    assert_eq!(editor.get_value(), r"\frac{a}{b}");
    assert_eq!(editor.cursor_index(), 11);

    editor.redo().unwrap();
    assert_eq!(editor.get_value(), "");
    assert_eq!(editor.cursor_index(), 0);
    assert!(editor.redo().is_none());
}

#[test]
fn test_insert() {
    let mut editor = new_editor("");
    editor.insert("x").unwrap();
    editor.insert("2").unwrap();
    assert_eq!(editor.get_value(), "x2");
    assert_eq!(editor.cursor_index(), 2);
}

#[test]
fn test_insert_rejects_anything_else() {
    let mut editor = new_editor("a");
    assert!(matches!(
        editor.insert("+"),
        Err(EditorError::InvalidCharacter(_))
    ));
    assert!(matches!(
        editor.insert("ab"),
        Err(EditorError::InvalidCharacter(_))
    ));
    assert!(matches!(
        editor.insert(""),
        Err(EditorError::InvalidCharacter(_))
    ));
    assert!(matches!(
        editor.insert_symbol("x"),
        Err(EditorError::InvalidSymbol(_))
    ));
    assert_eq!(editor.get_value(), "a");
    assert!(!editor.can_undo());
}

#[test]
fn test_insert_symbol() {
    let mut editor = new_editor("");
    editor.insert_symbol("+").unwrap();
    editor.insert_symbol("{").unwrap();
    editor.insert_symbol("%").unwrap();
    assert_eq!(editor.get_value(), r"+\{\%");
    assert_eq!(editor.cursor_index(), 5);
}

#[test]
fn test_insert_command() {
    let mut editor = new_editor("");
    editor.insert_command("frac", 2, false).unwrap();
    assert_eq!(editor.get_value(), r"\frac{}{}");
    assert_eq!(editor.cursor_index(), 6);

    let mut editor = new_editor("");
    editor.insert_command("alpha", 0, false).unwrap();
    assert_eq!(editor.get_value(), r"\alpha ");
    assert_eq!(editor.cursor_index(), 7);

    let mut editor = editor_at("x", 1);
    editor.insert_command("^", 1, false).unwrap();
    assert_eq!(editor.get_value(), "x^{}");
    assert_eq!(editor.cursor_index(), 3);

    let mut editor = editor_at("x", 1);
    editor.insert_command("^", 0, false).unwrap();
    assert_eq!(editor.get_value(), "x^ ");
    assert_eq!(editor.cursor_index(), 3);
    editor.erase().unwrap();
    assert_eq!(editor.get_value(), "x");

    let mut editor = new_editor("");
    editor.insert_command(r"\sqrt", 1, true).unwrap();
    assert_eq!(editor.get_value(), r"\sqrt[]{}");
    assert_eq!(editor.cursor_index(), 8);
}

#[test]
fn test_insert_command_that_does_not_parse() {
    let mut editor = new_editor("a");
    let result = editor.insert_command("frac1", 1, false);
    assert!(matches!(result, Err(EditorError::Syntax(_))));
    assert_eq!(editor.get_value(), "a");
}

#[test]
fn test_insert_matrix() {
    let mut editor = new_editor("");
    editor.insert_matrix(2, 2).unwrap();
    assert_eq!(editor.get_value(), r"\begin{bmatrix}&\\&\end{bmatrix}");
    assert_eq!(editor.cursor_index(), 32);

    let mut editor = new_editor("");
    editor.insert_matrix(1, 2).unwrap();
    assert_eq!(editor.get_value(), r"\begin{bmatrix}\\\end{bmatrix}");
    assert_eq!(editor.display_tex().matches(r"\isEmpty").count(), 2);

    assert!(matches!(
        editor.insert_matrix(0, 2),
        Err(EditorError::InvalidMatrixSize {
            columns: 0,
            rows: 2
        })
    ));
}

#[test]
fn test_set_value() {
    let mut editor = editor_at("abc", 3);
    assert!(matches!(
        editor.set_value(r"\end{matrix}", false),
        Err(EditorError::Syntax(_))
    ));
    assert_eq!(editor.get_value(), "abc");
    assert_eq!(editor.cursor_index(), 3);

    // Preserved, but not a cursor point anymore
    editor.set_value(r"\frac{a}{b}", false).unwrap();
    assert_eq!(editor.cursor_index(), 0);

    editor.set_caret(MinimalCaret::new(7));
    editor.set_value(r"\frac{a}{bc}", false).unwrap();
    assert_eq!(editor.cursor_index(), 7);

    editor.set_value("a", true).unwrap();
    assert_eq!(editor.cursor_index(), 0);
}

#[test]
fn test_text_input() {
    let mut editor = new_editor("");
    editor.handle_text_input(" 2*x/é ").unwrap();
    assert_eq!(editor.get_value(), r"2\cdot x\div ");
    assert_eq!(editor.cursor_index(), 13);

    editor.handle_text_input("=(").unwrap();
    assert_eq!(editor.get_value(), r"2\cdot x\div =(");
}

#[test]
fn test_keys() {
    let mut editor = editor_at("ab", 2);
    editor.handle_key(EditorKey::Left).unwrap();
    assert_eq!(editor.cursor_index(), 1);
    editor.handle_key(EditorKey::Delete).unwrap();
    assert_eq!(editor.get_value(), "a");
    editor.handle_key(EditorKey::Backspace).unwrap();
    assert_eq!(editor.get_value(), "");

    // Line breaks are off by default
    editor.handle_key(EditorKey::Enter).unwrap();
    assert_eq!(editor.get_value(), "");

    let mut editor = MathEditor::new(EditorOptions {
        new_line: true,
        value: "ab".to_string(),
        ..Default::default()
    })
    .unwrap();
    editor.handle_key_name("ArrowRight").unwrap();
    editor.handle_key_name("Enter").unwrap();
    editor.handle_key_name("Shift").unwrap();
    assert_eq!(editor.get_value(), r"a\\b");
    assert_eq!(editor.cursor_index(), 3);
}

#[test]
fn test_copy_and_paste() {
    let mut editor = new_editor(r"\frac{a}{b}");
    let copied = editor.copy(SerializedDataType::JsonExpression).unwrap();

    editor.set_value("x+", true).unwrap();
    editor.set_caret(MinimalCaret::new(2));
    editor.paste(copied, None).unwrap();
    assert_eq!(editor.get_value(), r"x+\frac{a}{b}");
    assert_eq!(editor.cursor_index(), 13);

    let result = editor.paste(r"\end{x}".to_string(), Some(SerializedDataType::RawTex));
    assert!(matches!(result, Err(EditorError::Syntax(_))));
    assert_eq!(editor.get_value(), r"x+\frac{a}{b}");
}

#[test]
fn test_caret_starts_on_a_cursor_point() {
    let mut editor = new_editor("{a}");
    assert_eq!(editor.cursor_index(), 0);
    assert!(editor.parsed().is_cursor_point(0));
    editor.move_cursor_right();
    assert_eq!(editor.cursor_index(), 1);
}

#[test]
fn test_debug_string() {
    let editor = editor_at("ab", 1);
    assert_eq!(editor.debug_string(), "a|b");
}

fn fake_layout(query: &RectQuery) -> Option<Rect> {
    match query {
        RectQuery::Node { key } if *key == ElementKey::new("mi", 0) => {
            Some(Rect::new(0.0, 10.0, 0.0, 10.0))
        }
        RectQuery::Node { key } if *key == ElementKey::new("mi", 1) => {
            Some(Rect::new(10.0, 20.0, 0.0, 10.0))
        }
        RectQuery::Math => Some(Rect::new(0.0, 20.0, 0.0, 10.0)),
        _ => None,
    }
}

#[test]
fn test_stale_render_is_ignored() {
    let mut editor = new_editor("a");
    let request = editor.render_request();
    assert!(!editor.render_state().is_measured());

    editor.insert("b").unwrap();
    assert!(!editor.finish_render(request.generation, &fake_layout));
    assert!(!editor.render_state().is_measured());
    assert_eq!(editor.locate(5.0, 5.0), None);

    let request = editor.render_request();
    assert_eq!(request.display_tex, r"ab{\cursor}");
    assert!(editor.finish_render(request.generation, &fake_layout));
    assert!(editor.render_state().is_measured());
}

#[test]
fn test_locate_moves_the_caret() {
    let mut editor = new_editor("ab");
    let request = editor.render_request();
    assert!(editor.finish_render(request.generation, &fake_layout));

    assert_eq!(editor.locate(7.0, 5.0), Some(1));
    assert_eq!(editor.cursor_index(), 1);
    // The caret marker moved, so the formula has to be typeset again
    assert!(!editor.render_state().is_measured());
    assert_eq!(editor.display_tex(), r"a{\cursor}b");
}

#[test]
fn test_click_outside_keeps_the_caret() {
    let mut editor = editor_at("ab", 2);
    let request = editor.render_request();
    editor.finish_render(request.generation, &fake_layout);

    assert_eq!(editor.locate(5.0, 50.0), None);
    assert_eq!(editor.cursor_index(), 2);
    assert!(editor.render_state().is_measured());
}
