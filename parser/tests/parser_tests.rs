use grammar::DisplayType;
use parser::{parse, CommandKind, Element, NewLine, ParseError};
use tex_input::Span;

#[test]
fn test_empty() {
    let parsed = parse("", None).unwrap();
    assert_eq!(parsed.display_tex, r"{\cursor}");
    assert_eq!(parsed.elements, vec![]);
    assert_eq!(parsed.cursor_points, vec![0]);
}

#[test]
fn test_numbers_are_wrapped() {
    let parsed = parse("1+2", Some(0)).unwrap();
    assert_eq!(parsed.display_tex, r"{\cursor}{1}+{2}");
    assert_eq!(parsed.cursor_points, vec![0, 1, 2, 3]);

    let parsed = parse("1+2", None).unwrap();
    assert_eq!(parsed.display_tex, r"{1}+{2}{\cursor}");
    assert!(matches!(
        parsed.elements.as_slice(),
        [
            Element::Number(_),
            Element::Operator(_),
            Element::Number(_),
            Element::EndOfLine { index: 3 }
        ]
    ));
}

#[test]
fn test_idempotent() {
    let raw = r"\frac{a}{b}+\sqrt[3]{x^{2}}\\\alpha ";
    for cursor in [None, Some(0), Some(7), Some(12)] {
        assert_eq!(parse(raw, cursor), parse(raw, cursor));
    }
}

#[test]
fn test_cursor_points_are_total() {
    let inputs = [
        "",
        "a",
        "1+2",
        r"\frac{a}{b}",
        r"\sqrt[]{x}",
        r"a\\b",
        r"\begin{bmatrix}1&2\\3&4\end{bmatrix}",
        r"\{a\}",
        r"x^{2}_{}",
        "{a}",
        " a",
        "{}",
    ];
    for raw in inputs {
        let parsed = parse(raw, None).unwrap();
        let length = raw.chars().count();
        assert_eq!(parsed.cursor_points.first(), Some(&0), "{}", raw);
        assert_eq!(parsed.cursor_points.last(), Some(&length), "{}", raw);
        assert!(
            parsed.cursor_points.windows(2).all(|w| w[0] < w[1]),
            "{}",
            raw
        );
    }
}

#[test]
fn test_fraction() {
    let parsed = parse(r"\frac{a}{b}", None).unwrap();
    assert_eq!(parsed.cursor_points, vec![0, 6, 7, 9, 10, 11]);
    assert_eq!(parsed.display_tex, r"\frac{\;a\;}{\;b\;}{\cursor}");

    let Element::Command(command) = &parsed.elements[0] else {
        panic!("expected a command, got {:?}", parsed.elements[0]);
    };
    assert_eq!(command.name, "frac");
    assert_eq!(command.kind(), CommandKind::Fraction);
    assert_eq!(command.start, 0);
    assert_eq!(command.end, 10);
    assert_eq!(command.opening, 5);
    assert_eq!(command.span(), Span::new(0, 11));
    assert_eq!(command.blocks.len(), 2);
    assert_eq!(command.blocks[0].contents, "a");
    assert_eq!(command.blocks[1].open_index, 8);
    assert!(command.is_delimiter(7));
    assert!(!command.is_delimiter(6));
}

#[test]
fn test_empty_blocks() {
    let parsed = parse(r"\frac{}{}", Some(6)).unwrap();
    assert_eq!(
        parsed.display_tex,
        r"\frac{\;{\cursor}\isEmpty\;}{\isEmpty\;}"
    );
    assert_eq!(parsed.cursor_points, vec![0, 6, 8, 9]);
}

#[test]
fn test_root_with_empty_index() {
    let parsed = parse(r"\sqrt[]{x}", None).unwrap();
    assert_eq!(parsed.display_tex, r"\sqrt[\isEmpty]{\;x\;}{\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 6, 8, 9, 10]);

    let Element::Command(command) = &parsed.elements[0] else {
        panic!("expected a command");
    };
    assert_eq!(command.kind(), CommandKind::Root);
    assert!(command.brackets.unwrap().is_empty());
    // The brackets belong to the root, they are not operators
    assert!(!parsed
        .elements
        .iter()
        .any(|element| matches!(element, Element::Operator(_))));
}

#[test]
fn test_script() {
    let parsed = parse(r"x^{2}", None).unwrap();
    assert_eq!(parsed.display_tex, r"x^{{2}}{\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 1, 3, 4, 5]);
    let Element::Command(command) = &parsed.elements[1] else {
        panic!("expected a command");
    };
    assert_eq!(command.kind(), CommandKind::Script(parser::ScriptKind::Sup));
    assert_eq!(command.class_name(), "msubsup");
}

#[test]
fn test_script_without_block() {
    let parsed = parse("x^ ", None).unwrap();
    assert_eq!(parsed.display_tex, r"x^ {\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 1, 3]);
    let Element::Operator(token) = &parsed.elements[1] else {
        panic!("expected an operator, got {:?}", parsed.elements[1]);
    };
    assert_eq!(token.display_type, DisplayType::Operator);
    assert_eq!(token.extent, Some(Span::new(1, 3)));

    assert!(parse("x_ +1", None).is_ok());
    assert!(parse("x^+", None).is_err());
}

#[test]
fn test_variable_like_command() {
    let parsed = parse(r"\alpha ", None).unwrap();
    assert_eq!(parsed.display_tex, r"\alpha {\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 7]);
    let Element::Variable(token) = &parsed.elements[0] else {
        panic!("expected a variable, got {:?}", parsed.elements[0]);
    };
    assert_eq!(token.display_type, DisplayType::Identifier);
    assert_eq!(token.extent, Some(Span::new(0, 7)));
    assert_eq!(token.end(), 7);
}

#[test]
fn test_relation_command_is_wrapped() {
    let parsed = parse(r"a\geq b", None).unwrap();
    assert_eq!(parsed.display_tex, r"a{\geq }b{\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 1, 6, 7]);
    let Element::Operator(token) = &parsed.elements[1] else {
        panic!("expected an operator, got {:?}", parsed.elements[1]);
    };
    assert_eq!(token.index, 1);
    assert_eq!(token.extent, Some(Span::new(1, 6)));
}

#[test]
fn test_escaped_operators() {
    let parsed = parse(r"\{a\}", None).unwrap();
    assert_eq!(parsed.display_tex, r"\{a\}{\cursor}");
    assert_eq!(parsed.cursor_points, vec![0, 2, 3, 5]);
    let tokens: Vec<_> = parsed
        .elements
        .iter()
        .filter_map(|element| element.as_token())
        .map(|token| (token.index, token.end()))
        .collect();
    assert_eq!(tokens, vec![(0, 2), (2, 3), (3, 5)]);
}

#[test]
fn test_new_line() {
    let parsed = parse(r"a\\b", None).unwrap();
    let new_line = NewLine { start: 1, end: 2 };
    assert_eq!(parsed.new_line_at(1), Some(&new_line));
    assert_eq!(parsed.new_line_at(2), Some(&new_line));
    assert_eq!(parsed.new_line_at(3), None);
    assert_eq!(parsed.cursor_points, vec![0, 1, 3, 4]);
    let lines: Vec<_> = parsed
        .elements
        .iter()
        .filter_map(|element| match element {
            Element::EndOfLine { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![1, 4]);
}

#[test]
fn test_table_environment() {
    let raw = r"\begin{matrix}a&b\end{matrix}";
    let parsed = parse(raw, None).unwrap();
    assert_eq!(parsed.display_tex, format!(r"{}{{\cursor}}", raw));
    assert_eq!(parsed.cursor_points, vec![0, 14, 15, 16, 17, 29]);

    let kinds: Vec<_> = parsed
        .elements
        .iter()
        .map(|element| match element {
            Element::Skip => "skip",
            Element::Begin(_) => "begin",
            Element::End(_) => "end",
            Element::Variable(_) => "variable",
            Element::EndOfLine { .. } => "eol",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["skip", "begin", "variable", "variable", "end", "skip", "eol"]
    );

    let Element::Begin(begin) = &parsed.elements[1] else {
        panic!("expected a begin");
    };
    assert_eq!(begin.name, "matrix");
    assert_eq!(begin.cells, vec![Span::new(14, 15), Span::new(16, 17)]);
}

#[test]
fn test_table_rows_do_not_break_lines() {
    let raw = r"\begin{bmatrix}&\\&\end{bmatrix}";
    let parsed = parse(raw, None).unwrap();
    assert!(parsed.new_lines.is_empty());
    assert_eq!(
        parsed.display_tex,
        r"\begin{bmatrix}\isEmpty&\isEmpty\\\isEmpty&\isEmpty\end{bmatrix}{\cursor}"
    );
    let Element::Begin(begin) = &parsed.elements[1] else {
        panic!("expected a begin");
    };
    assert_eq!(begin.cells.len(), 4);
    assert!(begin.cells.iter().all(|cell| cell.is_empty()));
}

#[test]
fn test_every_empty_cell_has_a_placeholder() {
    let inputs = [
        r"\begin{bmatrix}\\\end{bmatrix}",
        r"\begin{matrix}\end{matrix}",
        r"\begin{bmatrix}&\\&\end{bmatrix}",
        r"\begin{matrix}a&\\&b\end{matrix}",
        r"\begin{matrix}a\\\end{matrix}",
        r"\begin{matrix}\\a\\\end{matrix}",
    ];
    for raw in inputs {
        let parsed = parse(raw, None).unwrap();
        let Element::Begin(begin) = &parsed.elements[1] else {
            panic!("expected a begin in {}", raw);
        };
        let empty_cells = begin.cells.iter().filter(|cell| cell.is_empty()).count();
        assert_eq!(
            parsed.display_tex.matches(r"\isEmpty").count(),
            empty_cells,
            "{}",
            raw
        );
    }

    let parsed = parse(r"\begin{bmatrix}\\\end{bmatrix}", None).unwrap();
    assert_eq!(
        parsed.display_tex,
        r"\begin{bmatrix}\isEmpty\\\isEmpty\end{bmatrix}{\cursor}"
    );
}

#[test]
fn test_nested_braces_in_blocks() {
    let parsed = parse(r"\frac{\{a\}}{{b}}", None).unwrap();
    let Element::Command(command) = &parsed.elements[0] else {
        panic!("expected a command");
    };
    assert_eq!(command.blocks[0].contents, r"\{a\}");
    assert_eq!(command.blocks[1].contents, "{b}");
    assert_eq!(command.end, 16);
}

#[test]
fn test_unterminated_command() {
    assert_eq!(
        parse(r"1+\frac{a", None),
        Err(ParseError::UnterminatedCommand { start: 2 })
    );
    assert_eq!(
        parse(r"\alpha", None),
        Err(ParseError::UnterminatedCommand { start: 0 })
    );
}

#[test]
fn test_invalid_command_name() {
    assert_eq!(
        parse(r"\frac1", None),
        Err(ParseError::InvalidCommandName {
            start: 0,
            found: '1'
        })
    );
}

#[test]
fn test_unmatched_end() {
    let error = parse(r"a\end{matrix}", None).unwrap_err();
    assert_eq!(error, ParseError::UnmatchedEnd { start: 1 });
    assert_eq!(error.start(), 1);
}

#[test]
fn test_unicode_offsets_are_chars() {
    let parsed = parse("é1", None);
    // Not a letter of the subset, but still one cursor point per char
    assert_eq!(parsed.unwrap().cursor_points, vec![0, 1, 2]);
}
