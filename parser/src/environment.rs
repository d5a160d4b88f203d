use tex_input::Span;

use crate::{element::Element, tex::TexParser};

impl TexParser {
    /// Splits the body of a table into its cells, once its `\end` has been found.
    /// Cells are separated by a top-level `&` or `\\`.
    pub(crate) fn split_cells(&mut self, begin_element: usize, end_start: usize) {
        let body_start = match self.elements.get(begin_element) {
            Some(Element::Begin(begin)) => begin.end + 1,
            _ => return,
        };

        let mut cells = Vec::new();
        let mut cell_start = body_start;
        let mut depth = 0usize;
        let mut i = body_start;
        while i < end_start {
            if self.lexer.is_escaped_brace(i) {
                i += 2;
                continue;
            }
            match self.lexer.char_at(i) {
                Some('{') => depth += 1,
                Some('}') => depth = depth.saturating_sub(1),
                Some('&') if depth == 0 => {
                    cells.push(Span::new(cell_start, i));
                    cell_start = i + 1;
                }
                Some('\\') if depth == 0 && self.lexer.char_at(i + 1) == Some('\\') => {
                    cells.push(Span::new(cell_start, i));
                    cell_start = i + 2;
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }
        cells.push(Span::new(cell_start.min(end_start), end_start));

        if let Some(Element::Begin(begin)) = self.elements.get_mut(begin_element) {
            begin.cells = cells;
        }
    }
}
