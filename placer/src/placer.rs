use std::collections::HashMap;

use parser::{Command, CommandKind, Element, Environment, ParsedTex, Token};

use crate::{ElementKey, Interval, NodePart, Rect, RectProvider, RectQuery};

/// Width of the clickable area at the start and at the end of a line
pub const LINE_EDGE_WIDTH: f64 = 20.0;

/// Maps screen coordinates to raw offsets.
///
/// Built once the display TeX has been typeset, and thrown away after the next parse.
#[derive(Debug, Clone)]
pub struct Placer {
    intervals: Vec<Interval>,
    /// Clicks above or below this are ignored
    display: Option<Rect>,
    length: usize,
}

impl Placer {
    pub fn new(parsed: &ParsedTex, provider: &impl RectProvider) -> Self {
        let mut builder = PlacerBuilder {
            provider,
            intervals: Vec::new(),
            findings: HashMap::new(),
        };
        for element in &parsed.elements {
            builder.add_element(element);
        }

        Placer {
            intervals: builder.intervals,
            display: provider.rect_of(&RectQuery::Display),
            length: parsed.len(),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Finds the raw offset for a click.
    /// Returns `None` if the click is nowhere near the formula.
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        if self.intervals.is_empty() {
            return None;
        }
        if let Some(display) = self.display {
            if !display.contains_y(y) {
                return None;
            }
        }

        // Whatever is under the click. Boxes win over tokens.
        let mut found = None;
        for (i, interval) in self.intervals.iter().enumerate() {
            if interval.contains(x, y) {
                found = Some(self.place_at(i, x));
                if interval.is_box() {
                    break;
                }
            }
        }
        if found.is_some() {
            return found;
        }

        // Otherwise whatever is closest on the same line
        let mut nearest: Option<(usize, f64)> = None;
        for (i, interval) in self.intervals.iter().enumerate() {
            if !interval.is_in_band(y) {
                continue;
            }
            let distance = interval.distance_x(x);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }
        nearest.map(|(i, _)| self.place_at(i, x))
    }

    fn place_at(&self, i: usize, x: f64) -> usize {
        let interval = &self.intervals[i];
        if interval.is_box() || !interval.is_right_half(x) {
            return interval.index;
        }
        self.intervals
            .get(i + 1)
            .map(|next| next.index)
            .unwrap_or(self.length)
    }
}

struct PlacerBuilder<'a, P: RectProvider> {
    provider: &'a P,
    intervals: Vec<Interval>,
    /// How many nodes of each class have been seen so far
    findings: HashMap<String, usize>,
}

impl<'a, P: RectProvider> PlacerBuilder<'a, P> {
    fn next_key(&mut self, class: &str) -> ElementKey {
        let nth = self.findings.entry(class.to_string()).or_insert(0);
        let key = ElementKey::new(class, *nth);
        *nth += 1;
        key
    }

    fn rect(&self, query: RectQuery) -> Option<Rect> {
        let rect = self.provider.rect_of(&query);
        if rect.is_none() {
            log::warn!("Could not find a rect for {:?}", query);
        }
        rect
    }

    fn part_rect(&self, key: &ElementKey, part: NodePart) -> Option<Rect> {
        self.rect(RectQuery::Part {
            key: key.clone(),
            part,
        })
    }

    fn add_element(&mut self, element: &Element) {
        match element {
            Element::Number(token) | Element::Variable(token) | Element::Operator(token) => {
                self.add_token(token)
            }
            Element::Command(command) => self.add_command(command),
            Element::Begin(environment) => self.add_begin(environment),
            Element::End(_) => {}
            Element::EndOfLine { index } => self.add_end_of_line(*index),
            Element::Skip => {
                self.next_key("mo");
            }
        }
    }

    fn add_token(&mut self, token: &Token) {
        let key = self.next_key(token.display_type.class_name());
        let Some(rect) = self.rect(RectQuery::Node { key }) else {
            return;
        };
        self.intervals.push(Interval::token(token.index, rect));
        if token.near_closure {
            self.intervals.push(Interval::marker(token.end()));
        }
    }

    fn add_command(&mut self, command: &Command) {
        let key = self.next_key(&command.class_name());
        self.intervals.push(Interval::marker(command.start));

        let blocks = &command.blocks;
        match command.kind() {
            CommandKind::Fraction => {
                let parts = [NodePart::Numerator, NodePart::Denominator];
                for (block, part) in blocks.iter().zip(parts) {
                    if !block.is_empty() {
                        continue;
                    }
                    if let Some(rect) = self.part_rect(&key, part) {
                        self.intervals.push(Interval::boxed(block.close_index, rect));
                    }
                }
            }
            CommandKind::SquareRoot | CommandKind::Root => {
                if let Some(brackets) = command.brackets.filter(|brackets| brackets.is_empty()) {
                    if let Some(rect) = self.part_rect(&key, NodePart::RootIndex) {
                        self.intervals.push(Interval::boxed(brackets.close_index, rect));
                    }
                }
                if let Some(block) = blocks.first().filter(|block| block.is_empty()) {
                    if let Some(rect) = self.part_rect(&key, NodePart::Radicand) {
                        self.intervals.push(Interval::boxed(block.close_index, rect));
                    }
                }
            }
            CommandKind::Script(script) => {
                if let Some(block) = blocks.first().filter(|block| block.is_empty()) {
                    if let Some(rect) = self.part_rect(&key, NodePart::Script(script)) {
                        self.intervals.push(Interval::boxed(block.close_index, rect));
                    }
                }
            }
            CommandKind::Other => {}
        }
    }

    /// Cell spans are half-open and exclude the separators, so an empty cell has a length of 0.
    fn add_begin(&mut self, environment: &Environment) {
        let key = self.next_key("mtable");
        let empty_cells = environment.cells.iter().filter(|cell| cell.is_empty());
        for (nth, cell) in empty_cells.enumerate() {
            if let Some(rect) = self.part_rect(&key, NodePart::EmptyPlaceholder(nth)) {
                self.intervals.push(Interval::boxed(cell.start, rect));
            }
        }
    }

    fn add_end_of_line(&mut self, index: usize) {
        let key = self.next_key("block");
        // A single line does not get its own block
        let line = self
            .provider
            .rect_of(&RectQuery::Part {
                key,
                part: NodePart::LineBox,
            })
            .or_else(|| self.rect(RectQuery::Math));
        let Some(line) = line else {
            return;
        };

        // The line starts right after the previous line break
        let previous_end = self
            .intervals
            .iter()
            .rposition(|interval| interval.line_end);
        let (position, start) = match previous_end {
            Some(position) => (position + 1, self.intervals[position].index + 2),
            None => (0, 0),
        };
        self.intervals.insert(
            position,
            Interval::boxed(
                start,
                Rect::new(line.left - LINE_EDGE_WIDTH, line.left, line.top, line.bottom),
            ),
        );

        let mut end = Interval::boxed(
            index,
            Rect::new(line.right, line.right + LINE_EDGE_WIDTH, line.top, line.bottom),
        );
        end.line_end = true;
        self.intervals.push(end);
    }
}
