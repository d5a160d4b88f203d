use tex_input::direction::HorizontalDirection;

use crate::caret::MinimalCaret;

/// Moves the caret to the neighbouring cursor point.
/// Stays put at either end.
pub fn move_caret(
    caret: MinimalCaret,
    direction: HorizontalDirection,
    cursor_points: &[usize],
) -> MinimalCaret {
    let target = match (cursor_points.binary_search(&caret.offset), direction) {
        (Ok(position), HorizontalDirection::Left) => position
            .checked_sub(1)
            .and_then(|position| cursor_points.get(position)),
        (Ok(position), HorizontalDirection::Right) => cursor_points.get(position + 1),
        // Not a cursor point, the closest one in that direction will do
        (Err(position), HorizontalDirection::Left) => position
            .checked_sub(1)
            .and_then(|position| cursor_points.get(position)),
        (Err(position), HorizontalDirection::Right) => cursor_points.get(position),
    };

    target.map(|offset| MinimalCaret::new(*offset)).unwrap_or(caret)
}
