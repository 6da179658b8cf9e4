//! ASCII rendering of a point field.

use crate::bounds::BoundingBox;
use crate::point::Point;

/// Renders the points as rows of `#` and spaces, top row first.
///
/// The grid spans the bounding box of the field: `height + 1` rows of
/// `width + 1` columns, with each point at cell
/// `(pos.y - min.y, pos.x - min.x)`. The width is taken from the x extent;
/// the original puzzle solution derived it from `min.y` instead, which
/// happened to pad or truncate the grid depending on the input — that is a
/// deliberate deviation here, not an oversight.
///
/// ### Returns
/// One `String` per grid row; no rows for an empty field.
pub fn render_rows(points: &[Point]) -> Vec<String> {
    let Some(bounds) = BoundingBox::from_points(points) else {
        return Vec::new();
    };

    let width = bounds.width() as usize + 1;
    let height = bounds.height() as usize + 1;
    let mut grid = vec![vec![false; width]; height];
    for p in points {
        let row = (p.pos.y - bounds.min.y) as usize;
        let col = (p.pos.x - bounds.min.x) as usize;
        grid[row][col] = true;
    }

    grid.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|occupied| if occupied { '#' } else { ' ' })
                .collect()
        })
        .collect()
}
