//! Coverage rasterizer: circles on a wrap-around field to grid cells
//!
//! A cell is covered when its centre point lies inside the circle. The scan
//! box runs one cell past the circle's extent on every side, and indices that
//! leave the grid fold back across the opposite edge, matching the toroidal
//! field.

use super::grid::{Grid, SHIP_TAG, obstacle_tag};
use crate::error::Error;
use crate::sim::{Arena, Body};
use crate::square;

/// Render `arena` onto a `cols x rows` grid.
///
/// The ship is drawn first, then obstacles in index order; where coverage
/// overlaps the later body's tag wins.
pub fn rasterize(arena: &Arena, cols: usize, rows: usize) -> Result<Grid, Error> {
    if cols == 0 || rows == 0 {
        return Err(Error::InvalidResolution {
            width: cols,
            height: rows,
        });
    }

    let tw = arena.width() / cols as f64;
    let th = arena.height() / rows as f64;
    let mut grid = Grid::new(cols, rows);

    stamp(&mut grid, arena.ship(), tw, th, SHIP_TAG);
    for (k, obstacle) in arena.obstacles().iter().enumerate() {
        stamp(&mut grid, obstacle, tw, th, obstacle_tag(k));
    }

    Ok(grid)
}

/// Mark every cell covered by `body`, plus the cell holding its centre
fn stamp(grid: &mut Grid, body: &Body, tw: f64, th: f64, tag: u8) {
    let center = body.pos;
    let r = body.radius;

    // Small bodies may cover no cell centre at all; the centre cell keeps them visible
    grid.set_wrapped(
        (center.y / th).floor() as i64,
        (center.x / tw).floor() as i64,
        tag,
    );

    let imin = ((center.y - r) / th).floor() as i64 - 1;
    let imax = ((center.y + r) / th).ceil() as i64 + 1;
    let jmin = ((center.x - r) / tw).floor() as i64 - 1;
    let jmax = ((center.x + r) / tw).ceil() as i64 + 1;

    for i in imin..=imax {
        let y = (i as f64 + 0.5) * th;
        for j in jmin..=jmax {
            let x = (j as f64 + 0.5) * tw;
            if square(x - center.x) + square(y - center.y) <= square(r) {
                grid.set_wrapped(i, j, tag);
            }
        }
    }
}
