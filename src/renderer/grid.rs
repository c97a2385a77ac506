//! Render target: a fixed grid of cell tags

use std::fmt;

/// Background cell
pub const EMPTY_TAG: u8 = b' ';
/// Cells covered by the ship
pub const SHIP_TAG: u8 = b'+';

/// Tag for the obstacle at `index`.
///
/// Digits first, then whatever follows `'0'` in byte order. The index is
/// truncated to a byte and the addition wraps, so large obstacle counts reuse
/// symbols instead of failing.
#[inline]
pub fn obstacle_tag(index: usize) -> u8 {
    b'0'.wrapping_add(index as u8)
}

/// A `width x height` grid of tags, row-major, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Blank grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_TAG; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tag at `(row, col)`, or None outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Write a tag, folding any signed index back onto the grid
    pub fn set_wrapped(&mut self, row: i64, col: i64, tag: u8) {
        let row = row.rem_euclid(self.height as i64) as usize;
        let col = col.rem_euclid(self.width as i64) as usize;
        self.cells[row * self.width + col] = tag;
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells carrying `tag`
    #[cfg(test)]
    pub(crate) fn count(&self, tag: u8) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    /// Columns holding `tag` anywhere in the grid, ascending
    pub fn columns_with(&self, tag: u8) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| (0..self.height).any(|row| self.get(row, col) == Some(tag)))
            .collect()
    }
}

/// Printable form of a tag.
///
/// Bytes outside printable ASCII (control bytes, including a newline, and
/// anything from 0x80 up) show as `?`, so each cell is one character and the
/// frame stays rectangular however far obstacle tags wrap.
#[inline]
fn display_char(tag: u8) -> char {
    if tag == b' ' || tag.is_ascii_graphic() {
        tag as char
    } else {
        '?'
    }
}

/// Framed view: a rule of `=` above and below, `|` closing each row
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(self.width + 1);
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            for &tag in row {
                write!(f, "{}", display_char(tag))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{rule}")
    }
}
