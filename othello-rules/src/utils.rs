//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 64 characters into the numbered grid format:
/// a column header (first label width 5, the rest width 3), then one line per row
/// holding the row number (width 2) and each cell (width 3).
/// `piece_iter` must yield exactly 64 items, in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    for col in 0..EDGE_LENGTH {
        if col == 0 {
            write!(f, "{:5}", col + 1)?;
        } else {
            write!(f, "{:3}", col + 1)?;
        }
    }
    writeln!(f)?;

    for row in 0..EDGE_LENGTH {
        write!(f, "{:2}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{:>3}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
