//! Code for working with [`Location`]s on the Othello board.

use crate::direction::Direction;
use crate::{MoveError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A location on the Othello board. Always within bounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// A set of locations on the Othello board, which can be iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(u64);

impl Location {
    /// Convert from zero-indexed row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(MoveError::InvalidCoordinate { row, col });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self {
            row: index / EDGE_LENGTH as u8,
            col: index % EDGE_LENGTH as u8,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighbouring location in `direction`, or None past the edge of the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction, 1)
    }

    /// The location `distance` steps away in `direction`, or None past the edge of the board.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();
        let row = self.row() as isize + row_delta * distance as isize;
        let col = self.col() as isize + col_delta * distance as isize;

        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize).ok()
    }

    /// Every location on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4"): column letter, then row.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).or(Err(ParseLocationError))
    }
}

impl LocationList {
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & (1u64 << loc.to_index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= 1u64 << loc.to_index();
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 ^= 1u64 << index;

        Some(Location::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut list = Self::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
