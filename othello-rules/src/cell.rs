//! The contents of a single board square, and the colours that can move.

use derive_more::Display;
use std::convert::TryFrom;
use std::fmt;

/// One of the two players, identified by the colour of their discs.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Disc {
    Black,
    White,
}

/// The state of one square on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Black,
    White,
    Empty,
}

impl Default for Disc {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Disc {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The disc occupying this cell, if any.
    #[inline]
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Black => Some(Disc::Black),
            Cell::White => Some(Disc::White),
            Cell::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character used for this cell in board dumps.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Empty => '-',
        }
    }
}

impl From<Disc> for Cell {
    #[inline]
    fn from(disc: Disc) -> Self {
        match disc {
            Disc::Black => Cell::Black,
            Disc::White => Cell::White,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'B' => Ok(Cell::Black),
            'W' => Ok(Cell::White),
            '-' => Ok(Cell::Empty),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_not() {
        assert_eq!(!Disc::Black, Disc::White);
        assert_eq!(!Disc::White, Disc::Black);
        assert_eq!(!!Disc::Black, Disc::Black);
    }

    #[test]
    fn black_moves_first() {
        assert_eq!(Disc::default(), Disc::Black);
    }

    #[test]
    fn cell_disc() {
        assert_eq!(Cell::from(Disc::White).disc(), Some(Disc::White));
        assert_eq!(Cell::from(Disc::Black).disc(), Some(Disc::Black));
        assert_eq!(Cell::Empty.disc(), None);
    }

    #[test]
    fn cell_from_char() {
        assert_eq!(Cell::try_from('B'), Ok(Cell::Black));
        assert_eq!(Cell::try_from('w'), Ok(Cell::White));
        assert_eq!(Cell::try_from('-'), Ok(Cell::Empty));
        assert_eq!(Cell::try_from('.'), Err('.'));
    }

    #[test]
    fn cell_to_string() {
        assert_eq!(Cell::Black.to_string(), "B");
        assert_eq!(Cell::White.to_string(), "W");
        assert_eq!(Cell::Empty.to_string(), "-");
        assert_eq!(Disc::White.to_string(), "White");
    }
}
