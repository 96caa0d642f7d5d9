//! The board engine: move legality, disc flipping and end-of-game queries.
//!
//! Every operation works on an explicit, exclusively-owned [`Board`]. Locations
//! are bounds-checked when they are built, so nothing here can index off the grid.

use crate::cell::{Cell, Disc};
use crate::direction::Direction;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use tracing::{debug, trace};

/// An 8x8 grid of [`Cell`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// Errors raised when a move or pass cannot be made.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum MoveError {
    #[display(fmt = "({}, {}) is not on the board", row, col)]
    InvalidCoordinate { row: usize, col: usize },
    #[display(fmt = "{} cannot move at {}", disc, location)]
    IllegalMove { location: Location, disc: Disc },
    #[display(fmt = "{} cannot pass while a move is available", disc)]
    IllegalPass { disc: Disc },
}

/// Errors raised when parsing a [`Board`] from text.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", found)]
    InvalidCell { found: char },
    #[display(fmt = "board string has {} cells, expected 64", found)]
    WrongLength { found: usize },
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: Black on the NW-SE centre diagonal, White on the NE-SW one.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Black;
        board.cells[4][4] = Cell::Black;
        board.cells[3][4] = Cell::White;
        board.cells[4][3] = Cell::White;
        board
    }

    /// A board with no discs on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Reset this board to the starting position.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// Overwrite a single cell. Intended for setting up positions; no captures are made.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Count the opponent discs `disc` would capture in `direction` by playing at `loc`.
    /// Zero means the direction holds no capturable run.
    /// The contents of `loc` itself are not examined.
    pub fn capture_run(&self, loc: Location, disc: Disc, direction: Direction) -> u8 {
        // The shortest capture is one opponent disc and a closing disc.
        if loc.offset(direction, 2).is_none() {
            return 0;
        }

        let mover = Cell::from(disc);
        let opponent = Cell::from(!disc);

        let mut run = 0;
        let mut cursor = loc.step(direction);
        while let Some(next) = cursor {
            let cell = self.get(next);
            if cell == opponent {
                run += 1;
            } else if cell == mover {
                return run;
            } else {
                return 0;
            }
            cursor = next.step(direction);
        }

        // Ran off the board without a closing disc.
        0
    }

    /// Returns whether `disc` may play at `loc`: the cell is empty and
    /// at least one direction holds a capturable run.
    pub fn is_legal_move(&self, loc: Location, disc: Disc) -> bool {
        self.get(loc).is_empty()
            && Direction::ALL
                .iter()
                .any(|&direction| self.capture_run(loc, disc, direction) > 0)
    }

    /// Every location whose disc would flip if `disc` played at `loc`.
    pub fn flips(&self, loc: Location, disc: Disc) -> LocationList {
        let mut flipped = LocationList::default();

        for &direction in Direction::ALL.iter() {
            let run = self.capture_run(loc, disc, direction) as usize;
            for distance in 1..=run {
                if let Some(captured) = loc.offset(direction, distance) {
                    flipped.insert(captured);
                }
            }
        }

        flipped
    }

    /// Play `disc` at `loc`, returning the number of discs flipped.
    /// The board is left untouched if the move is not legal.
    pub fn apply_move(&mut self, loc: Location, disc: Disc) -> Result<u8, MoveError> {
        if !self.is_legal_move(loc, disc) {
            debug!(%loc, %disc, "rejected illegal move");
            return Err(MoveError::IllegalMove { location: loc, disc });
        }

        Ok(self.apply_move_unchecked(loc, disc))
    }

    /// Place `disc` at `loc` and flip every direction that holds a capturable run,
    /// returning the number of discs flipped.
    /// Legality is not checked: an illegal call may place a disc that captures nothing.
    pub fn apply_move_unchecked(&mut self, loc: Location, disc: Disc) -> u8 {
        let flipped = self.flips(loc, disc);
        let count = flipped.len() as u8;

        self.set(loc, disc.into());
        for captured in flipped {
            self.set(captured, disc.into());
        }

        trace!(%loc, %disc, flipped = count, "applied move");
        count
    }

    /// Get the list of legal moves for `disc`, in row-major order.
    pub fn legal_moves(&self, disc: Disc) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_legal_move(loc, disc))
            .collect()
    }

    /// Returns whether `disc` has any legal move. Stops at the first one found.
    pub fn has_legal_move(&self, disc: Disc) -> bool {
        Location::all().any(|loc| self.is_legal_move(loc, disc))
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        self.cells().filter(|&c| c == cell).count() as u8
    }

    /// Returns whether no empty cells remain.
    pub fn is_full(&self) -> bool {
        !self.cells().any(Cell::is_empty)
    }

    /// Returns whether the board is full or neither colour can move.
    pub fn is_game_over(&self) -> bool {
        self.is_full() || (!self.has_legal_move(Disc::Black) && !self.has_legal_move(Disc::White))
    }

    /// The colour with strictly more discs, or [`Cell::Empty`] for a tie.
    /// Only meaningful once [`Board::is_game_over`] holds.
    pub fn winner(&self) -> Cell {
        match self.count(Cell::Black).cmp(&self.count(Cell::White)) {
            Ordering::Greater => Cell::Black,
            Ordering::Less => Cell::White,
            Ordering::Equal => Cell::Empty,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::symbol), f)
    }
}

/// Parse a board from 64 cell characters (`B`, `W`, `-`) in row-major order.
/// Whitespace is ignored, so the rows may be laid out on separate lines.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| Cell::try_from(c).map_err(|found| ParseBoardError::InvalidCell { found }))
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: cells.len() });
        }

        let mut board = Self::empty();
        for (loc, cell) in Location::all().zip(cells) {
            board.set(loc, cell);
        }
        Ok(board)
    }
}
