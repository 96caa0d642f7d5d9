//! `othello-rules` is a small, checked rules engine for Othello/Reversi.
//!
//! The crate is organised in two levels:
//!
//!  - [`Board`] owns an 8x8 grid of [`Cell`]s and answers every rules question about a
//!    single position: which moves are legal, which discs a move flips, whether the game
//!    is over and who won. Moves are validated before the board is touched; an
//!    [`apply_move_unchecked`](Board::apply_move_unchecked) escape hatch exists for
//!    callers that have already checked legality.
//!  - [`Game`] strings positions together, alternating turns and handling passes.
//!
//! Coordinates are validated once, when a [`Location`] is built, so no operation on a
//! board can index off the grid.

pub mod test_utils;

mod board;
mod cell;
mod direction;
mod game;
mod location;
mod utils;

pub use board::*;
pub use cell::*;
pub use direction::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
