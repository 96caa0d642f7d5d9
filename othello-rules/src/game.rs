//! Implements game-level Othello logic: whose turn it is, and passing.
//!
//! [`Board`] answers questions about a single position; [`Game`] strings
//! positions together, alternating turns and only allowing a pass when the
//! player to move has nothing else to do.

use crate::board::{Board, MoveError};
use crate::cell::{Cell, Disc};
use crate::location::{Location, LocationList};
use std::fmt;
use tracing::debug;

/// An action in an Othello game: pass or select a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Move(loc)
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub active: Disc,
    pub just_passed: bool,
}

impl Default for Game {
    /// Gets the starting board with Black to move.
    fn default() -> Self {
        Self::new(Board::new(), Disc::default())
    }
}

impl Game {
    /// Resume play from an arbitrary position.
    pub fn new(board: Board, active: Disc) -> Self {
        Self {
            board,
            active,
            just_passed: false,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves(self.active)
    }

    /// Make an action as the active player, returning the following state.
    /// Moves must be legal, and passing is only allowed with no legal move available.
    pub fn apply(self, action: Action) -> Result<Self, MoveError> {
        let mut board = self.board;

        match action {
            Action::Move(loc) => {
                board.apply_move(loc, self.active)?;
            }
            Action::Pass => {
                if board.has_legal_move(self.active) {
                    debug!(disc = %self.active, "rejected pass");
                    return Err(MoveError::IllegalPass { disc: self.active });
                }
            }
        }

        let next = Self {
            board,
            active: !self.active,
            just_passed: action == Action::Pass,
        };

        if next.is_finished() {
            debug!(
                black = next.board.count(Cell::Black),
                white = next.board.count(Cell::White),
                "game over"
            );
        }

        Ok(next)
    }

    /// Returns whether neither player can move any more.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// The winner of a finished game, or None for a draw or a game still in progress.
    pub fn winner(&self) -> Option<Disc> {
        if !self.is_finished() {
            return None;
        }
        self.board.winner().disc()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.active)?;
        if self.just_passed {
            f.write_str("(Last move was a pass)\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn turns_alternate() {
        let game = Game::default();
        assert_eq!(game.active, Disc::Black);

        let game = game.apply(loc(2, 4).into()).unwrap();
        assert_eq!(game.active, Disc::White);
        assert!(!game.just_passed);
        assert_eq!(game.board.get(loc(3, 4)), Cell::Black);
        assert_eq!(game.board.count(Cell::Black), 4);
        assert_eq!(game.board.count(Cell::White), 1);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let game = Game::default();
        assert_eq!(
            game.apply(Action::Move(loc(0, 0))),
            Err(MoveError::IllegalMove {
                location: loc(0, 0),
                disc: Disc::Black
            })
        );
    }

    #[test]
    fn pass_only_without_moves() {
        assert_eq!(
            Game::default().apply(Action::Pass),
            Err(MoveError::IllegalPass { disc: Disc::Black })
        );

        // White has nothing to capture; Black can still play at C1.
        let mut board = Board::empty();
        board.set(loc(0, 0), Cell::Black);
        board.set(loc(0, 1), Cell::White);

        let game = Game::new(board, Disc::White);
        assert!(game.legal_moves().is_empty());
        assert!(!game.is_finished());

        let game = game.apply(Action::Pass).unwrap();
        assert!(game.just_passed);
        assert_eq!(game.active, Disc::Black);

        let game = game.apply(loc(0, 2).into()).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Disc::Black));
    }

    #[test]
    fn no_winner_before_the_end() {
        assert_eq!(Game::default().winner(), None);
    }

    #[test]
    fn draw_has_no_winner() {
        let board: Board = ("B".repeat(32) + &"W".repeat(32)).parse().unwrap();
        let game = Game::new(board, Disc::Black);
        assert!(game.is_finished());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn display_marks_pass() {
        let mut board = Board::empty();
        board.set(loc(0, 0), Cell::Black);
        board.set(loc(0, 1), Cell::White);

        let game = Game::new(board, Disc::White).apply(Action::Pass).unwrap();
        let text = game.to_string();
        assert!(text.ends_with("Black to move\n(Last move was a pass)\n"));
    }
}
