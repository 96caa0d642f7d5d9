//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Disc};

/// Count the leaves of the game tree `depth` plies below the starting position.
/// A forced pass uses up a ply; a finished game is a leaf at any depth.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Disc::default(), depth, false)
}

fn leaves_below(board: Board, disc: Disc, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(disc);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !disc, depth - 1, true);
    }

    all_moves
        .map(|loc| {
            let mut next = board;
            next.apply_move_unchecked(loc, disc);
            leaves_below(next, !disc, depth - 1, false)
        })
        .sum()
}
