//! Whole games played through the public API, checking disc-count bookkeeping on every ply.

use othello_rules::{Action, Cell, Disc, Game, Location};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play a game to the end, picking the `pick(ply, len)`-th legal move each turn.
fn play_out(pick: impl Fn(usize, usize) -> usize) -> Game {
    let mut game = Game::default();
    let mut ply = 0;

    while !game.is_finished() {
        let moves: Vec<Location> = game.legal_moves().collect();
        let mover = Cell::from(game.active);
        let opponent = Cell::from(!game.active);

        if moves.is_empty() {
            let next = game.apply(Action::Pass).unwrap();
            assert_eq!(next.board, game.board);
            game = next;
            continue;
        }

        let loc = moves[pick(ply, moves.len())];
        let flips = game.board.flips(loc, game.active).len() as u8;
        let next = game.apply(Action::Move(loc)).unwrap();

        assert!(flips >= 1);
        assert_eq!(next.board.count(mover), game.board.count(mover) + 1 + flips);
        assert_eq!(next.board.count(opponent), game.board.count(opponent) - flips);
        assert_eq!(
            next.board.count(Cell::Empty),
            game.board.count(Cell::Empty) - 1
        );

        game = next;
        ply += 1;
        assert!(ply <= 60);
    }

    game
}

fn check_final(game: &Game) {
    let black = game.board.count(Cell::Black);
    let white = game.board.count(Cell::White);

    assert!(!game.board.has_legal_move(Disc::Black));
    assert!(!game.board.has_legal_move(Disc::White));

    let expected = if black > white {
        Some(Disc::Black)
    } else if white > black {
        Some(Disc::White)
    } else {
        None
    };
    assert_eq!(game.winner(), expected);
}

#[test]
fn first_move_games() {
    init_tracing();
    let game = play_out(|_, _| 0);
    check_final(&game);
}

#[test]
fn last_move_games() {
    init_tracing();
    let game = play_out(|_, len| len - 1);
    check_final(&game);
}

#[test]
fn mixed_move_games() {
    init_tracing();
    for seed in 1..8 {
        let game = play_out(|ply, len| (ply * 7 + seed) % len);
        check_final(&game);
    }
}

#[test]
fn parsed_moves_match_coordinates() {
    let game = Game::default();
    let game = game.apply("E3".parse::<Location>().unwrap().into()).unwrap();
    assert_eq!(
        game.board.get(Location::from_coords(3, 4).unwrap()),
        Cell::Black
    );
}
