use std::sync::Arc;
use std::thread;

use grim::board::prelude::*;
use grim::board::{rectangle_from_origin, IllegalMove, Occupant};
use grim::SharedBoard;

fn sq(notation: &str) -> Square {
    parse_algebraic(notation).unwrap()
}

#[test]
fn play_a_short_game() {
    let board = Board::new();
    let board = board.make_move(sq("e2"), sq("e3")).unwrap();
    let board = board.make_move(sq("d7"), sq("d6")).unwrap();
    let board = board.make_move(sq("e3"), sq("e4")).unwrap();
    let board = board.make_move(sq("d6"), sq("d5")).unwrap();

    assert!(board.movable_from(sq("e4")).unwrap().contains(&sq("d5")));
    let board = board.make_move(sq("e4"), sq("d5")).unwrap();

    assert_eq!(board.pieces().count(), 15);
    assert_eq!(board.turn_of(), &BLACK);
    assert_eq!(board.get(sq("d5")).unwrap(), Occupant::Piece(WHITE.piece(Pawn)));
}

#[test]
fn illegal_move_carries_context() {
    let board = Board::new();
    let err = board.make_move(sq("a2"), sq("a4")).unwrap_err();
    let BoardError::IllegalMove(illegal) = err else {
        panic!("expected an illegal move");
    };
    let IllegalMove {
        start,
        end,
        board: attempted,
        piece,
    } = *illegal;
    assert_eq!((start, end), (sq("a2"), sq("a4")));
    assert_eq!(attempted, board);
    assert_eq!(piece.piece().map(OwnedPiece::owner), Some(&WHITE));
}

#[test]
fn errors_are_std_errors() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }

    let err = Board::empty().get(Square(8, 8)).unwrap_err();
    assert!(describe(&err).contains("i9"));
    let err = parse_algebraic("abc").unwrap_err();
    assert!(describe(&err).contains("abc"));
}

#[test]
fn subboard_of_home_ranks() {
    let board = Board::new();
    let home = board.subboard(rectangle_from_origin(sq("h2")));
    assert_eq!((home.width(), home.height()), (8, 7));
    assert_eq!(home.pieces().count(), 8);
    assert!(home.pieces().all(|(_, piece)| piece.owner() == &WHITE));
}

#[test]
fn custom_rules_plug_in() {
    #[derive(Debug, PartialEq)]
    struct Knight;

    impl Piece for Knight {
        fn reachable_from(&self, square: Square, _side: Side) -> SquareSet {
            [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)]
                .into_iter()
                .map(|(files, ranks)| square.offset(files, ranks))
                .collect()
        }

        fn capturable_from(&self, _square: Square, _side: Side) -> SquareSet {
            SquareSet::new()
        }

        fn symbol(&self, side: Side) -> char {
            match side {
                Side::White => '♘',
                Side::Black => '♞',
            }
        }
    }

    let board = Board::new().set(sq("b1"), WHITE.piece(Knight)).unwrap();
    // d2 holds a white pawn.
    assert_eq!(
        board.movable_from(sq("b1")).unwrap(),
        SquareSet::from([sq("a3"), sq("c3")])
    );
    assert!(board.to_string().contains('♘'));
}

#[test]
fn shared_board_across_threads() {
    let shared = Arc::new(SharedBoard::new(Board::new()));
    let base = shared.snapshot();

    let racers: Vec<_> = ["a2", "b2", "c2"]
        .into_iter()
        .map(|start| {
            let shared = Arc::clone(&shared);
            let base = base.clone();
            thread::spawn(move || {
                let start = parse_algebraic(start).unwrap();
                let next = base.make_move(start, start.offset(0, 1)).unwrap();
                shared.publish(&base, next).is_ok()
            })
        })
        .collect();

    let winners = racers
        .into_iter()
        .map(|racer| racer.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(shared.snapshot().turn_of(), &BLACK);
}

#[cfg(feature = "serde")]
#[test]
fn squares_and_players_serialize() {
    let json = serde_json::to_string(&sq("c3")).unwrap();
    assert_eq!(json, "[2,2]");
    let player: Player = serde_json::from_str(r#"{"name":"black","side":"Black"}"#).unwrap();
    assert_eq!(player, BLACK);
}
