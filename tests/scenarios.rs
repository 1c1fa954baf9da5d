use serde::Deserialize;

use grim::board::{parse_algebraic, Board, BoardError, Pawn, Player, BLACK, WHITE};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    layout: String,
    pieces: Vec<Placement>,
    moves: Vec<Step>,
    final_pieces: usize,
    final_turn: String,
}

#[derive(Deserialize)]
struct Placement {
    square: String,
    owner: String,
}

#[derive(Deserialize)]
struct Step {
    from: String,
    to: String,
    legal: bool,
}

fn player(name: &str) -> Player {
    match name {
        "white" => WHITE,
        "black" => BLACK,
        other => panic!("unknown player {other}"),
    }
}

fn starting_board(scenario: &Scenario) -> Board {
    let mut board = match scenario.layout.as_str() {
        "standard" => Board::new(),
        "empty" => Board::empty(),
        other => panic!("unknown layout {other}"),
    };
    for placement in &scenario.pieces {
        let square = parse_algebraic(&placement.square).expect("invalid square in scenarios.json");
        board = board
            .set(square, player(&placement.owner).piece(Pawn))
            .expect("placement off the board");
    }
    board
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let mut board = starting_board(scenario);

        for step in &scenario.moves {
            let from = parse_algebraic(&step.from).expect("invalid square in scenarios.json");
            let to = parse_algebraic(&step.to).expect("invalid square in scenarios.json");
            match board.make_move(from, to) {
                Ok(next) => {
                    assert!(
                        step.legal,
                        "{}: {} -> {} should have been rejected",
                        scenario.name, step.from, step.to
                    );
                    board = next;
                }
                Err(BoardError::IllegalMove(illegal)) => {
                    assert!(
                        !step.legal,
                        "{}: {} -> {} rejected: {illegal}",
                        scenario.name, step.from, step.to
                    );
                    assert_eq!(illegal.board, board);
                }
                Err(err) => panic!("{}: unexpected error {err}", scenario.name),
            }
        }

        assert_eq!(
            board.pieces().count(),
            scenario.final_pieces,
            "{}: piece count",
            scenario.name
        );
        assert_eq!(
            board.turn_of(),
            &player(&scenario.final_turn),
            "{}: player to move",
            scenario.name
        );
    }
}
