//! Tests for the rules engine.

use proptest::prelude::*;
use tictactoe_core::{
    Board, GameState, GameStatus, InvalidMove, Player, Square, TerminalResult, WIN_CONDITIONS,
    evaluate_terminal,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn full_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(prop_oneof![
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ])
    .prop_map(Board::from_squares)
}

/// Plays the indices in order, skipping the ones the engine rejects.
fn reachable_state(indices: &[usize]) -> GameState {
    indices.iter().fold(GameState::new(), |state, &index| {
        state.play(index).unwrap_or(state)
    })
}

fn first_match(board: &Board) -> Option<(Player, [usize; 3])> {
    let squares = board.squares();
    WIN_CONDITIONS.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(p) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((p, [a, b, c]))
        }
        _ => None,
    })
}

#[test]
fn test_win_scenario_top_row() {
    let board: Board = "XXXOO....".parse().unwrap();
    assert_eq!(
        evaluate_terminal(&board),
        TerminalResult::Won(Player::X, [0, 1, 2])
    );
}

#[test]
fn test_draw_scenario() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert_eq!(evaluate_terminal(&board), TerminalResult::Draw);
}

#[test]
fn test_out_of_range_rejected() {
    let state = GameState::new();
    let err = state.apply_move(9, Player::X).unwrap_err();
    assert_eq!(err.reason(), InvalidMove::OutOfBounds(9));
    assert_eq!(state, GameState::new());
}

#[test]
fn test_occupied_rejected() {
    let state = GameState::new().apply_move(4, Player::X).unwrap();
    let before = state.clone();
    let err = state.apply_move(4, Player::O).unwrap_err();
    assert_eq!(err.reason(), InvalidMove::Occupied(4));
    assert_eq!(state, before);
}

#[test]
fn test_reset_after_win() {
    let won = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(won.status(), GameStatus::Won(Player::X));

    let fresh = GameState::reset();
    assert_eq!(fresh.board(), &Board::new());
    assert_eq!(fresh.current_player(), Player::X);
    assert_eq!(fresh.status(), GameStatus::InProgress);
}

#[test]
fn test_state_serializes() {
    let state = GameState::replay(&[4, 0]).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

proptest! {
    #[test]
    fn prop_first_matching_line_reported(board in any_board()) {
        let result = evaluate_terminal(&board);
        match first_match(&board) {
            Some((player, line)) => {
                prop_assert_eq!(result, TerminalResult::Won(player, line));
            }
            None => {
                prop_assert!(!matches!(result, TerminalResult::Won(..)));
            }
        }
    }

    #[test]
    fn prop_full_board_without_line_is_draw(board in full_board()) {
        prop_assume!(first_match(&board).is_none());
        prop_assert_eq!(evaluate_terminal(&board), TerminalResult::Draw);
    }

    #[test]
    fn prop_rejected_moves_leave_state_alone(
        indices in proptest::collection::vec(0usize..9, 0..12),
        probe in 0usize..16,
    ) {
        let state = reachable_state(&indices);
        let before = state.clone();
        let occupied = !state.board().is_empty(probe);
        if occupied || state.is_over() {
            prop_assert!(state.play(probe).is_err());
            prop_assert_eq!(state, before);
        }
    }

    #[test]
    fn prop_turns_toggle_until_terminal(indices in proptest::collection::vec(0usize..9, 0..12)) {
        let mut state = GameState::new();
        for index in indices {
            let mover = state.current_player();
            let was_over = state.is_over();
            match state.play(index) {
                Ok(next) => {
                    prop_assert!(!was_over);
                    if next.is_over() {
                        prop_assert_eq!(next.current_player(), mover);
                    } else {
                        prop_assert_eq!(next.current_player(), mover.opponent());
                    }
                    state = next;
                }
                Err(_) => {
                    prop_assert_eq!(state.current_player(), mover);
                }
            }
        }
    }
}
