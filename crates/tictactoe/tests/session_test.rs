//! Tests for session flow, tallies, and the computer opponent.

use tictactoe::{COMPUTER, Opponent, Session, SessionEvent};
use tictactoe_core::{GameStatus, Player};

fn play(session: &mut Session, indices: &[usize]) {
    for &index in indices {
        session.click(index).expect("legal move");
    }
}

#[test]
fn test_win_reports_line_and_counts_once() {
    let mut session = Session::new(Opponent::Human);
    play(&mut session, &[0, 3, 1, 4]);
    let event = session.click(2);
    assert_eq!(
        event,
        Some(SessionEvent::Won {
            player: Player::X,
            line: [0, 1, 2]
        })
    );
    assert_eq!(session.tally().x_wins(), 1);

    // Further clicks are rejected and do not touch the tally.
    assert_eq!(session.click(8), None);
    assert_eq!(session.tally().games(), 1);
}

#[test]
fn test_draw_counts() {
    let mut session = Session::new(Opponent::Human);
    play(&mut session, &[0, 1, 2, 3, 4, 6, 5, 8]);
    assert_eq!(session.click(7), Some(SessionEvent::Draw));
    assert_eq!(session.status_text(), "It's a draw!");
    assert_eq!(session.tally().draws(), 1);
}

#[test]
fn test_restart_keeps_tally() {
    let mut session = Session::new(Opponent::Human);
    play(&mut session, &[0, 3, 1, 4, 2]);
    let tally = *session.tally();

    session.restart();
    assert!(session.state().board().empty_squares().eq(0..9));
    assert_eq!(session.state().current_player(), Player::X);
    assert_eq!(session.state().status(), GameStatus::InProgress);
    assert_eq!(session.tally(), &tally);
}

#[test]
fn test_computer_answers_and_blocks() {
    let mut session = Session::new(Opponent::Computer);
    session.click(0).unwrap();
    assert!(session.awaits_computer());
    assert_eq!(
        session.computer_move(),
        Some(SessionEvent::Moved {
            player: COMPUTER,
            index: 4
        })
    );

    session.click(1).unwrap();
    assert_eq!(
        session.computer_move(),
        Some(SessionEvent::Moved {
            player: COMPUTER,
            index: 2
        })
    );
}

#[test]
fn test_clicks_ignored_on_computer_turn() {
    let mut session = Session::new(Opponent::Computer);
    session.click(0).unwrap();
    assert_eq!(session.click(5), None);
    assert!(session.state().board().is_empty(5));
}

#[test]
fn test_reply_after_restart_is_dropped() {
    let mut session = Session::new(Opponent::Computer);
    session.click(0).unwrap();
    session.restart();
    assert_eq!(session.computer_move(), None);
    assert!(session.state().history().is_empty());
}

#[test]
fn test_computer_never_moves_in_two_player_mode() {
    let mut session = Session::new(Opponent::Human);
    session.click(0).unwrap();
    assert!(!session.awaits_computer());
    assert_eq!(session.computer_move(), None);
}

#[test]
fn test_human_cannot_beat_computer_with_greedy_play() {
    let mut session = Session::new(Opponent::Computer);
    for _ in 0..5 {
        while !session.state().is_over() {
            let index = session
                .state()
                .board()
                .empty_squares()
                .next()
                .expect("open square");
            session.click(index).unwrap();
            if session.awaits_computer() {
                session.computer_move().unwrap();
            }
        }
        session.restart();
    }
    assert_eq!(session.tally().x_wins(), 0);
    assert_eq!(session.tally().games(), 5);
}
