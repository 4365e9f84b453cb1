//! Session lifecycle and scorekeeping.

use tictac_rules::{Board, Mark, Mode, MoveOutcome, RoundStatus, Session, Side};

fn play_all(session: &mut Session, indices: &[usize]) -> MoveOutcome {
    let mut last = MoveOutcome::Continued;
    for &index in indices {
        last = session.play(index);
    }
    last
}

#[test]
fn test_restart_round_keeps_scores() {
    let mut session = Session::human_vs_human();
    let outcome = play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert!(outcome.is_terminal());
    session.record_outcome(&outcome);
    let score = *session.score();

    let round = session.restart_round();
    assert_eq!(round.board(), &Board::new());
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.move_count(), 0);
    assert_eq!(round.turn(), Mark::X);
    assert_eq!(session.score(), &score);
    assert_eq!(*session.score().player_one(), 1);
}

#[test]
fn test_new_game_zeroes_scores() {
    let mut session = Session::human_vs_human();
    let outcome = play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, MoveOutcome::Drawn);
    session.record_outcome(&outcome);
    assert_eq!(*session.score().draws(), 1);

    session.new_game();
    assert_eq!(*session.score().draws(), 0);
    assert_eq!(*session.score().player_one(), 0);
    assert_eq!(*session.score().player_two(), 0);
    assert_eq!(session.round().move_count(), 0);
}

#[test]
fn test_duo_restart_always_starts_with_x() {
    let mut session = Session::human_vs_human();
    session.play(4);
    session.restart_round();
    assert_eq!(session.round().turn(), Mark::X);
}

#[test]
fn test_solo_restart_starts_with_human() {
    let mut session = Session::human_vs_computer(Mark::O);
    session.play(4);
    session.restart_round();
    assert_eq!(session.round().turn(), Mark::O);
    assert!(!session.computer_to_move());
}

#[test]
fn test_solo_scores_by_side() {
    let mut session = Session::human_vs_computer(Mark::O);
    // Human O takes the top row while the computer's X moves are scripted.
    for (index, mark) in [(0, Mark::O), (3, Mark::X), (1, Mark::O), (4, Mark::X), (2, Mark::O)] {
        session.apply_move(index, mark);
    }
    let outcome = MoveOutcome::from(session.round().status());
    session.record_outcome(&outcome);
    assert_eq!(session.score().wins(Side::PlayerOne), 1);
    assert_eq!(session.mode().label(Side::PlayerOne), "YOU (O)");

    session.restart_round();
    for (index, mark) in [(0, Mark::O), (3, Mark::X), (1, Mark::O), (4, Mark::X), (8, Mark::O), (5, Mark::X)] {
        session.apply_move(index, mark);
    }
    let outcome = MoveOutcome::from(session.round().status());
    assert!(matches!(outcome, MoveOutcome::Won { winner: Mark::X, .. }));
    session.record_outcome(&outcome);
    assert_eq!(session.score().wins(Side::PlayerTwo), 1);
    assert_eq!(session.mode(), Mode::HumanVsComputer { human: Mark::O });
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::human_vs_computer(Mark::X);
    session.play(4);
    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}
