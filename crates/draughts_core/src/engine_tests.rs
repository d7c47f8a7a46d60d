use super::*;
use crate::types::{MoveFlags, PieceKind};

fn chain_position() -> Position {
    // c3 takes d4 then d6; f2 gets a capture of its own once d4 is gone.
    Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . . . b . . . .
        . . . . . . . .
        . . . b . . . .
        . . w . b . . .
        . . . . . w . .
        . . . . . . . .
        ",
        Color::White,
    )
    .unwrap()
}

#[test]
fn test_new_engine_is_reset() {
    let engine = Engine::new();
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(engine.board().len(), 24);
    assert_eq!(engine.legal_moves().len(), 7);
    assert_eq!(engine.jumper(), None);
}

#[test]
fn test_quiet_move_passes_turn() {
    let mut engine = Engine::new();
    let mv = Move::quiet(18, 27); // c3-d4
    assert!(engine.legal_moves().contains(&mv));

    engine.act(mv).unwrap();
    assert_eq!(engine.turn(), Color::Black);
    assert_eq!(engine.board().len(), 24);
    assert_eq!(engine.position().piece_at(27).map(|p| p.color), Some(Color::White));
}

#[test]
fn test_illegal_move_leaves_state_unchanged() {
    let mut engine = Engine::new();
    let before = engine;

    let err = engine.act(Move::quiet(18, 36)).unwrap_err();
    assert_eq!(err, MoveError::Illegal(Move::quiet(18, 36)));
    assert_eq!(engine, before);

    // Right squares, wrong flags
    assert!(engine.act(Move::capture(18, 27)).is_err());
    assert_eq!(engine, before);

    assert_eq!(err.to_string(), "illegal move c3-e5");
}

#[test]
fn test_act_enforces_forced_capture() {
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . . . b . . . .
        . . w . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . w .
        ",
        Color::White,
    )
    .unwrap();
    let mut engine = Engine::from_position(pos);

    let quiet = Move::quiet(6, 15); // g1-h2
    assert!(engine.legal(quiet));
    assert_eq!(engine.act(quiet), Err(MoveError::Illegal(quiet)));

    engine.act(Move::capture(34, 52)).unwrap(); // c5xe7
    assert_eq!(engine.position().piece_at(43), None);
    assert_eq!(engine.turn(), Color::Black);
    assert!(engine.legal_moves().is_empty()); // black has nothing left
}

#[test]
fn test_multi_jump_keeps_turn_and_restricts_to_jumper() {
    let mut engine = Engine::from_position(chain_position());
    assert_eq!(engine.legal_moves(), vec![Move::capture(18, 36)]); // c3xe5

    engine.act(Move::capture(18, 36)).unwrap();
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(engine.jumper(), Some(36));

    // The position alone would also allow f2xd4; the jump in progress wins.
    let everything = crate::movegen::legal_moves(engine.position());
    assert!(everything.contains(&Move::capture(13, 27)));
    assert_eq!(engine.legal_moves(), vec![Move::capture(36, 50)]); // e5xc7
    assert!(engine.act(Move::capture(13, 27)).is_err());

    engine.act(Move::capture(36, 50)).unwrap();
    assert_eq!(engine.turn(), Color::Black);
    assert_eq!(engine.jumper(), None);

    // Black's last man must now take f2 and crowns on g1
    assert_eq!(
        engine.legal_moves(),
        vec![Move::new(20, 6, MoveFlags::CAPTURE | MoveFlags::PROMOTION)]
    );
    engine.act(Move::new(20, 6, MoveFlags::CAPTURE | MoveFlags::PROMOTION)).unwrap();
    assert_eq!(
        engine.position().piece_at(6),
        Some(Piece::new(Color::Black, PieceKind::King))
    );
    assert_eq!(engine.turn(), Color::White);
}

#[test]
fn test_promoted_piece_continues_as_king() {
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . b . b .
        . . . w . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Color::White,
    )
    .unwrap();
    let mut engine = Engine::from_position(pos);

    let crown = Move::new(43, 61, MoveFlags::CAPTURE | MoveFlags::PROMOTION); // d6xf8
    assert_eq!(engine.legal_moves(), vec![crown]);
    engine.act(crown).unwrap();

    assert!(engine.position().kings.contains(61));
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(engine.legal_moves(), vec![Move::capture(61, 47)]); // f8xh6
}

#[test]
fn test_reset_clears_jump_in_progress() {
    let mut engine = Engine::from_position(chain_position());
    engine.act(Move::capture(18, 36)).unwrap();
    assert!(engine.jumper().is_some());

    engine.reset();
    assert_eq!(engine, Engine::new());
}

#[test]
fn test_legal_predicate_checks_reach() {
    let engine = Engine::new();
    assert!(engine.legal(Move::quiet(18, 27)));
    assert!(!engine.legal(Move::quiet(18, 36)));
    assert!(!engine.legal(Move::quiet(41, 34))); // black piece on white's turn
}
