use super::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        game.try_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{from}-{to}: {e}"));
    }
}

#[test]
fn test_opening_pawn_push() {
    let mut game = Game::new();
    let out = game.try_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(out.status, GameStatus::InProgress);
    assert_eq!(
        game.board().piece_at(sq("e4")),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert!(game.board().is_empty(sq("e2")));
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(game.ply(), 1);
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut game = Game::new();
    let before = *game.board();
    let err = game.try_move(sq("e7"), sq("e5")).unwrap_err();
    assert!(matches!(
        err,
        ChessError::IllegalMove {
            reason: IllegalMove::WrongSide,
            ..
        }
    ));
    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.ply(), 0);
}

#[test]
fn test_check_announced() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
    assert_eq!(game.status(), GameStatus::Check(Side::Black));
    assert!(game.is_in_check(Side::Black));
    assert!(!game.is_checkmate(Side::Black));
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let out = game.try_move(sq("d8"), sq("h4")).unwrap();
    assert_eq!(
        out.status,
        GameStatus::Checkmate {
            winner: Side::Black,
            plies: 4
        }
    );
    assert!(game.status().is_over());
    assert!(game.is_checkmate(Side::White));

    let err = game.try_move(sq("a2"), sq("a3")).unwrap_err();
    assert!(matches!(err, ChessError::GameOver { winner: Side::Black }));
}

#[test]
fn test_undo_redo_track_ply_and_side() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    let after = *game.board();

    assert!(game.undo().is_some());
    assert_eq!(game.ply(), 1);
    assert_eq!(game.side_to_move(), Side::Black);

    assert!(game.redo().is_some());
    assert_eq!(game.ply(), 2);
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.board(), &after);
}

#[test]
fn test_undo_on_fresh_game_is_noop() {
    let mut game = Game::new();
    assert!(game.undo().is_none());
    assert!(game.redo().is_none());
    assert_eq!(game.ply(), 0);
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn test_undo_after_mate_reopens_game() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
    game.undo();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.side_to_move(), Side::Black);
    game.try_move(sq("d8"), sq("e7")).unwrap();
}

#[test]
fn test_undo_and_redo_report_check() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5"), ("g7", "g6")]);
    assert_eq!(game.status(), GameStatus::InProgress);

    game.undo();
    assert_eq!(game.status(), GameStatus::Check(Side::Black));
    assert_eq!(game.state().redo_history().len(), 1);

    game.redo();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.state().redo_history().is_empty());
}

#[test]
fn test_redo_onto_mate_reports_check_only() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
    game.undo();
    game.redo();
    assert_eq!(game.status(), GameStatus::Check(Side::White));
    assert!(game.is_checkmate(Side::White));
}

#[test]
fn test_ply_count_stops_at_max() {
    let save: SaveGame = format!("white\n{}\n", u32::MAX).parse().unwrap();
    let mut game = Game::restore(&save).unwrap();
    game.try_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(game.ply(), u32::MAX);

    game.undo();
    assert_eq!(game.ply(), u32::MAX - 1);
    game.redo();
    game.redo();
    assert_eq!(game.ply(), u32::MAX);
}

#[test]
fn test_new_move_after_undo_drops_redo() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    game.undo();
    play(&mut game, &[("c7", "c5")]);
    assert!(game.redo().is_none());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_hint_destinations() {
    let game = Game::new();
    let mut d = game.legal_destinations_from(sq("b1")).unwrap();
    d.sort();
    assert_eq!(d, vec![sq("a3"), sq("c3")]);
    // hints work for the side not on move too
    assert_eq!(game.legal_destinations_from(sq("e7")).unwrap().len(), 2);
    assert!(matches!(
        game.legal_destinations_from(sq("e4")),
        Err(ChessError::EmptySquare(_))
    ));
}

#[test]
fn test_hint_filters_pinned_piece() {
    let board = Board::from_placement("4r2k/8/8/8/4R3/8/8/4K3").unwrap();
    let game = Game::from_board(board, Side::White);
    let legal = game.legal_destinations_from(sq("e4")).unwrap();
    let pseudo = game.pseudo_destinations_from(sq("e4")).unwrap();
    assert_eq!(legal.len(), 6, "e2, e3, e5, e6, e7, e8");
    assert_eq!(pseudo.len(), 13);
}

#[test]
fn test_threats() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5")]);
    assert_eq!(game.attackers_of(sq("e4")).unwrap(), vec![sq("d5")]);
    assert_eq!(game.attackers_of(sq("d5")).unwrap(), vec![sq("e4")]);
    assert!(game.attackers_of(sq("a1")).unwrap().is_empty());
    assert!(game.attackers_of(sq("e5")).is_err());
}

#[test]
fn test_king_escapes_file_check() {
    let board = Board::from_placement("4q2k/8/8/8/8/8/8/4K3").unwrap();
    let mut game = Game::from_board(board, Side::White);
    assert_eq!(game.status(), GameStatus::Check(Side::White));
    game.try_move(sq("e1"), sq("d1")).unwrap();
    assert!(!game.is_in_check(Side::White));
}

#[test]
fn test_restore_replays_and_keeps_header() {
    let save: SaveGame = "black\n3\nPe2e4\npe7e5\nNg1f3\n".parse().unwrap();
    let game = Game::restore(&save).unwrap();
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(game.ply(), 3);
    assert_eq!(
        game.board().piece_at(sq("f3")),
        Some(Piece::new(Side::White, PieceKind::Knight))
    );
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_replay_failure_leaves_game_untouched() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4")]);
    let before = *game.board();

    // second move starts from an empty square
    let save: SaveGame = "white\n2\nPd2d4\nPd2d3\n".parse().unwrap();
    let err = game.replay_history(&save).unwrap_err();
    assert!(matches!(err, ChessError::ReplayFailed { line: 4, .. }), "{err}");
    assert_eq!(game.board(), &before);
    assert_eq!(game.ply(), 1);
}

#[test]
fn test_replay_does_not_validate_legality() {
    // A queen jumping over pawns is accepted on load
    let save: SaveGame = "black\n1\nQd1d7\n".parse().unwrap();
    let game = Game::restore(&save).unwrap();
    assert_eq!(
        game.board().piece_at(sq("d7")),
        Some(Piece::new(Side::White, PieceKind::Queen))
    );
}

#[test]
fn test_replay_tolerates_piece_letter_mismatch() {
    let save: SaveGame = "black\n1\nNe2e4\n".parse().unwrap();
    let game = Game::restore(&save).unwrap();
    assert_eq!(
        game.board().piece_at(sq("e4")),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
}
