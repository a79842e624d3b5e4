// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gambit::types::Square;
use gambit::{Board, Color, Game, GameError, Move, PieceKind};

fn mov(notation: &str) -> Move {
    notation.parse().unwrap()
}

fn play(game: &mut Game, notations: &[&str]) {
    for notation in notations {
        game.apply_move(mov(notation)).unwrap();
    }
}

#[test]
fn fools_mate() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(&mut game, &["f2-f3", "e7-e5", "g2-g4", "d8-h4"]);

    assert!(game.in_check());
    assert!(game.legal_moves().is_empty());
    assert!(game.is_finished());
    assert_eq!(Some(Color::Black), game.winner().unwrap());
    assert_eq!(GameError::Finished, game.apply_move(mov("a2-a3")).unwrap_err());
}

#[test]
fn stalemate_is_a_draw() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::Black, Square::A8);
    board.new_piece(PieceKind::Queen, Color::White, Square::C7);
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    let game = Game::from_board(board, Color::Black);

    assert!(!game.in_check());
    assert!(game.legal_moves().is_empty());
    assert!(game.is_finished());
    assert_eq!(None, game.winner().unwrap());
}

#[test]
fn bare_kings_draw_immediately() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    let game = Game::from_board(board, Color::White);

    assert!(game.is_finished());
    assert_eq!(None, game.winner().unwrap());
}

#[test]
fn lone_minor_piece_cannot_mate() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Bishop, Color::White, Square::C1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    board.new_piece(PieceKind::Knight, Color::Black, Square::B8);
    let game = Game::from_board(board, Color::White);
    assert!(game.is_finished());
    assert_eq!(None, game.winner().unwrap());
}

#[test]
fn two_minors_on_one_side_keep_the_game_alive() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Bishop, Color::White, Square::C1);
    board.new_piece(PieceKind::Knight, Color::White, Square::B1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    let game = Game::from_board(board, Color::White);
    assert!(!game.is_finished());
}

#[test]
fn rook_endings_are_not_drawn_by_material() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Rook, Color::White, Square::A1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    let game = Game::from_board(board, Color::White);
    assert!(!game.is_finished());
}

#[test]
fn threefold_repetition_draws() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    let initial = game.board().layout_key();
    assert_eq!(1, game.repetition_count(&initial));

    // Two full knight shuffles return to the initial layout twice more.
    play(
        &mut game,
        &["g1-f3", "g8-f6", "f3-g1", "f6-g8", "g1-f3", "g8-f6", "f3-g1"],
    );
    assert!(!game.is_finished());
    play(&mut game, &["f6-g8"]);

    assert_eq!(3, game.repetition_count(&initial));
    assert!(game.is_finished());
    assert_eq!(None, game.winner().unwrap());
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(&mut game, &["e2-e4", "a7-a6", "e4-e5", "d7-d5"]);

    let en_passant = mov("e5xd6 e.p.");
    assert!(game.legal_moves().contains(&en_passant));

    game.apply_move(en_passant).unwrap();
    // The victim stood behind the destination square.
    assert!(game.board().piece_at(Square::D5).is_none());
    let capturer = game.board().piece_at(Square::D6).unwrap();
    assert_eq!(PieceKind::Pawn, capturer.kind);
    assert_eq!(Color::White, capturer.color);
    assert_eq!(7, game.board().pawns(Some(Color::Black)).count());

    game.unapply_last_move();
    assert!(game.board().piece_at(Square::D5).is_some());
    assert!(game.board().piece_at(Square::D6).is_none());
    assert_eq!(8, game.board().pawns(Some(Color::Black)).count());
}

#[test]
fn en_passant_expires_after_one_move() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(&mut game, &["e2-e4", "a7-a6", "e4-e5", "d7-d5", "h2-h3", "a6-a5"]);
    // The double push is two moves old now.
    assert!(!game.legal_moves().contains(&mov("e5xd6 e.p.")));
}

#[test]
fn short_castle_moves_king_and_rook() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(
        &mut game,
        &["e2-e4", "e7-e5", "g1-f3", "g8-f6", "f1-c4", "f8-c5"],
    );

    assert!(game.legal_moves().contains(&mov("O-O")));
    game.apply_move(mov("O-O")).unwrap();

    let king = game.board().piece_at(Square::G1).unwrap();
    assert_eq!(PieceKind::King, king.kind);
    let rook = game.board().piece_at(Square::F1).unwrap();
    assert_eq!(PieceKind::Rook, rook.kind);
    assert!(game.board().piece_at(Square::E1).is_none());
    assert!(game.board().piece_at(Square::H1).is_none());

    game.unapply_last_move();
    assert_eq!(
        PieceKind::King,
        game.board().piece_at(Square::E1).unwrap().kind
    );
    assert_eq!(
        PieceKind::Rook,
        game.board().piece_at(Square::H1).unwrap().kind
    );
}

#[test]
fn castling_rights_die_with_rook_moves() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(
        &mut game,
        &["e2-e4", "e7-e5", "g1-f3", "g8-f6", "f1-c4", "f8-c5"],
    );
    // Shuffle the rook out and back; the right is gone for good even
    // though the layout is restored.
    play(&mut game, &["h1-f1", "a7-a6", "f1-h1", "b7-b6"]);

    assert!(!game.legal_moves().contains(&mov("O-O")));
    assert_eq!(
        GameError::IllegalMove(mov("O-O")),
        game.apply_move(mov("O-O")).unwrap_err()
    );
}

#[test]
fn castling_blocked_out_of_check() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Rook, Color::White, Square::H1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    board.new_piece(PieceKind::Rook, Color::Black, Square::E5);
    let game = Game::from_board(board, Color::White);

    assert!(game.in_check());
    assert!(!game.legal_moves().contains(&mov("O-O")));
}

#[test]
fn castling_blocked_through_attacked_square() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Rook, Color::White, Square::H1);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    board.new_piece(PieceKind::Rook, Color::Black, Square::F5);
    let game = Game::from_board(board, Color::White);

    // The king would pass through f1, which the rook covers.
    assert!(!game.in_check());
    assert!(!game.legal_moves().contains(&mov("O-O")));
}

#[test]
fn promotion_swaps_the_pawn_for_a_new_piece() {
    let _ = env_logger::try_init();
    let mut board = Board::empty();
    board.new_piece(PieceKind::King, Color::White, Square::E1);
    board.new_piece(PieceKind::Pawn, Color::White, Square::A7);
    board.new_piece(PieceKind::King, Color::Black, Square::E8);
    board.new_piece(PieceKind::Rook, Color::Black, Square::B8);
    let mut game = Game::from_board(board, Color::White);

    // Push promotions and the capture promotion onto b8 both offered.
    assert!(game.legal_moves().contains(&mov("a7-a8=Q")));
    assert!(game.legal_moves().contains(&mov("a7-a8=N")));
    assert!(game.legal_moves().contains(&mov("a7xb8=Q")));

    game.apply_move(mov("a7xb8=Q")).unwrap();
    let queen = game.board().piece_at(Square::B8).unwrap();
    assert_eq!(PieceKind::Queen, queen.kind);
    assert_eq!(Color::White, queen.color);
    assert_eq!(0, game.board().pawns(Some(Color::White)).count());

    game.unapply_last_move();
    let pawn = game.board().piece_at(Square::A7).unwrap();
    assert_eq!(PieceKind::Pawn, pawn.kind);
    let rook = game.board().piece_at(Square::B8).unwrap();
    assert_eq!(PieceKind::Rook, rook.kind);
    assert_eq!(Color::Black, rook.color);
}

#[test]
fn winner_is_unavailable_mid_game() {
    let _ = env_logger::try_init();
    let mut game = Game::new();
    play(&mut game, &["e2-e4"]);
    assert_eq!(GameError::NotFinished, game.winner().unwrap_err());
}
