// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The rule engine. `Game` owns the board and everything needed to play a
//! legal game of chess on it: the side to move, the check flag, the move
//! history, the repetition counter, and a cached legal-move list per ply.
//!
//! All board mutation funnels through `apply_move`/`unapply_last_move`,
//! which form a reversible state machine: applying and then unapplying any
//! legal move restores the position, the turn, the check flag and the
//! repetition counts exactly. Callers must unapply in reverse order of
//! application.

use arrayvec::ArrayVec;
use hashbrown::HashMap;

use crate::board::Board;
use crate::geometry;
use crate::moves::Move;
use crate::types::{CastleSide, Color, Piece, PieceId, PieceKind, Rank, Square};
use crate::types::{CASTLE_SIDES, COLORS};

static PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Recoverable rule errors. Each is rejected before any state changes, so
/// the caller can check state or pick a different move and carry on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The game is over; no further moves can be applied.
    Finished,
    /// The move is not in the current legal-move set.
    IllegalMove(Move),
    /// The winner was queried while the game is still in progress.
    NotFinished,
}

/// The squares involved in a castling move for one side of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_origin: Square,
    pub king_destination: Square,
    pub rook_origin: Square,
    pub rook_destination: Square,
    /// The knight's home square between rook and king, which must also be
    /// empty for the long castle. `None` for the short side.
    pub long_gap: Option<Square>,
}

/// Everything needed to invert one applied move: the move itself, the
/// piece identities it moved (two for castling), the captured piece if
/// any, and the pre-promotion pawn if any.
#[derive(Clone, Debug)]
struct HistoryRecord {
    mov: Move,
    moved: ArrayVec<[Piece; 2]>,
    captured: Option<Piece>,
    promoted: Option<Piece>,
}

pub struct Game {
    board: Board,
    turn: Color,
    in_check: bool,
    history: Vec<HistoryRecord>,
    repetitions: HashMap<String, u32>,
    // One legal-move list per ply; the top always matches the current
    // board and turn.
    legal_stack: Vec<Vec<Move>>,
}

impl Game {
    /// Starts a game from the standard position, White to move.
    pub fn new() -> Game {
        Game::from_board(Board::standard(), Color::White)
    }

    /// Starts a game from an arbitrary placement. The board must hold one
    /// king for each color.
    pub fn from_board(board: Board, turn: Color) -> Game {
        let mut repetitions = HashMap::new();
        repetitions.insert(board.layout_key(), 1);
        let mut game = Game {
            board,
            turn,
            in_check: false,
            history: Vec::new(),
            repetitions,
            legal_stack: Vec::new(),
        };
        game.refresh_check_flag();
        let moves = game.generate_legal_moves();
        game.legal_stack.push(moves);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// How many times the given layout has occurred so far.
    pub fn repetition_count(&self, layout_key: &str) -> u32 {
        self.repetitions.get(layout_key).copied().unwrap_or(0)
    }

    /// The legal moves in the current position. The list is computed once
    /// per ply and cached.
    pub fn legal_moves(&self) -> &[Move] {
        self.legal_stack.last().expect("legal move cache is empty")
    }
}

//
// Attack detection
//

impl Game {
    /// Returns true if `target` is attacked by any piece of the enemy of
    /// `defender`.
    ///
    /// For each sliding and leaping kind, a hypothetical attacker of that
    /// kind is placed on `target` and its rays are walked outward,
    /// stopping at the first occupied square; the square is attacked if
    /// that occupant is an enemy piece of exactly the probed kind. Pawns
    /// don't capture along their movement geometry, so they get a direct
    /// adjacency check instead: one rank toward the enemy, either file.
    pub fn is_attacked(&self, target: Square, defender: Color) -> bool {
        static PROBE_KINDS: [PieceKind; 5] = [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ];

        for &kind in &PROBE_KINDS {
            for ray in geometry::rays(kind, defender, target, false) {
                for sq in ray {
                    match self.board.piece_at(sq) {
                        None => continue,
                        Some(p) if p.color != defender && p.kind == kind => return true,
                        Some(_) => break,
                    }
                }
            }
        }

        let toward_enemy = match defender {
            Color::White => 1,
            Color::Black => -1,
        };
        for &file_delta in &[-1, 1] {
            if let Some(sq) = target.offset(file_delta, toward_enemy) {
                if let Some(p) = self.board.piece_at(sq) {
                    if p.color != defender && p.kind == PieceKind::Pawn {
                        return true;
                    }
                }
            }
        }

        false
    }

    fn refresh_check_flag(&mut self) {
        let king = self.board.king(self.turn).expect("side to move has no king");
        let king_square = self.board.square_of(king);
        self.in_check = self.is_attacked(king_square, king.color);
    }
}

//
// Legal move generation
//

impl Game {
    fn pawn_moves(&self) -> Vec<Move> {
        let last_rank = match self.turn {
            Color::White => Rank::Eight,
            Color::Black => Rank::One,
        };

        let mut moves = Vec::new();
        for pawn in self.board.pawns(Some(self.turn)) {
            let origin = self.board.square_of(pawn);

            // Pushes: stop in front of the first occupied square. A push
            // onto the final rank becomes four promotions.
            for ray in geometry::rays(PieceKind::Pawn, pawn.color, origin, false) {
                for destination in ray {
                    if self.board.piece_at(destination).is_some() {
                        break;
                    }
                    if destination.rank() == last_rank {
                        for &promote_to in &PROMOTION_KINDS {
                            moves.push(Move::Promotion {
                                origin,
                                destination,
                                promote_to,
                            });
                        }
                    } else {
                        moves.push(Move::Quiet {
                            origin,
                            destination,
                        });
                    }
                }
            }

            // Diagonal captures: kept only when the destination holds an
            // enemy piece or is en-passant eligible.
            for ray in geometry::rays(PieceKind::Pawn, pawn.color, origin, true) {
                for destination in ray {
                    if self.can_capture_en_passant(destination) {
                        moves.push(Move::EnPassant {
                            origin,
                            destination,
                        });
                        continue;
                    }
                    match self.board.piece_at(destination) {
                        None => break,
                        Some(p) if p.color == pawn.color => break,
                        Some(_) => {
                            if destination.rank() == last_rank {
                                for &promote_to in &PROMOTION_KINDS {
                                    moves.push(Move::PromotionCapture {
                                        origin,
                                        destination,
                                        promote_to,
                                    });
                                }
                            } else {
                                moves.push(Move::Capture {
                                    origin,
                                    destination,
                                });
                            }
                        }
                    }
                }
            }
        }
        moves
    }

    fn figure_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for figure in self.board.figures(Some(self.turn)) {
            let origin = self.board.square_of(figure);
            for ray in geometry::rays(figure.kind, figure.color, origin, false) {
                for destination in ray {
                    match self.board.piece_at(destination) {
                        None => moves.push(Move::Quiet {
                            origin,
                            destination,
                        }),
                        Some(p) if p.color != self.turn => {
                            moves.push(Move::Capture {
                                origin,
                                destination,
                            });
                            break;
                        }
                        Some(_) => break,
                    }
                }
            }
        }
        moves
    }

    /// En-passant eligibility for a pawn capture landing on `destination`:
    /// the destination must sit on the mover's en-passant rank, and the
    /// immediately preceding move must have been an enemy pawn's two-square
    /// advance through that square's file.
    fn can_capture_en_passant(&self, destination: Square) -> bool {
        let capture_rank = match self.turn {
            Color::White => Rank::Six,
            Color::Black => Rank::Three,
        };
        if destination.rank() != capture_rank {
            return false;
        }

        let last = match self.history.last() {
            Some(record) => record,
            None => return false,
        };
        if let Move::Castle(_) = last.mov {
            return false;
        }

        let piece = last.moved[0];
        if piece.kind != PieceKind::Pawn {
            return false;
        }

        let (home_rank, advance_rank) = match piece.color {
            Color::White => (Rank::Two, Rank::Four),
            Color::Black => (Rank::Seven, Rank::Five),
        };
        let last_origin = last.mov.origin().expect("non-castle move has an origin");
        let last_destination = last
            .mov
            .destination()
            .expect("non-castle move has a destination");
        last_origin.file() == destination.file()
            && last_origin.rank() == home_rank
            && last_destination.file() == destination.file()
            && last_destination.rank() == advance_rank
    }

    /// The squares involved in castling for the side to move.
    pub fn castle_squares(&self, side: CastleSide) -> CastleSquares {
        let rank = match self.turn {
            Color::White => Rank::One,
            Color::Black => Rank::Eight,
        };
        match side {
            CastleSide::Short => CastleSquares {
                king_origin: Square::of(crate::types::File::E, rank),
                king_destination: Square::of(crate::types::File::G, rank),
                rook_origin: Square::of(crate::types::File::H, rank),
                rook_destination: Square::of(crate::types::File::F, rank),
                long_gap: None,
            },
            CastleSide::Long => CastleSquares {
                king_origin: Square::of(crate::types::File::E, rank),
                king_destination: Square::of(crate::types::File::C, rank),
                rook_origin: Square::of(crate::types::File::A, rank),
                rook_destination: Square::of(crate::types::File::D, rank),
                long_gap: Some(Square::of(crate::types::File::B, rank)),
            },
        }
    }

    fn piece_has_moved(&self, id: PieceId) -> bool {
        self.history
            .iter()
            .any(|record| record.moved.iter().any(|p| p.id == id))
    }

    fn can_castle(&self, side: CastleSide) -> bool {
        let squares = self.castle_squares(side);

        let king = match self.board.piece_at(squares.king_origin) {
            Some(p) if p.kind == PieceKind::King && p.color == self.turn => p,
            _ => return false,
        };
        if self.piece_has_moved(king.id) {
            return false;
        }

        let rook = match self.board.piece_at(squares.rook_origin) {
            Some(p) if p.kind == PieceKind::Rook && p.color == self.turn => p,
            _ => return false,
        };
        if self.piece_has_moved(rook.id) {
            return false;
        }

        if self.is_attacked(squares.king_origin, self.turn) {
            return false;
        }
        for &sq in &[squares.rook_destination, squares.king_destination] {
            if self.board.piece_at(sq).is_some() || self.is_attacked(sq, self.turn) {
                return false;
            }
        }
        if let Some(gap) = squares.long_gap {
            if self.board.piece_at(gap).is_some() {
                return false;
            }
        }

        true
    }

    /// Generates the full legal move list for the current position: pawn
    /// and figure pseudo-legal moves filtered through a king-safety probe,
    /// plus castling.
    ///
    /// The probe applies each candidate with cache maintenance bypassed,
    /// checks whether the mover's king is attacked, and unapplies.
    /// Castling is appended separately; `can_castle` performs its own
    /// king-safety checks on every square the king crosses.
    fn generate_legal_moves(&mut self) -> Vec<Move> {
        let mut candidates = self.pawn_moves();
        candidates.extend(self.figure_moves());

        let king = self.board.king(self.turn).expect("side to move has no king");
        let mut legal = Vec::with_capacity(candidates.len());
        for mov in candidates {
            self.apply_unchecked(mov, false);
            let king_square = self.board.square_of(king);
            let exposes_king = self.is_attacked(king_square, king.color);
            self.unapply_unchecked(false);
            if !exposes_king {
                legal.push(mov);
            }
        }

        for &side in &CASTLE_SIDES {
            if self.can_castle(side) {
                legal.push(Move::Castle(side));
            }
        }

        legal
    }
}

//
// Move application
//

impl Game {
    /// Applies a legal move. Rejected with no state change if the game is
    /// already finished or the move is not in the current legal set.
    pub fn apply_move(&mut self, mov: Move) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::Finished);
        }
        if !self.legal_moves().contains(&mov) {
            return Err(GameError::IllegalMove(mov));
        }

        trace!("applying {}", mov);
        self.apply_unchecked(mov, true);
        Ok(())
    }

    /// Unapplies the most recently applied move and returns it, restoring
    /// the board, turn, check flag and repetition counts to their prior
    /// state.
    ///
    /// Panics if no move has been applied; unapplying past the start of
    /// the game is a defect in the caller, not a rule condition.
    pub fn unapply_last_move(&mut self) -> Move {
        self.unapply_unchecked(true)
    }

    // The shared apply path. King-safety probing passes
    // `maintain_cache: false` to skip regenerating the legal-move list for
    // positions that exist only for the duration of the probe.
    fn apply_unchecked(&mut self, mov: Move, maintain_cache: bool) {
        let mut moved = ArrayVec::<[Piece; 2]>::new();
        let mut captured = None;
        let mut promoted = None;

        // Clear the captured piece off the board first. For en passant the
        // victim does not stand on the destination square but one rank
        // behind it, on the mover's side.
        match mov {
            Move::Capture { destination, .. } | Move::PromotionCapture { destination, .. } => {
                captured = Some(self.board.remove(destination));
            }
            Move::EnPassant {
                origin,
                destination,
            } => {
                let victim_square = Square::of(destination.file(), origin.rank());
                captured = Some(self.board.remove(victim_square));
            }
            _ => {}
        }

        match mov {
            Move::Castle(side) => {
                let squares = self.castle_squares(side);
                let king = self.board.remove(squares.king_origin);
                self.board.place(king, squares.king_destination);
                let rook = self.board.remove(squares.rook_origin);
                self.board.place(rook, squares.rook_destination);
                moved.push(king);
                moved.push(rook);
            }
            _ => {
                let origin = mov.origin().expect("non-castle move has an origin");
                let destination = mov.destination().expect("non-castle move has a destination");
                let piece = self.board.remove(origin);
                moved.push(piece);
                if let Some(promote_to) = mov.promotion_kind() {
                    // The pawn is consumed; a brand-new piece with its own
                    // identity appears on the destination square.
                    promoted = Some(piece);
                    self.board.new_piece(promote_to, self.turn, destination);
                } else {
                    self.board.place(piece, destination);
                }
            }
        }

        self.history.push(HistoryRecord {
            mov,
            moved,
            captured,
            promoted,
        });
        self.turn = self.turn.toggle();
        self.refresh_check_flag();
        *self
            .repetitions
            .entry(self.board.layout_key())
            .or_insert(0) += 1;

        if maintain_cache {
            let moves = self.generate_legal_moves();
            self.legal_stack.push(moves);
        }
    }

    fn unapply_unchecked(&mut self, maintain_cache: bool) -> Move {
        let record = self
            .history
            .pop()
            .expect("unapply_last_move: no moves have been applied");

        let key = self.board.layout_key();
        let count = {
            let count = self
                .repetitions
                .get_mut(&key)
                .expect("repetition map out of sync with board");
            *count -= 1;
            *count
        };
        if count == 0 {
            self.repetitions.remove(&key);
        }

        if maintain_cache {
            self.legal_stack.pop();
        }
        self.turn = self.turn.toggle();

        match record.mov {
            Move::Castle(side) => {
                let squares = self.castle_squares(side);
                let king = self.board.remove(squares.king_destination);
                self.board.place(king, squares.king_origin);
                let rook = self.board.remove(squares.rook_destination);
                self.board.place(rook, squares.rook_origin);
            }
            _ => {
                let origin = record.mov.origin().expect("non-castle move has an origin");
                let destination = record
                    .mov
                    .destination()
                    .expect("non-castle move has a destination");
                let piece = self.board.remove(destination);
                let restored = if record.mov.promotion_kind().is_some() {
                    // Drop the promoted-to piece; the original pawn comes
                    // back in its place.
                    record
                        .promoted
                        .expect("promotion record missing its pre-promotion pawn")
                } else {
                    piece
                };
                self.board.place(restored, origin);
            }
        }

        match record.mov {
            Move::Capture { destination, .. } | Move::PromotionCapture { destination, .. } => {
                let captured = record.captured.expect("capture record missing its victim");
                self.board.place(captured, destination);
            }
            Move::EnPassant {
                origin,
                destination,
            } => {
                let captured = record.captured.expect("capture record missing its victim");
                self.board
                    .place(captured, Square::of(destination.file(), origin.rank()));
            }
            _ => {}
        }

        self.refresh_check_flag();
        record.mov
    }
}

//
// Termination
//

impl Game {
    /// The game is over when no legal moves remain, when any layout has
    /// occurred three times, or when neither side retains mating material.
    pub fn is_finished(&self) -> bool {
        self.legal_moves().is_empty()
            || self.max_repetitions() >= 3
            || self.insufficient_material()
    }

    /// The winning side, or `None` for a draw. Errors if the game is not
    /// over yet.
    pub fn winner(&self) -> Result<Option<Color>, GameError> {
        if !self.is_finished() {
            return Err(GameError::NotFinished);
        }
        if self.max_repetitions() >= 3 || self.insufficient_material() {
            return Ok(None);
        }
        if self.in_check {
            // Checkmate: the side to move has no way out.
            Ok(Some(self.turn.toggle()))
        } else {
            // Stalemate.
            Ok(None)
        }
    }

    fn max_repetitions(&self) -> u32 {
        self.repetitions.values().copied().max().unwrap_or(0)
    }

    // Neither side can force mate when nobody has a pawn, a queen or a
    // rook, and nobody has more than one minor piece.
    fn insufficient_material(&self) -> bool {
        for &color in &COLORS {
            let mut minors = 0;
            for piece in self.board.pieces(Some(color)) {
                match piece.kind {
                    PieceKind::Pawn | PieceKind::Queen | PieceKind::Rook => return false,
                    PieceKind::Bishop | PieceKind::Knight => minors += 1,
                    PieceKind::King => {}
                }
            }
            if minors > 1 {
                return false;
            }
        }
        true
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
