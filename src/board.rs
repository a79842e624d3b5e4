// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use hashbrown::HashMap;

use crate::types::{Color, File, Piece, PieceId, PieceKind, Rank, Square, TableIndex};
use crate::types::{FILES, RANKS};

/// Piece placement for a game of chess: a square-indexed grid, a reverse
/// index from piece identity to square, and per-color piece lists ordered
/// by insertion.
///
/// The grid and the reverse index are kept mutually inverse at all times.
/// A `Board` does no legality checking whatsoever; it is a placement
/// structure and nothing more.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [Option<Piece>; 64],
    index: HashMap<PieceId, Square>,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    next_id: u32,
}

impl Board {
    /// Creates a board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            grid: [None; 64],
            index: HashMap::new(),
            white_pieces: Vec::new(),
            black_pieces: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates a board in the standard chess starting position.
    pub fn standard() -> Board {
        let mut board = Board::empty();
        board.populate_figures(Color::Black, Rank::Eight);
        board.populate_pawns(Color::Black, Rank::Seven);
        board.populate_pawns(Color::White, Rank::Two);
        board.populate_figures(Color::White, Rank::One);
        board
    }

    fn populate_figures(&mut self, color: Color, rank: Rank) {
        static BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, &kind) in FILES.iter().zip(BACK_RANK.iter()) {
            self.new_piece(kind, color, Square::of(*file, rank));
        }
    }

    fn populate_pawns(&mut self, color: Color, rank: Rank) {
        for &file in &FILES {
            self.new_piece(PieceKind::Pawn, color, Square::of(file, rank));
        }
    }

    /// Creates a brand-new piece with a fresh identity and places it on
    /// the given square. Used at setup and at promotion.
    pub fn new_piece(&mut self, kind: PieceKind, color: Color, square: Square) -> Piece {
        let piece = Piece {
            id: PieceId(self.next_id),
            kind,
            color,
        };
        self.next_id += 1;
        self.place(piece, square);
        piece
    }

    /// Places an existing piece on the given square, recording it in the
    /// reverse index and appending it to its color's piece list.
    ///
    /// Panics if the square is already occupied; the rule layer never
    /// stacks pieces.
    pub fn place(&mut self, piece: Piece, square: Square) {
        let slot = &mut self.grid[square.as_index()];
        assert!(
            slot.is_none(),
            "place: square {} is already occupied",
            square
        );
        *slot = Some(piece);
        self.index.insert(piece.id, square);
        match piece.color {
            Color::White => self.white_pieces.push(piece),
            Color::Black => self.black_pieces.push(piece),
        }
    }

    /// Removes and returns the occupant of the given square, detaching it
    /// from the reverse index and its color's piece list.
    ///
    /// Panics if the square is empty: callers always know the occupant
    /// exists, so an empty square here means the grid and index have
    /// diverged.
    pub fn remove(&mut self, square: Square) -> Piece {
        let piece = self.grid[square.as_index()]
            .take()
            .unwrap_or_else(|| panic!("remove: square {} is empty", square));
        self.index.remove(&piece.id);
        let list = match piece.color {
            Color::White => &mut self.white_pieces,
            Color::Black => &mut self.black_pieces,
        };
        let pos = list
            .iter()
            .position(|p| p.id == piece.id)
            .expect("piece list out of sync with grid");
        list.remove(pos);
        piece
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.as_index()]
    }

    /// The square a placed piece stands on.
    ///
    /// Panics if the piece is not on the board; looking up a removed piece
    /// is an internal defect, not a recoverable condition.
    pub fn square_of(&self, piece: Piece) -> Square {
        match self.index.get(&piece.id) {
            Some(&sq) => sq,
            None => panic!("piece {} is not on the board", piece),
        }
    }

    /// All pieces of the given color, or of both colors (White first) if
    /// `color` is `None`, in insertion order.
    pub fn pieces(&self, color: Option<Color>) -> impl Iterator<Item = Piece> + '_ {
        let (white, black): (&[Piece], &[Piece]) = match color {
            Some(Color::White) => (&self.white_pieces, &[]),
            Some(Color::Black) => (&[], &self.black_pieces),
            None => (&self.white_pieces, &self.black_pieces),
        };
        white.iter().chain(black.iter()).copied()
    }

    pub fn pawns(&self, color: Option<Color>) -> impl Iterator<Item = Piece> + '_ {
        self.pieces(color).filter(|p| p.kind == PieceKind::Pawn)
    }

    /// All non-pawn pieces.
    pub fn figures(&self, color: Option<Color>) -> impl Iterator<Item = Piece> + '_ {
        self.pieces(color).filter(|p| p.kind != PieceKind::Pawn)
    }

    /// The first king of the given color, if one is placed.
    pub fn king(&self, color: Color) -> Option<Piece> {
        self.pieces(Some(color)).find(|p| p.kind == PieceKind::King)
    }

    /// Canonical serialization of the piece layout, used as the repetition
    /// key. Ranks from eight down to one separated by `/`, each square as
    /// its FEN piece character or `.` when empty. Two keys are equal iff
    /// every square matches; side to move, castling rights and en-passant
    /// rights are deliberately not part of the key.
    pub fn layout_key(&self) -> String {
        let mut key = String::with_capacity(71);
        for &rank in RANKS.iter().rev() {
            for &file in &FILES {
                match self.piece_at(Square::of(file, rank)) {
                    Some(piece) => key.push(piece.fen_char()),
                    None => key.push('.'),
                }
            }
            if rank != Rank::One {
                key.push('/');
            }
        }
        key
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            for &file in &FILES {
                match self.piece_at(Square::of(file, rank)) {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "| {}", rank)?;
        }

        for _ in &FILES {
            write!(f, "---")?;
        }
        writeln!(f)?;
        for &file in &FILES {
            write!(f, " {} ", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}
