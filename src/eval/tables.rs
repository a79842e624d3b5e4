// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Score tables for the blended evaluator.
//!
//! Position tables are written from Black's point of view: row 0 is rank
//! one, row 7 is rank eight. White reads them mirrored (row `7 - rank`),
//! so one table serves both colors.

use crate::types::{Color, PieceKind, Square, TableIndex};

/// Classic material values in pawns. The king carries no material weight;
/// losing it ends the game, which the terminal score handles.
pub fn material_points(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// How much each kind's square coverage counts toward center control.
/// Cheap pieces controlling the center are worth more than expensive ones
/// parked there.
pub fn center_control_factor(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 4,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 2,
        PieceKind::Queen => 1,
        PieceKind::King => 1,
    }
}

#[rustfmt::skip]
static KING_POSITION_POINTS: [[u32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
];

#[rustfmt::skip]
static QUEEN_POSITION_POINTS: [[u32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
static ROOK_POSITION_POINTS: [[u32; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 3, 3, 2, 2, 2],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 2, 3, 3, 2, 0, 0],
];

#[rustfmt::skip]
static BISHOP_POSITION_POINTS: [[u32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [0, 2, 1, 1, 1, 1, 2, 0],
    [2, 1, 2, 1, 1, 2, 1, 2],
    [1, 2, 1, 1, 1, 1, 2, 1],
    [1, 3, 0, 1, 1, 0, 3, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
];

#[rustfmt::skip]
static KNIGHT_POSITION_POINTS: [[u32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 2, 2, 2, 2, 2, 2, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 1, 2, 1, 1, 2, 1, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
static PAWN_POSITION_POINTS: [[u32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 3, 3],
    [2, 2, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 3, 3, 0, 0, 0],
    [0, 1, 0, 1, 1, 0, 1, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Concentric rings around the four center squares. Symmetric under
/// mirroring, so both colors read it directly.
#[rustfmt::skip]
static CENTER_CONTROL_POINTS: [[u32; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Positional value of a piece of the given kind and color standing on
/// `square`.
pub fn position_points(kind: PieceKind, color: Color, square: Square) -> u32 {
    let table = match kind {
        PieceKind::King => &KING_POSITION_POINTS,
        PieceKind::Queen => &QUEEN_POSITION_POINTS,
        PieceKind::Rook => &ROOK_POSITION_POINTS,
        PieceKind::Bishop => &BISHOP_POSITION_POINTS,
        PieceKind::Knight => &KNIGHT_POSITION_POINTS,
        PieceKind::Pawn => &PAWN_POSITION_POINTS,
    };
    let rank = square.rank().as_index();
    let row = match color {
        Color::White => 7 - rank,
        Color::Black => rank,
    };
    table[row][square.file().as_index()]
}

/// Center-control value of covering `square`.
pub fn center_control_points(square: Square) -> u32 {
    CENTER_CONTROL_POINTS[square.rank().as_index()][square.file().as_index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_tables_mirror_between_colors() {
        // A white pawn one step from promotion scores like a black pawn
        // one step from its own promotion.
        assert_eq!(
            position_points(PieceKind::Pawn, Color::White, Square::E7),
            position_points(PieceKind::Pawn, Color::Black, Square::E2)
        );
        assert_eq!(
            3,
            position_points(PieceKind::Pawn, Color::White, Square::E7)
        );

        // Castled king squares score for both colors.
        assert_eq!(
            1,
            position_points(PieceKind::King, Color::White, Square::G1)
        );
        assert_eq!(
            1,
            position_points(PieceKind::King, Color::Black, Square::G8)
        );
    }

    #[test]
    fn center_squares_outweigh_the_rim() {
        assert_eq!(4, center_control_points(Square::E4));
        assert_eq!(4, center_control_points(Square::D5));
        assert_eq!(3, center_control_points(Square::C3));
        assert_eq!(1, center_control_points(Square::A1));
        assert_eq!(1, center_control_points(Square::H8));
    }

    #[test]
    fn material_values() {
        assert_eq!(9, material_points(PieceKind::Queen));
        assert_eq!(0, material_points(PieceKind::King));
        assert_eq!(
            material_points(PieceKind::Bishop),
            material_points(PieceKind::Knight)
        );
    }
}
