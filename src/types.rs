// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::str::FromStr;

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// Errors that can arise when parsing algebraic square notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoordParseError {
    BadLength,
    BadFile(char),
    BadRank(char),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

/// A square of the board, indexed rank-major so that `A1` is 0 and `H8` is 63.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    pub fn of(file: File, rank: Rank) -> Square {
        let rank = rank.to_u32().unwrap();
        let file = file.to_u32().unwrap();
        FromPrimitive::from_u32(rank * 8 + file).unwrap()
    }

    pub fn rank(self) -> Rank {
        FromPrimitive::from_u32(self.to_u32().unwrap() >> 3).unwrap()
    }

    pub fn file(self) -> File {
        FromPrimitive::from_u32(self.to_u32().unwrap() & 7).unwrap()
    }

    /// Returns the square displaced from this one by the given file and rank
    /// deltas, or `None` if that square lies off the board.
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        let file = self.file().to_i32().unwrap() + file_delta;
        let rank = self.rank().to_i32().unwrap() + rank_delta;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }

        Some(FromPrimitive::from_i32(rank * 8 + file).unwrap())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Square, CoordParseError> {
        let chars: Vec<_> = s.chars().collect();
        if chars.len() != 2 {
            return Err(CoordParseError::BadLength);
        }

        let file = File::try_from(chars[0]).map_err(|_| CoordParseError::BadFile(chars[0]))?;
        let rank = Rank::try_from(chars[1]).map_err(|_| CoordParseError::BadRank(chars[1]))?;
        Ok(Square::of(file, rank))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(chr)
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Stable identifier for a piece, assigned by the board when the piece is
/// created. Two pieces of the same kind and color are distinct identities;
/// the board's reverse index is keyed by this identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub u32);

/// A piece on the board. Pieces carry their identity with them: a piece is
/// created at game setup or at promotion and keeps the same `id` until it is
/// captured or consumed by promotion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// The FEN character for this piece: uppercase for White, lowercase for
    /// Black.
    pub fn fen_char(&self) -> char {
        let chr = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => chr.to_ascii_uppercase(),
            Color::Black => chr,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.fen_char())
    }
}

/// The two castling modes: short (king-side) and long (queen-side).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Short,
    Long,
}

pub static CASTLE_SIDES: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_file_and_rank() {
        assert_eq!(Square::A1, Square::of(File::A, Rank::One));
        assert_eq!(Square::H8, Square::of(File::H, Rank::Eight));
        assert_eq!(Square::E4, Square::of(File::E, Rank::Four));
        assert_eq!(File::E, Square::E4.file());
        assert_eq!(Rank::Four, Square::E4.rank());
    }

    #[test]
    fn square_offset() {
        assert_eq!(Some(Square::F5), Square::E4.offset(1, 1));
        assert_eq!(Some(Square::C3), Square::E4.offset(-2, -1));
        assert_eq!(None, Square::A1.offset(-1, 0));
        assert_eq!(None, Square::H8.offset(0, 1));
    }

    #[test]
    fn square_notation_round_trip() {
        assert_eq!("e4", Square::E4.to_string());
        assert_eq!(Square::E4, "e4".parse().unwrap());
        assert_eq!(Square::A8, "a8".parse().unwrap());
    }

    #[test]
    fn square_notation_rejected() {
        assert_eq!(
            CoordParseError::BadLength,
            "e42".parse::<Square>().unwrap_err()
        );
        assert_eq!(
            CoordParseError::BadFile('i'),
            "i4".parse::<Square>().unwrap_err()
        );
        assert_eq!(
            CoordParseError::BadRank('9'),
            "e9".parse::<Square>().unwrap_err()
        );
    }
}
