// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::types::{CastleSide, PieceKind, Square};

/// A move, in the closed set of kinds the rules of chess admit. Moves are
/// plain values compared by structural equality; a `Capture` and a `Quiet`
/// move between the same two squares are different moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Quiet {
        origin: Square,
        destination: Square,
    },
    Capture {
        origin: Square,
        destination: Square,
    },
    EnPassant {
        origin: Square,
        destination: Square,
    },
    Promotion {
        origin: Square,
        destination: Square,
        promote_to: PieceKind,
    },
    PromotionCapture {
        origin: Square,
        destination: Square,
        promote_to: PieceKind,
    },
    Castle(CastleSide),
}

/// Error produced when a string is not a valid long-algebraic move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    BadNotation,
}

impl Move {
    /// The square the moving piece starts from. Castling moves two pieces
    /// and is identified by its side alone, so it has no single origin.
    pub fn origin(&self) -> Option<Square> {
        match *self {
            Move::Quiet { origin, .. }
            | Move::Capture { origin, .. }
            | Move::EnPassant { origin, .. }
            | Move::Promotion { origin, .. }
            | Move::PromotionCapture { origin, .. } => Some(origin),
            Move::Castle(_) => None,
        }
    }

    pub fn destination(&self) -> Option<Square> {
        match *self {
            Move::Quiet { destination, .. }
            | Move::Capture { destination, .. }
            | Move::EnPassant { destination, .. }
            | Move::Promotion { destination, .. }
            | Move::PromotionCapture { destination, .. } => Some(destination),
            Move::Castle(_) => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        match self {
            Move::Capture { .. } | Move::EnPassant { .. } | Move::PromotionCapture { .. } => true,
            _ => false,
        }
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match *self {
            Move::Promotion { promote_to, .. } | Move::PromotionCapture { promote_to, .. } => {
                Some(promote_to)
            }
            _ => None,
        }
    }
}

fn promotion_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        // Promotion to pawn or king is unrepresentable in notation and the
        // rule layer never constructs it.
        _ => panic!("no promotion notation for {:?}", kind),
    }
}

fn promotion_kind_of(code: &str) -> PieceKind {
    match code {
        "Q" => PieceKind::Queen,
        "R" => PieceKind::Rook,
        "B" => PieceKind::Bishop,
        "N" => PieceKind::Knight,
        _ => unreachable!("promotion letter constrained by regex"),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Quiet {
                origin,
                destination,
            } => write!(f, "{}-{}", origin, destination),
            Move::Capture {
                origin,
                destination,
            } => write!(f, "{}x{}", origin, destination),
            Move::EnPassant {
                origin,
                destination,
            } => write!(f, "{}x{} e.p.", origin, destination),
            Move::Promotion {
                origin,
                destination,
                promote_to,
            } => write!(
                f,
                "{}-{}={}",
                origin,
                destination,
                promotion_char(promote_to)
            ),
            Move::PromotionCapture {
                origin,
                destination,
                promote_to,
            } => write!(
                f,
                "{}x{}={}",
                origin,
                destination,
                promotion_char(promote_to)
            ),
            Move::Castle(CastleSide::Short) => write!(f, "O-O"),
            Move::Castle(CastleSide::Long) => write!(f, "O-O-O"),
        }
    }
}

lazy_static! {
    static ref QUIET_RE: Regex = Regex::new(r"^([a-h][1-8])-([a-h][1-8])$").unwrap();
    static ref CAPTURE_RE: Regex = Regex::new(r"^([a-h][1-8])x([a-h][1-8])$").unwrap();
    static ref EN_PASSANT_RE: Regex = Regex::new(r"^([a-h][1-8])x([a-h][1-8]) e\.p\.$").unwrap();
    static ref PROMOTION_RE: Regex = Regex::new(r"^([a-h][1-8])-([a-h][1-8])=([QRBN])$").unwrap();
    static ref PROMOTION_CAPTURE_RE: Regex =
        Regex::new(r"^([a-h][1-8])x([a-h][1-8])=([QRBN])$").unwrap();
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses long algebraic notation: `e2-e4`, `e4xd5`, `e5xd6 e.p.`,
    /// `e7-e8=Q`, `e7xd8=Q`, `O-O`, `O-O-O`.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        match s {
            "O-O" => return Ok(Move::Castle(CastleSide::Short)),
            "O-O-O" => return Ok(Move::Castle(CastleSide::Long)),
            _ => {}
        }

        // The regexes only admit well-formed squares, so the inner parses
        // cannot fail.
        let squares = |caps: &regex::Captures| -> (Square, Square) {
            (
                caps[1].parse().unwrap(),
                caps[2].parse().unwrap(),
            )
        };

        if let Some(caps) = EN_PASSANT_RE.captures(s) {
            let (origin, destination) = squares(&caps);
            return Ok(Move::EnPassant {
                origin,
                destination,
            });
        }
        if let Some(caps) = PROMOTION_RE.captures(s) {
            let (origin, destination) = squares(&caps);
            return Ok(Move::Promotion {
                origin,
                destination,
                promote_to: promotion_kind_of(&caps[3]),
            });
        }
        if let Some(caps) = PROMOTION_CAPTURE_RE.captures(s) {
            let (origin, destination) = squares(&caps);
            return Ok(Move::PromotionCapture {
                origin,
                destination,
                promote_to: promotion_kind_of(&caps[3]),
            });
        }
        if let Some(caps) = QUIET_RE.captures(s) {
            let (origin, destination) = squares(&caps);
            return Ok(Move::Quiet {
                origin,
                destination,
            });
        }
        if let Some(caps) = CAPTURE_RE.captures(s) {
            let (origin, destination) = squares(&caps);
            return Ok(Move::Capture {
                origin,
                destination,
            });
        }

        Err(MoveParseError::BadNotation)
    }
}
