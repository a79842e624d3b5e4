// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Occupancy-blind piece movement geometry.
//!
//! Every function in this module maps an origin square to the rays a piece
//! of a given kind could travel along in one move, truncated at the board
//! edge. A ray is an ordered run of squares along one direction, nearest
//! square first; leaping pieces (king, knight) produce singleton rays. The
//! board is never consulted: resolving blockers and captures is the
//! caller's responsibility.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, Rank, Square};

/// One uninterrupted run of squares, nearest to the origin first.
pub type Ray = ArrayVec<[Square; 7]>;

/// All rays available to a piece from a given origin.
pub type Rays = ArrayVec<[Ray; 8]>;

static KING_OFFSETS: [(i32, i32); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

static KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

static ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

static BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Rays for a piece of the given kind and color standing on `origin`.
///
/// `captures` selects the pawn capture geometry (the two forward
/// diagonals) instead of the push geometry; it has no effect for any
/// other kind, and neither does `color`.
pub fn rays(kind: PieceKind, color: Color, origin: Square, captures: bool) -> Rays {
    match kind {
        PieceKind::King => leaping(origin, &KING_OFFSETS),
        PieceKind::Knight => leaping(origin, &KNIGHT_OFFSETS),
        PieceKind::Rook => sliding(origin, &ROOK_DIRECTIONS),
        PieceKind::Bishop => sliding(origin, &BISHOP_DIRECTIONS),
        PieceKind::Queen => {
            let mut rays = sliding(origin, &ROOK_DIRECTIONS);
            for ray in sliding(origin, &BISHOP_DIRECTIONS) {
                rays.push(ray);
            }
            rays
        }
        PieceKind::Pawn => {
            if captures {
                pawn_captures(color, origin)
            } else {
                pawn_pushes(color, origin)
            }
        }
    }
}

fn leaping(origin: Square, offsets: &[(i32, i32)]) -> Rays {
    let mut rays = Rays::new();
    for &(file_delta, rank_delta) in offsets {
        if let Some(sq) = origin.offset(file_delta, rank_delta) {
            let mut ray = Ray::new();
            ray.push(sq);
            rays.push(ray);
        }
    }
    rays
}

fn sliding(origin: Square, directions: &[(i32, i32)]) -> Rays {
    let mut rays = Rays::new();
    for &(file_delta, rank_delta) in directions {
        let mut ray = Ray::new();
        let mut steps = 1;
        while let Some(sq) = origin.offset(file_delta * steps, rank_delta * steps) {
            ray.push(sq);
            steps += 1;
        }
        if !ray.is_empty() {
            rays.push(ray);
        }
    }
    rays
}

fn pawn_pushes(color: Color, origin: Square) -> Rays {
    let mut rays = Rays::new();
    let (advance, home_rank, last_rank) = match color {
        Color::White => (1, Rank::Two, Rank::Eight),
        Color::Black => (-1, Rank::Seven, Rank::One),
    };

    // A pawn stranded on its final rank has nowhere left to go. This can't
    // happen in a real game (the pawn would have promoted) but the geometry
    // layer doesn't get to assume that.
    if origin.rank() == last_rank {
        return rays;
    }

    let mut ray = Ray::new();
    ray.push(origin.offset(0, advance).unwrap());
    if origin.rank() == home_rank {
        ray.push(origin.offset(0, advance * 2).unwrap());
    }
    rays.push(ray);
    rays
}

fn pawn_captures(color: Color, origin: Square) -> Rays {
    let mut rays = Rays::new();
    let (advance, last_rank) = match color {
        Color::White => (1, Rank::Eight),
        Color::Black => (-1, Rank::One),
    };

    if origin.rank() == last_rank {
        return rays;
    }

    for file_delta in &[-1, 1] {
        if let Some(sq) = origin.offset(*file_delta, advance) {
            let mut ray = Ray::new();
            ray.push(sq);
            rays.push(ray);
        }
    }
    rays
}
