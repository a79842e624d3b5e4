// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::eval::tables;
use crate::eval::Evaluator;
use crate::game::Game;
use crate::geometry;
use crate::types::{Color, PieceKind};

const MATERIAL_WEIGHT: f32 = 0.85;
const POSITION_WEIGHT: f32 = 0.10;
const CENTER_CONTROL_WEIGHT: f32 = 0.05;

/// The default evaluator: a weighted blend of material balance, piece
/// placement and center control, each expressed as White's share of the
/// total.
///
/// Finished games short-circuit to the terminal score: `1.0` for a White
/// win, `-1.0` for a Black win, `0.0` for a draw. Because every heuristic
/// component is a share of a shared total, the blended score of an
/// undecided position stays strictly inside `(-1.0, 1.0)` and can never be
/// mistaken for a decided one.
pub struct BlendedEvaluator;

impl Evaluator for BlendedEvaluator {
    fn evaluate(&self, game: &Game) -> f32 {
        if game.is_finished() {
            return match game.winner().expect("game is finished") {
                Some(Color::White) => 1.0,
                Some(Color::Black) => -1.0,
                None => 0.0,
            };
        }

        material_advantage(game) * MATERIAL_WEIGHT
            + position_advantage(game) * POSITION_WEIGHT
            + center_control_advantage(game) * CENTER_CONTROL_WEIGHT
    }
}

/// Normalizes a pair of point totals to White's advantage in `[-1, 1]`:
/// `1` when White holds all the points, `-1` when Black does, `0` when
/// split evenly or when there are no points at all.
fn advantage(white_points: u32, black_points: u32) -> f32 {
    let total = white_points + black_points;
    if total == 0 {
        return 0.0;
    }
    (white_points as f32 / total as f32) * 2.0 - 1.0
}

fn material_advantage(game: &Game) -> f32 {
    let mut white_points = 0;
    let mut black_points = 0;
    for piece in game.board().pieces(None) {
        let points = tables::material_points(piece.kind);
        match piece.color {
            Color::White => white_points += points,
            Color::Black => black_points += points,
        }
    }
    advantage(white_points, black_points)
}

fn position_advantage(game: &Game) -> f32 {
    let mut white_points = 0;
    let mut black_points = 0;
    for piece in game.board().pieces(None) {
        let square = game.board().square_of(piece);
        let points = tables::position_points(piece.kind, piece.color, square);
        match piece.color {
            Color::White => white_points += points,
            Color::Black => black_points += points,
        }
    }
    advantage(white_points, black_points)
}

// Each piece scores the squares it covers, weighted toward the center and
// by how cheaply the piece covers them. A ray is walked until its first
// occupied square, which still counts: covering an occupied square is
// defense or attack.
fn center_control_advantage(game: &Game) -> f32 {
    let mut white_points = 0;
    let mut black_points = 0;
    for piece in game.board().pieces(None) {
        let factor = tables::center_control_factor(piece.kind);
        let origin = game.board().square_of(piece);
        let captures = piece.kind == PieceKind::Pawn;
        for ray in geometry::rays(piece.kind, piece.color, origin, captures) {
            for square in ray {
                let points = tables::center_control_points(square) * factor;
                match piece.color {
                    Color::White => white_points += points,
                    Color::Black => black_points += points,
                }
                if game.board().piece_at(square).is_some() {
                    break;
                }
            }
        }
    }
    advantage(white_points, black_points)
}
