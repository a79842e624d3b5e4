// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Reverse;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::eval::Evaluator;
use crate::game::{Game, GameError};
use crate::geometry;
use crate::moves::Move;
use crate::search::SearchObserver;
use crate::types::{Color, PieceKind, TableIndex};

/// The outcome of a root search: the chosen move, its minimax score from
/// White's perspective, and the number of nodes visited below the root.
#[derive(Copy, Clone, Debug)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: f32,
    pub nodes: u64,
}

/// A fixed-depth alpha-beta minimax engine.
///
/// White maximizes and Black minimizes the evaluator's score. Moves are
/// ordered by a cheap tactical heuristic to tighten the pruning window
/// early; ties within a priority class are broken by a shuffle, so the
/// engine doesn't play the same game twice unless seeded.
pub struct Engine {
    depth: u32,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine searching `depth` plies, with randomized
    /// tie-breaking.
    ///
    /// Panics if `depth` is zero; an engine that can't look at a single
    /// move can't choose one.
    pub fn new(depth: u32) -> Engine {
        Engine::from_rng(depth, StdRng::from_entropy())
    }

    /// Creates an engine with deterministic tie-breaking. Two engines
    /// built from the same seed pick identical moves in identical
    /// positions.
    pub fn with_seed(depth: u32, seed: u64) -> Engine {
        Engine::from_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn from_rng(depth: u32, rng: StdRng) -> Engine {
        assert!(depth > 0, "search depth must be at least one ply");
        Engine { depth, rng }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Searches the game tree and returns the best move for the side to
    /// move, or `GameError::Finished` if there is no move to make.
    ///
    /// The root window opens at `(-1.1, 1.1)`, strictly wider than any
    /// score the evaluator can produce, and the comparisons are strict, so
    /// the first candidate always becomes the incumbent and a forced loss
    /// still yields a move. The game is borrowed mutably for apply/unapply
    /// during the search and handed back in its original state.
    pub fn best_move<E, O>(
        &mut self,
        game: &mut Game,
        evaluator: &E,
        observer: &mut O,
    ) -> Result<SearchResult, GameError>
    where
        E: Evaluator,
        O: SearchObserver,
    {
        if game.is_finished() {
            return Err(GameError::Finished);
        }

        let moves = self.order_moves(game);
        let candidates = moves.len();
        let maximizing = game.turn() == Color::White;
        let mut alpha = -1.1f32;
        let mut beta = 1.1f32;
        let mut nodes = 0u64;
        let mut best = None;

        for mov in moves {
            game.apply_move(mov).expect("ordered move is legal");
            let score = self.minimax(game, evaluator, alpha, beta, self.depth - 1, &mut nodes);
            game.unapply_last_move();

            observer.record(candidates, mov, score);
            debug!("candidate {} scored {:.4}", mov, score);

            if maximizing {
                if score > alpha {
                    alpha = score;
                    best = Some((mov, score));
                }
            } else if score < beta {
                beta = score;
                best = Some((mov, score));
            }
        }

        let (best_move, score) = best.expect("root window admits every score");
        info!("chose {} scoring {:.4} over {} nodes", best_move, score, nodes);
        Ok(SearchResult {
            best_move,
            score,
            nodes,
        })
    }

    fn minimax<E>(
        &mut self,
        game: &mut Game,
        evaluator: &E,
        mut alpha: f32,
        mut beta: f32,
        depth: u32,
        nodes: &mut u64,
    ) -> f32
    where
        E: Evaluator,
    {
        *nodes += 1;
        if depth == 0 || game.is_finished() {
            return evaluator.evaluate(game);
        }

        if game.turn() == Color::White {
            for mov in self.order_moves(game) {
                game.apply_move(mov).expect("ordered move is legal");
                let score = self.minimax(game, evaluator, alpha, beta, depth - 1, nodes);
                game.unapply_last_move();
                if score > alpha {
                    alpha = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            alpha
        } else {
            for mov in self.order_moves(game) {
                game.apply_move(mov).expect("ordered move is legal");
                let score = self.minimax(game, evaluator, alpha, beta, depth - 1, nodes);
                game.unapply_last_move();
                if score < beta {
                    beta = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }

    /// The legal moves sorted for pruning: captures, then moves that
    /// threaten an enemy piece, then moves toward the enemy's side, then
    /// the rest. A shuffle before the stable sort randomizes order within
    /// each class.
    fn order_moves(&mut self, game: &Game) -> Vec<Move> {
        let mut moves = game.legal_moves().to_vec();
        moves.shuffle(&mut self.rng);
        moves.sort_by_key(|&mov| Reverse(priority(game, mov)));
        moves
    }
}

fn priority(game: &Game, mov: Move) -> u32 {
    if mov.is_capture() {
        4
    } else if threatens(game, mov) {
        3
    } else if is_forward(game, mov) {
        2
    } else {
        1
    }
}

// Would the moved piece attack an enemy piece from where it lands? For
// castling the rook is the piece that gains scope, so its rays are probed.
// Pawns threaten along their capture diagonals only.
fn threatens(game: &Game, mov: Move) -> bool {
    let (piece, probe_origin) = match mov {
        Move::Castle(side) => {
            let squares = game.castle_squares(side);
            let rook = game
                .board()
                .piece_at(squares.rook_origin)
                .expect("legal castle has a rook on its origin square");
            (rook, squares.rook_origin)
        }
        _ => {
            let origin = mov.origin().expect("non-castle move has an origin");
            let destination = mov.destination().expect("non-castle move has a destination");
            let piece = game
                .board()
                .piece_at(origin)
                .expect("legal move originates at a piece");
            (piece, destination)
        }
    };

    let captures = piece.kind == PieceKind::Pawn;
    for ray in geometry::rays(piece.kind, piece.color, probe_origin, captures) {
        for square in ray {
            if let Some(target) = game.board().piece_at(square) {
                if target.color == game.turn() {
                    break;
                }
                return true;
            }
        }
    }
    false
}

fn is_forward(game: &Game, mov: Move) -> bool {
    let (origin, destination) = match (mov.origin(), mov.destination()) {
        (Some(origin), Some(destination)) => (origin, destination),
        // Castling shuffles pieces sideways.
        _ => return false,
    };
    match game.turn() {
        Color::White => destination.rank().as_index() > origin.rank().as_index(),
        Color::Black => destination.rank().as_index() < origin.rank().as_index(),
    }
}
