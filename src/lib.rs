// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! gambit, a chess rule engine and alpha-beta game tree searcher.
//!
//! The crate is built in layers. `types` and `geometry` are pure data:
//! squares, pieces, and the occupancy-blind rays a piece can travel.
//! `board` places pieces on squares and tracks them by identity. `game`
//! layers the rules of chess on top of a board: legal move generation,
//! reversible move application, and game termination. `eval` scores
//! positions and `search` picks moves by fixed-depth minimax with
//! alpha-beta pruning.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate serde_derive;

pub mod board;
pub mod eval;
pub mod game;
pub mod geometry;
pub mod moves;
pub mod search;
pub mod types;

pub use crate::board::Board;
pub use crate::eval::{BlendedEvaluator, Evaluator};
pub use crate::game::{CastleSquares, Game, GameError};
pub use crate::moves::{Move, MoveParseError};
pub use crate::search::{CsvObserver, Engine, NullObserver, SearchObserver, SearchResult};
pub use crate::types::{CastleSide, Color, Piece, PieceId, PieceKind};
