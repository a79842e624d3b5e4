// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position evaluation.
//!
//! Evaluators map a game state to a score in `[-1.0, 1.0]` from White's
//! perspective: positive favors White, negative favors Black, zero is
//! balanced. The endpoints are reserved for decided games.

mod blended;
mod tables;

pub use self::blended::BlendedEvaluator;

use crate::game::Game;

/// A static evaluator of game states. Implementations must be pure
/// functions of the position; the search relies on an unapplied move
/// scoring the same way twice.
pub trait Evaluator {
    /// Scores the game from White's perspective, in `[-1.0, 1.0]`.
    fn evaluate(&self, game: &Game) -> f32;
}
