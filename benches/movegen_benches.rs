// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use gambit::geometry;
use gambit::types::Square;
use gambit::{BlendedEvaluator, Color, Engine, Evaluator, Game, NullObserver, PieceKind};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("queen rays from d4", |b| {
        b.iter(|| geometry::rays(PieceKind::Queen, Color::White, black_box(Square::D4), false))
    });

    c.bench_function("legal moves start position", |b| {
        b.iter(|| Game::new().legal_moves().len())
    });

    c.bench_function("apply and unapply e2-e4", |b| {
        let mut game = Game::new();
        let mov = "e2-e4".parse().unwrap();
        b.iter(|| {
            game.apply_move(black_box(mov)).unwrap();
            game.unapply_last_move()
        });
    });

    c.bench_function("evaluate start position", |b| {
        let game = Game::new();
        b.iter(|| BlendedEvaluator.evaluate(black_box(&game)))
    });

    c.bench_function("depth 2 search start position", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let mut engine = Engine::with_seed(2, 0);
            engine
                .best_move(&mut game, &BlendedEvaluator, &mut NullObserver)
                .unwrap()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
