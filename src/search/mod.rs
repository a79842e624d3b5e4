// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Game tree search: fixed-depth minimax with alpha-beta pruning over the
//! rule engine's reversible apply/unapply machinery, plus an observer hook
//! for recording how root candidates were scored.

mod engine;
mod observer;

pub use self::engine::{Engine, SearchResult};
pub use self::observer::{CsvObserver, NullObserver, SearchObserver};
