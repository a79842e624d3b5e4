// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;

use crate::moves::Move;

/// Receives one callback per root candidate considered by the engine,
/// after the candidate's subtree has been scored. `candidates` is the
/// total number of legal moves at the root.
pub trait SearchObserver {
    fn record(&mut self, candidates: usize, mov: Move, score: f32);
}

/// An observer that discards everything.
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn record(&mut self, _candidates: usize, _mov: Move, _score: f32) {}
}

#[derive(Serialize)]
struct CandidateRecord {
    candidates: usize,
    #[serde(rename = "move")]
    mov: String,
    score: f32,
}

/// An observer that streams one CSV row per scored root candidate to the
/// given sink, with a `candidates,move,score` header. Useful for
/// inspecting what the engine thought of each option after the fact.
pub struct CsvObserver<W: io::Write> {
    writer: csv::Writer<W>,
}

impl<W: io::Write> CsvObserver<W> {
    pub fn new(sink: W) -> CsvObserver<W> {
        CsvObserver {
            writer: csv::Writer::from_writer(sink),
        }
    }
}

impl<W: io::Write> SearchObserver for CsvObserver<W> {
    fn record(&mut self, candidates: usize, mov: Move, score: f32) {
        let record = CandidateRecord {
            candidates,
            mov: mov.to_string(),
            score,
        };
        // A full disk shouldn't abort a search in progress.
        if let Err(err) = self.writer.serialize(record) {
            warn!("failed to record search candidate: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn csv_observer_writes_header_and_rows() {
        let mut buffer = Vec::new();
        {
            let mut observer = CsvObserver::new(&mut buffer);
            observer.record(
                20,
                Move::Quiet {
                    origin: Square::E2,
                    destination: Square::E4,
                },
                0.25,
            );
            observer.record(
                20,
                Move::Capture {
                    origin: Square::E4,
                    destination: Square::D5,
                },
                -0.5,
            );
        }

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(Some("candidates,move,score"), lines.next());
        assert_eq!(Some("20,e2-e4,0.25"), lines.next());
        assert_eq!(Some("20,e4xd5,-0.5"), lines.next());
        assert_eq!(None, lines.next());
    }
}
