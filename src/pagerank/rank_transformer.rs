/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::PRResult;
use crate::pagerank::input::Input;
use crate::pagerank::line_processor::{LineProcessor, MatrixRow};
use crate::pagerank::observer::LoggingObserver;
use crate::pagerank::output::Output;
use crate::pagerank::solver::PageRankSolver;
use log::info;
use serde_json::json;

/// Runs the solver over every graph in the input, one graph per line, and
/// prints one `graph_key<TAB>json` line per graph.
pub struct RankTransformer {
    solver: PageRankSolver,
    line_processor: LineProcessor,
    top_n: Option<usize>,
}
impl RankTransformer {
    pub fn new(solver: PageRankSolver, top_n: Option<usize>) -> Self {
        Self {
            solver,
            line_processor: LineProcessor::new(),
            top_n,
        }
    }

    pub fn process_row(&self, row: &MatrixRow) -> PRResult<String> {
        let mut observer = LoggingObserver::default();
        let solution = self.solver.run_with_observer(&row.matrix, &mut observer)?;
        let ranks = match self.top_n {
            Some(k) => json!(solution.ranks.top_n(k)),
            None => json!(solution.ranks.as_slice()),
        };
        let stats = json!({
            "iterations": solution.iterations,
            "delta": solution.delta,
            "ranks": ranks,
        });
        Ok(format!("{}\t{}", row.graph_key, stats))
    }

    // main loop: one solve per non-blank line, in input order.
    pub fn run(&self, input: Input, output: &mut Output) -> PRResult<usize> {
        let mut num_processed: usize = 0;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = self.line_processor.process_line(&line)?;
            output.print(self.process_row(&row)?)?;
            num_processed += 1;
        }
        if num_processed == 0 {
            return Err("No input rows!".into());
        }
        info!("Ranked {} graphs.", num_processed);
        Ok(num_processed)
    }
}
