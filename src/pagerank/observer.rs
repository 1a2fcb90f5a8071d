/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use log::debug;

/// Called once per completed iteration with the 0-based iteration index, the
/// freshly computed rank vector and its L1 distance from the previous one.
pub trait IterationObserver {
    fn on_iteration(&mut self, iteration: usize, rank: &[f64], delta: f64);
}

impl<F> IterationObserver for F
where
    F: FnMut(usize, &[f64], f64),
{
    fn on_iteration(&mut self, iteration: usize, rank: &[f64], delta: f64) {
        self(iteration, rank, delta)
    }
}

pub struct NoopObserver;
impl IterationObserver for NoopObserver {
    fn on_iteration(&mut self, _iteration: usize, _rank: &[f64], _delta: f64) {}
}

/// Reports progress through the `log` facade at debug level.
pub struct LoggingObserver {
    // vectors longer than this are summarized rather than printed
    max_printed_nodes: usize,
}
impl LoggingObserver {
    pub fn new(max_printed_nodes: usize) -> Self {
        Self { max_printed_nodes }
    }
}
impl Default for LoggingObserver {
    fn default() -> Self {
        LoggingObserver::new(16)
    }
}
impl IterationObserver for LoggingObserver {
    fn on_iteration(&mut self, iteration: usize, rank: &[f64], delta: f64) {
        if rank.len() <= self.max_printed_nodes {
            debug!("pagerank after iteration {}: delta {:e}, ranks {:?}", iteration, delta, rank);
        } else {
            debug!(
                "pagerank after iteration {}: delta {:e} over {} nodes",
                iteration,
                delta,
                rank.len()
            );
        }
    }
}
