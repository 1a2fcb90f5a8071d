/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::adjacency_matrix::AdjacencyMatrix;
use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::observer::{IterationObserver, NoopObserver};
use crate::pagerank::rank_vector::{PageRankSolution, RankVector};
use crate::pagerank::transition_matrix::{DanglingPolicy, TransitionMatrix};
use log::{info, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;
pub const DEFAULT_EPSILON: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Computes PageRank with the default solver settings (uniform dangling-node
/// policy, at most `DEFAULT_MAX_ITERATIONS` iterations).
pub fn solve(matrix: &AdjacencyMatrix, damping_factor: f64, epsilon: f64) -> PRResult<RankVector> {
    PageRankSolver::new(damping_factor, epsilon).solve(matrix)
}

/// Power-iteration PageRank over a dense adjacency matrix.
///
/// Each iteration computes
/// `new_rank[i] = (1 - d) / n + d * sum_j T[j][i] * rank[j]`
/// where `T` is the row-normalized adjacency matrix (see `TransitionMatrix`),
/// and stops once the L1 distance between successive vectors is at most
/// `epsilon`. Hitting `max_iterations` first is an error.
#[derive(Clone, Debug)]
pub struct PageRankSolver {
    damping_factor: f64,
    epsilon: f64,
    max_iterations: usize,
    dangling_policy: DanglingPolicy,
    parallel: bool,
    cancel: Option<Arc<AtomicBool>>,
}
impl PageRankSolver {
    pub fn new(damping_factor: f64, epsilon: f64) -> Self {
        Self {
            damping_factor,
            epsilon,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dangling_policy: DanglingPolicy::default(),
            parallel: false,
            cancel: None,
        }
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    pub fn with_dangling_policy(mut self, dangling_policy: DanglingPolicy) -> Self {
        self.dangling_policy = dangling_policy;
        self
    }
    /// Computes the rows of each new rank vector on the rayon thread pool.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    /// The flag is checked before every iteration; once set, the solve
    /// stops with `PRError::Cancelled`.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn get_damping_factor(&self) -> f64 {
        self.damping_factor
    }
    pub fn get_epsilon(&self) -> f64 {
        self.epsilon
    }
    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }
    pub fn get_dangling_policy(&self) -> DanglingPolicy {
        self.dangling_policy
    }
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn validate(&self) -> PRResult<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(PRError::invalid_parameter("damping_factor", self.damping_factor));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(PRError::invalid_parameter("epsilon", self.epsilon));
        }
        if self.max_iterations == 0 {
            return Err(PRError::invalid_parameter("max_iterations", 0.0));
        }
        Ok(())
    }

    pub fn solve(&self, matrix: &AdjacencyMatrix) -> PRResult<RankVector> {
        Ok(self.run(matrix)?.ranks)
    }

    pub fn run(&self, matrix: &AdjacencyMatrix) -> PRResult<PageRankSolution> {
        self.run_with_observer(matrix, &mut NoopObserver)
    }

    pub fn run_with_observer<O>(
        &self,
        matrix: &AdjacencyMatrix,
        observer: &mut O,
    ) -> PRResult<PageRankSolution>
    where
        O: IterationObserver + ?Sized,
    {
        self.validate()?;
        let transition = TransitionMatrix::from_adjacency_matrix(matrix, self.dangling_policy);
        let n = transition.num_nodes();
        info!(
            "Running page rank on {} nodes ({} dangling, {} policy)...",
            n,
            transition.get_dangling_nodes().len(),
            self.dangling_policy
        );
        let damping_value = (1.0 - self.damping_factor) / n as f64;
        let mut rank: Vec<f64> = vec![1.0 / n as f64; n];
        let mut new_rank: Vec<f64> = vec![0.0; n];
        let mut delta = f64::INFINITY;

        for iteration in 0..self.max_iterations {
            self.check_cancelled(iteration)?;
            self.update(&transition, &rank, &mut new_rank, damping_value);
            delta = rank
                .iter()
                .zip(new_rank.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            observer.on_iteration(iteration, &new_rank, delta);
            if delta <= self.epsilon {
                info!(
                    "Page rank terminated after {} iterations (delta {:e}).",
                    iteration + 1,
                    delta
                );
                return Ok(PageRankSolution {
                    ranks: RankVector::from(new_rank),
                    iterations: iteration + 1,
                    delta,
                });
            }
            std::mem::swap(&mut rank, &mut new_rank);
        }
        warn!(
            "Page rank did not converge after {} iterations (delta {:e} > epsilon {:e}).",
            self.max_iterations, delta, self.epsilon
        );
        Err(PRError::NonConvergence {
            iterations: self.max_iterations,
            delta,
            epsilon: self.epsilon,
        })
    }

    fn update(
        &self,
        transition: &TransitionMatrix,
        rank: &[f64],
        new_rank: &mut [f64],
        damping_value: f64,
    ) {
        let damping_factor = self.damping_factor;
        if self.parallel {
            new_rank.par_iter_mut().enumerate().for_each(|(i, slot)| {
                *slot = damping_value + damping_factor * transition.get_inflow(i, rank);
            });
        } else {
            for (i, slot) in new_rank.iter_mut().enumerate() {
                *slot = damping_value + damping_factor * transition.get_inflow(i, rank);
            }
        }
    }

    fn check_cancelled(&self, iteration: usize) -> PRResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(PRError::Cancelled { iteration }),
            _ => Ok(()),
        }
    }
}
impl Default for PageRankSolver {
    fn default() -> Self {
        PageRankSolver::new(DEFAULT_DAMPING_FACTOR, DEFAULT_EPSILON)
    }
}
