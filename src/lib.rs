/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate thiserror;

pub mod pagerank;

pub use pagerank::adjacency_matrix::AdjacencyMatrix;
pub use pagerank::config::PageRankConfig;
pub use pagerank::error::{PRError, PRResult};
pub use pagerank::input::Input;
pub use pagerank::line_processor::{LineProcessor, MatrixRow};
pub use pagerank::observer::{IterationObserver, LoggingObserver, NoopObserver};
pub use pagerank::output::Output;
pub use pagerank::rank_transformer::RankTransformer;
pub use pagerank::rank_vector::{PageRankSolution, RankVector};
pub use pagerank::solver::{solve, PageRankSolver};
pub use pagerank::transition_matrix::{DanglingPolicy, TransitionMatrix};
