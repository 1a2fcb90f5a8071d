/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::adjacency_matrix::{get_dangling_nodes, AdjacencyMatrix, GraphMatrix};
use crate::pagerank::error::PRError;
use std::fmt;
use std::str::FromStr;

/// What a node without outbound links does with its rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DanglingPolicy {
    /// The node links to every node (itself included) with weight 1/n, so no
    /// probability mass leaves the walk. This is the default.
    Uniform,
    /// The node contributes nothing beyond the teleport baseline; its mass
    /// leaks out of the walk every iteration and the result sums to less than 1.
    Skip,
}
impl Default for DanglingPolicy {
    fn default() -> Self {
        DanglingPolicy::Uniform
    }
}
impl FromStr for DanglingPolicy {
    type Err = PRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(DanglingPolicy::Uniform),
            "skip" => Ok(DanglingPolicy::Skip),
            _ => Err(format!("Unknown dangling node policy: {} (expected uniform or skip)", s).into()),
        }
    }
}
impl fmt::Display for DanglingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DanglingPolicy::Uniform => write!(f, "uniform"),
            DanglingPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Row-normalized adjacency matrix: entry (j, i) is the probability that the
/// walk moves from j to i when it follows a link.
pub struct TransitionMatrix {
    matrix: GraphMatrix,
    outbound_link_counts: Vec<f64>,
    dangling_nodes: Vec<usize>,
    policy: DanglingPolicy,
}
impl TransitionMatrix {
    pub fn from_adjacency_matrix(adj_mat: &AdjacencyMatrix, policy: DanglingPolicy) -> Self {
        let n = adj_mat.num_nodes();
        let outbound_link_counts = adj_mat.get_outbound_link_counts();
        let dangling_nodes = get_dangling_nodes(&outbound_link_counts);
        let uniform = 1.0 / n as f64;
        let matrix = GraphMatrix::from_fn(n, n, |j, i| {
            let count = outbound_link_counts[j];
            if count > 0.0 {
                adj_mat.get_edge_weight(j, i) / count
            } else {
                match policy {
                    DanglingPolicy::Uniform => uniform,
                    DanglingPolicy::Skip => 0.0,
                }
            }
        });
        Self {
            matrix,
            outbound_link_counts,
            dangling_nodes,
            policy,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn get_matrix(&self) -> &GraphMatrix {
        &self.matrix
    }
    pub fn get_outbound_link_counts(&self) -> &[f64] {
        &self.outbound_link_counts
    }
    pub fn get_dangling_nodes(&self) -> &[usize] {
        &self.dangling_nodes
    }
    pub fn get_policy(&self) -> DanglingPolicy {
        self.policy
    }

    /// Probability mass flowing into node `target` given the current ranks:
    /// the sum over j of T[j][target] * rank[j]. The matrix is stored
    /// column-major, so this walks one contiguous column.
    pub fn get_inflow(&self, target: usize, rank: &[f64]) -> f64 {
        self.matrix
            .column(target)
            .iter()
            .zip(rank.iter())
            .map(|(p, r)| p * r)
            .sum()
    }
}
