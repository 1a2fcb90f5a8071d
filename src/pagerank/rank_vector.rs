/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::ops::Index;
use std::slice::Iter;

/// Rank of every node, indexed like the rows of the input matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct RankVector {
    scores: Vec<f64>,
}
impl RankVector {
    pub fn len(&self) -> usize {
        self.scores.len()
    }
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
    pub fn get(&self, node: usize) -> Option<f64> {
        self.scores.get(node).copied()
    }
    pub fn sum(&self) -> f64 {
        Iterator::sum::<f64>(self.scores.iter())
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
    pub fn iter(&self) -> Iter<f64> {
        self.scores.iter()
    }
    pub fn into_vec(self) -> Vec<f64> {
        self.scores
    }

    /// The `k` highest-ranked nodes, best first. Equal scores keep index order.
    pub fn top_n(&self, k: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<(usize, f64)> = self.scores.iter().cloned().enumerate().collect();
        indexed.sort_by_key(|(i, score)| (Reverse(OrderedFloat(*score)), *i));
        indexed.truncate(k);
        indexed
    }
}
impl From<Vec<f64>> for RankVector {
    fn from(scores: Vec<f64>) -> Self {
        Self { scores }
    }
}
impl Index<usize> for RankVector {
    type Output = f64;

    fn index(&self, node: usize) -> &f64 {
        &self.scores[node]
    }
}

/// Final rank vector together with how the solver got there.
#[derive(Clone, Debug)]
pub struct PageRankSolution {
    pub ranks: RankVector,
    pub iterations: usize,
    pub delta: f64,
}
