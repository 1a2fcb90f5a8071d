/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::error::{PRError, PRResult};
use nalgebra::DMatrix;

pub type GraphMatrix = DMatrix<f64>;

/// Dense n x n link matrix. A non-zero entry at (i, j) is an edge from node i
/// to node j, weighted by the entry. Values of this type are always square,
/// non-empty, finite and non-negative, and every row sum is finite: every
/// constructor validates.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    matrix: GraphMatrix,
}
impl AdjacencyMatrix {
    /// Builds a matrix from a vector of rows, as produced by a JSON array of arrays.
    pub fn from_rows(rows: &[Vec<f64>]) -> PRResult<Self> {
        let num_nodes = rows.len();
        for row in rows {
            if row.len() != num_nodes {
                return Err(PRError::InvalidShape {
                    rows: num_nodes,
                    cols: row.len(),
                });
            }
        }
        let data: Vec<f64> = rows.iter().flat_map(|row| row.iter().cloned()).collect();
        Self::from_row_slice(num_nodes, &data)
    }

    /// Builds a matrix from a row-major buffer of `num_nodes * num_nodes` entries.
    pub fn from_row_slice(num_nodes: usize, data: &[f64]) -> PRResult<Self> {
        let num_entries = num_nodes.checked_mul(num_nodes);
        if num_nodes == 0 || num_entries != Some(data.len()) {
            return Err(PRError::InvalidShape {
                rows: num_nodes,
                cols: if num_nodes == 0 { 0 } else { data.len() / num_nodes },
            });
        }
        Self::from_dmatrix(GraphMatrix::from_row_slice(num_nodes, num_nodes, data))
    }

    pub fn from_dmatrix(matrix: GraphMatrix) -> PRResult<Self> {
        if matrix.nrows() == 0 || !matrix.is_square() {
            return Err(PRError::InvalidShape {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        for i in 0..matrix.nrows() {
            for j in 0..matrix.ncols() {
                let value = matrix[(i, j)];
                if !value.is_finite() || value < 0.0 {
                    return Err(PRError::NonFiniteInput {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
            let outbound_weight = matrix.row(i).sum();
            if !outbound_weight.is_finite() {
                return Err(PRError::OutboundWeightOverflow { row: i });
            }
        }
        Ok(Self { matrix })
    }

    pub fn num_nodes(&self) -> usize {
        self.matrix.nrows()
    }
    pub fn get_matrix(&self) -> &GraphMatrix {
        &self.matrix
    }
    pub fn get_edge_weight(&self, source: usize, target: usize) -> f64 {
        self.matrix[(source, target)]
    }

    /// Sum of each row of the raw matrix: the total outbound weight of every node.
    pub fn get_outbound_link_counts(&self) -> Vec<f64> {
        (0..self.num_nodes())
            .map(|i| self.matrix.row(i).sum())
            .collect()
    }

    /// Nodes without outbound links.
    pub fn get_dangling_nodes(&self) -> Vec<usize> {
        get_dangling_nodes(&self.get_outbound_link_counts())
    }
}

/// Indices whose outbound link count is zero.
pub fn get_dangling_nodes(outbound_link_counts: &[f64]) -> Vec<usize> {
    outbound_link_counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0.0)
        .map(|(i, _)| i)
        .collect()
}
