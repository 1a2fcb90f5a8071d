/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::pagerank::adjacency_matrix::AdjacencyMatrix;
use crate::pagerank::error::{PRError, PRResult};

/// One input graph: the key it was labelled with and its link matrix.
pub struct MatrixRow {
    pub graph_key: String,
    pub matrix: AdjacencyMatrix,
}

/// Turns `graph_key<TAB>[[...], [...], ...]` lines into rows. The matrix is
/// a JSON array of rows; it is validated on the way in.
pub struct LineProcessor {}
impl LineProcessor {
    pub fn new() -> Self {
        Self {}
    }
    pub fn process_line(&self, line: &str) -> PRResult<MatrixRow> {
        let mut fields = line.splitn(2, '\t');
        let graph_key = fields.next().unwrap_or_default().trim();
        let matrix_json = fields.next().ok_or_else(|| {
            PRError::from(format!(
                "Expected <graph_key><TAB><json matrix>, got: {}",
                line
            ))
        })?;
        if graph_key.is_empty() {
            return Err(PRError::new("Empty graph key"));
        }
        let rows: Vec<Vec<f64>> = serde_json::from_str(matrix_json)?;
        Ok(MatrixRow {
            graph_key: graph_key.to_owned(),
            matrix: AdjacencyMatrix::from_rows(&rows)?,
        })
    }
}
impl Default for LineProcessor {
    fn default() -> Self {
        LineProcessor::new()
    }
}
