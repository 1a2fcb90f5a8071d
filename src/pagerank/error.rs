/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type PRResult<T> = std::result::Result<T, PRError>;

#[derive(Debug, Error)]
pub enum PRError {
    #[error("Invalid matrix shape: {rows} rows x {cols} columns (expected a non-empty square matrix)")]
    InvalidShape { rows: usize, cols: usize },

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid matrix entry at ({row}, {col}): {value} (entries must be finite and non-negative)")]
    NonFiniteInput { row: usize, col: usize, value: f64 },

    #[error("Outbound weight of row {row} overflows (row sum is not finite)")]
    OutboundWeightOverflow { row: usize },

    #[error("No convergence after {iterations} iterations: delta {delta} > epsilon {epsilon}")]
    NonConvergence {
        iterations: usize,
        delta: f64,
        epsilon: f64,
    },

    #[error("Cancelled before iteration {iteration}")]
    Cancelled { iteration: usize },

    #[error("{0}")]
    Generic(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl PRError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

impl From<String> for PRError {
    fn from(str: String) -> Self {
        PRError::Generic(str)
    }
}

impl From<&str> for PRError {
    fn from(str: &str) -> Self {
        PRError::Generic(str.to_owned())
    }
}
