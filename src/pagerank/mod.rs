/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod adjacency_matrix;
pub mod config;
pub mod error;
pub mod input;
pub mod line_processor;
pub mod observer;
pub mod output;
pub mod rank_transformer;
pub mod rank_vector;
pub mod solver;
pub mod transition_matrix;
