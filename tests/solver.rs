/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_pagerank;
use approx::assert_abs_diff_eq;
use lib_pagerank::pagerank::adjacency_matrix::AdjacencyMatrix;
use lib_pagerank::pagerank::error::PRError;
use lib_pagerank::pagerank::solver::{solve, PageRankSolver};
use lib_pagerank::pagerank::transition_matrix::DanglingPolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn get_rows(idx: usize) -> Result<Vec<Vec<f64>>, String> {
    match idx {
        // 0 -> (1, 2), 1 -> (0), 2 -> (0, 3), 3 -> (2)
        0 => Ok(vec![
            vec![0.0, 1.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0, 0.0],
        ]),
        // 0 -> (1), 1 -> (0, 2), 2 -> (0, 1, 3), 3 -> (0)
        1 => Ok(vec![
            vec![0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 1.0, 0.0],
            vec![1.0, 1.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ]),
        // triangle plus node 3 with no outbound and no inbound links
        2 => Ok(vec![
            vec![0.0, 1.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0, 0.0],
            vec![1.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ]),
        // star: every spoke links to the hub, the hub links nowhere
        3 => Ok(vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
        ]),
        _ => Err("Invalid index".to_string()),
    }
}

fn get_matrix(idx: usize) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(&get_rows(idx).unwrap()).unwrap()
}

fn complete_graph(n: usize, self_loops: bool) -> AdjacencyMatrix {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i != j || self_loops { 1.0 } else { 0.0 })
                .collect()
        })
        .collect();
    AdjacencyMatrix::from_rows(&rows).unwrap()
}

// Roughly a third of the entries are edges with random weights; about one
// node in eight is dangling.
fn random_matrix(rng: &mut StdRng, n: usize) -> AdjacencyMatrix {
    let mut data: Vec<f64> = Vec::with_capacity(n * n);
    for _i in 0..n {
        let dangling = rng.gen_bool(0.125);
        for _j in 0..n {
            if !dangling && rng.gen_bool(0.3) {
                data.push(rng.gen_range(0.1, 5.0));
            } else {
                data.push(0.0);
            }
        }
    }
    AdjacencyMatrix::from_row_slice(n, &data).unwrap()
}

#[test]
fn test_reference_fixture() {
    let solution = PageRankSolver::new(0.85, 0.0001)
        .run(&get_matrix(0))
        .unwrap();
    assert_eq!(solution.iterations, 11);
    assert!(solution.delta <= 0.0001);
    let expected = [
        0.324567495963419,
        0.175432504036581,
        0.324567495963419,
        0.175432504036581,
    ];
    for (rank, expected) in solution.ranks.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*rank, *expected, epsilon = 1e-6);
    }
    // no dangling nodes, so both policies agree
    let skip = PageRankSolver::new(0.85, 0.0001)
        .with_dangling_policy(DanglingPolicy::Skip)
        .solve(&get_matrix(0))
        .unwrap();
    assert_eq!(skip, solution.ranks);
}

#[test]
fn test_four_page_web() {
    let solution = PageRankSolver::new(0.85, 0.0001)
        .run(&get_matrix(1))
        .unwrap();
    assert_eq!(solution.iterations, 25);
    let expected = [
        0.33281118072782173,
        0.3763062762124572,
        0.19744577066942925,
        0.09343677239029187,
    ];
    for (rank, expected) in solution.ranks.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*rank, *expected, epsilon = 1e-6);
    }
    assert_eq!(
        solution.ranks.top_n(4).iter().map(|x| x.0).collect::<Vec<usize>>(),
        vec![1, 0, 2, 3]
    );
}

#[test]
fn test_isolated_node_skip_policy() {
    let ranks = PageRankSolver::new(0.85, 1e-6)
        .with_dangling_policy(DanglingPolicy::Skip)
        .solve(&get_matrix(2))
        .unwrap();
    assert_abs_diff_eq!(ranks[3], 0.0375, epsilon = 1e-12);
    for i in 0..3 {
        assert_abs_diff_eq!(ranks[i], 0.25, epsilon = 1e-12);
    }
    // the isolated node's own mass leaks out of the walk
    assert_abs_diff_eq!(ranks.sum(), 0.7875, epsilon = 1e-12);
}

#[test]
fn test_isolated_node_uniform_policy() {
    let ranks = solve(&get_matrix(2), 0.85, 1e-6).unwrap();
    assert_abs_diff_eq!(ranks[3], 1.0 / 21.0, epsilon = 1e-5);
    for i in 0..3 {
        assert_abs_diff_eq!(ranks[i], 20.0 / 63.0, epsilon = 1e-5);
    }
    assert_abs_diff_eq!(ranks.sum(), 1.0, epsilon = 4.0 * 1e-6);
}

#[test]
fn test_star_hub_ranks_highest() {
    let ranks = solve(&get_matrix(3), 0.85, 1e-8).unwrap();
    let top = ranks.top_n(1);
    assert_eq!(top[0].0, 0);
    for i in 1..5 {
        assert!(ranks[0] > ranks[i]);
        assert_abs_diff_eq!(ranks[i], ranks[1], epsilon = 1e-12);
    }
    assert_abs_diff_eq!(ranks.sum(), 1.0, epsilon = 1e-8);
}

#[test]
fn test_uniform_graph_invariance() {
    for n in &[1, 2, 5, 12] {
        for damping_factor in &[0.1, 0.5, 0.85, 0.99] {
            for self_loops in &[false, true] {
                if *n == 1 && !self_loops {
                    continue;
                }
                let ranks = solve(&complete_graph(*n, *self_loops), *damping_factor, 1e-9).unwrap();
                assert_eq!(ranks.len(), *n);
                for rank in ranks.iter() {
                    assert_abs_diff_eq!(*rank, 1.0 / *n as f64, epsilon = 1e-12);
                }
            }
        }
    }
}

#[test]
fn test_single_dangling_node() {
    let matrix = AdjacencyMatrix::from_rows(&[vec![0.0]]).unwrap();
    let ranks = solve(&matrix, 0.85, 1e-6).unwrap();
    assert_abs_diff_eq!(ranks[0], 1.0, epsilon = 1e-12);
}

#[test]
fn test_random_graphs_converge() {
    let mut rng = StdRng::seed_from_u64(1729);
    let epsilon = 1e-6;
    for n in 1..=50 {
        let matrix = random_matrix(&mut rng, n);
        let solution = PageRankSolver::new(0.85, epsilon).run(&matrix).unwrap();
        assert!(solution.delta <= epsilon);
        assert!(solution.iterations <= 10_000);
        assert_eq!(solution.ranks.len(), n);
        assert_abs_diff_eq!(solution.ranks.sum(), 1.0, epsilon = n as f64 * epsilon);
        for rank in solution.ranks.iter() {
            assert!(*rank > 0.0);
        }

        let skip = PageRankSolver::new(0.85, epsilon)
            .with_dangling_policy(DanglingPolicy::Skip)
            .run(&matrix)
            .unwrap();
        assert!(skip.delta <= epsilon);
        assert!(skip.ranks.sum() <= 1.0 + n as f64 * epsilon);
        for rank in skip.ranks.iter() {
            assert!(*rank >= 0.0);
        }
    }
}

#[test]
fn test_deterministic_and_parallel_matches_serial() {
    let mut rng = StdRng::seed_from_u64(7);
    let matrix = random_matrix(&mut rng, 40);
    let solver = PageRankSolver::new(0.85, 1e-10);
    let first = solver.solve(&matrix).unwrap();
    let second = solver.solve(&matrix).unwrap();
    assert_eq!(first, second);
    let parallel = solver.clone().with_parallelism(true).solve(&matrix).unwrap();
    assert_eq!(first.as_slice(), parallel.into_vec().as_slice());
}

#[test]
fn test_observer_sees_every_iteration() {
    let matrix = get_matrix(1);
    let mut seen: Vec<(usize, f64, f64)> = Vec::new();
    let mut observer = |iteration: usize, rank: &[f64], delta: f64| {
        seen.push((iteration, Iterator::sum::<f64>(rank.iter()), delta));
    };
    let solution = PageRankSolver::new(0.85, 0.0001)
        .run_with_observer(&matrix, &mut observer)
        .unwrap();
    assert_eq!(seen.len(), solution.iterations);
    for (i, (iteration, sum, _delta)) in seen.iter().enumerate() {
        assert_eq!(*iteration, i);
        assert_abs_diff_eq!(*sum, 1.0, epsilon = 1e-12);
    }
    assert_eq!(seen.last().unwrap().2, solution.delta);
    assert!(seen[..seen.len() - 1].iter().all(|x| x.2 > 0.0001));
}

#[test]
fn test_non_convergence_is_an_error() {
    let result = PageRankSolver::new(0.85, 1e-12)
        .with_max_iterations(1)
        .run(&get_matrix(0));
    match result {
        Err(PRError::NonConvergence {
            iterations,
            delta,
            epsilon,
        }) => {
            assert_eq!(iterations, 1);
            assert_abs_diff_eq!(delta, 0.425, epsilon = 1e-12);
            assert_eq!(epsilon, 1e-12);
        }
        other => panic!("expected NonConvergence, got {:?}", other),
    }
}

#[test]
fn test_cancellation() {
    let flag = Arc::new(AtomicBool::new(true));
    let solver = PageRankSolver::new(0.85, 0.0001).with_cancellation(flag.clone());
    assert!(matches!(
        solver.run(&get_matrix(0)),
        Err(PRError::Cancelled { iteration: 0 })
    ));

    flag.store(false, Ordering::SeqCst);
    let observer_flag = flag.clone();
    let mut observer = |iteration: usize, _rank: &[f64], _delta: f64| {
        if iteration == 2 {
            observer_flag.store(true, Ordering::SeqCst);
        }
    };
    assert!(matches!(
        solver.run_with_observer(&get_matrix(0), &mut observer),
        Err(PRError::Cancelled { iteration: 3 })
    ));
}

#[test]
fn test_invalid_parameters() {
    let matrix = get_matrix(0);
    let cases: Vec<(f64, f64, &str)> = vec![
        (0.0, 1e-6, "damping_factor"),
        (1.0, 1e-6, "damping_factor"),
        (-0.5, 1e-6, "damping_factor"),
        (f64::NAN, 1e-6, "damping_factor"),
        (0.85, 0.0, "epsilon"),
        (0.85, -1e-6, "epsilon"),
        (0.85, f64::NAN, "epsilon"),
        (0.85, f64::INFINITY, "epsilon"),
    ];
    for (damping_factor, epsilon, expected_name) in cases {
        let mut calls: usize = 0;
        let mut observer = |_iteration: usize, _rank: &[f64], _delta: f64| calls += 1;
        let result = PageRankSolver::new(damping_factor, epsilon)
            .run_with_observer(&matrix, &mut observer);
        match result {
            Err(PRError::InvalidParameter { name, .. }) => assert_eq!(name, expected_name),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        assert_eq!(calls, 0);
    }
    assert!(matches!(
        PageRankSolver::default().with_max_iterations(0).solve(&matrix),
        Err(PRError::InvalidParameter {
            name: "max_iterations",
            ..
        })
    ));
}

#[test]
fn test_input_is_not_mutated() {
    let matrix = get_matrix(2);
    let copy = matrix.clone();
    solve(&matrix, 0.85, 1e-6).unwrap();
    assert_eq!(matrix, copy);
}
