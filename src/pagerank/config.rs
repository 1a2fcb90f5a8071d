/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;

use crate::pagerank::error::{PRError, PRResult};
use crate::pagerank::solver::PageRankSolver;
use crate::pagerank::transition_matrix::DanglingPolicy;
use clap::{App, Arg, ArgMatches};

pub fn build_app() -> App<'static, 'static> {
    App::new("PageRank")
        .version("0.1.0")
        .about(
            "Computes PageRank for graphs specified from stdin, one per line: \
             graph_key<TAB>JSON adjacency matrix (array of rows).",
        )
        .arg(
            Arg::with_name("damping_factor")
                .short("d")
                .long("damping_factor")
                .takes_value(true)
                .default_value("0.85")
                .help("Probability that the walk follows an outbound link rather than teleporting."),
        )
        .arg(
            Arg::with_name("epsilon")
                .short("e")
                .long("epsilon")
                .takes_value(true)
                .default_value("0.000001")
                .help("Convergence tolerance on the L1 distance between successive rank vectors."),
        )
        .arg(
            Arg::with_name("max_iterations")
                .short("m")
                .long("max_iterations")
                .takes_value(true)
                .default_value("10000")
                .help("Iterations after which a graph that has not converged is reported as an error."),
        )
        .arg(
            Arg::with_name("dangling")
                .short("g")
                .long("dangling")
                .takes_value(true)
                .possible_values(&["uniform", "skip"])
                .default_value("uniform")
                .help(
                    "What nodes without outbound links do with their rank: spread it \
                     uniformly over all nodes (uniform), or drop it (skip).",
                ),
        )
        .arg(
            Arg::with_name("parallel")
                .short("p")
                .long("parallel")
                .help("Compute each iteration's rows in parallel."),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Read graphs from this file instead of stdin."),
        )
        .arg(
            Arg::with_name("top")
                .short("t")
                .long("top")
                .takes_value(true)
                .help("Only print the k highest-ranked nodes, as [index, score] pairs."),
        )
}

#[derive(Clone, Debug)]
pub struct PageRankConfig {
    pub damping_factor: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
    pub dangling_policy: DanglingPolicy,
    pub parallel: bool,
    pub input_path: Option<String>,
    pub top_n: Option<usize>,
}
impl PageRankConfig {
    pub fn from_argmatches(matches: &ArgMatches) -> PRResult<Self> {
        let arg_value = |name: &str| -> PRResult<&str> {
            matches
                .value_of(name)
                .ok_or_else(|| PRError::from(format!("Missing required argument: {}", name)))
        };
        let config = PageRankConfig {
            damping_factor: arg_value("damping_factor")?.parse::<f64>()?,
            epsilon: arg_value("epsilon")?.parse::<f64>()?,
            max_iterations: arg_value("max_iterations")?.parse::<usize>()?,
            dangling_policy: arg_value("dangling")?.parse::<DanglingPolicy>()?,
            parallel: matches.is_present("parallel"),
            input_path: matches.value_of("input").map(|path| path.to_owned()),
            top_n: match matches.value_of("top") {
                Some(k) => Some(k.parse::<usize>()?),
                None => None,
            },
        };
        config.get_solver().validate()?;
        Ok(config)
    }

    pub fn get_solver(&self) -> PageRankSolver {
        PageRankSolver::new(self.damping_factor, self.epsilon)
            .with_max_iterations(self.max_iterations)
            .with_dangling_policy(self.dangling_policy)
            .with_parallelism(self.parallel)
    }
}
