/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_pagerank;

use std::io;

use clap::ArgMatches;
use log::LevelFilter;

use lib_pagerank::pagerank::config::{build_app, PageRankConfig};
use lib_pagerank::pagerank::error::PRResult;
use lib_pagerank::pagerank::input::Input;
use lib_pagerank::pagerank::output::Output;
use lib_pagerank::pagerank::rank_transformer::RankTransformer;

fn main() -> PRResult<()> {
    env_logger::Builder::new()
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Micros))
        .filter_level(LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();
    let matches: ArgMatches = build_app().get_matches();
    let config = PageRankConfig::from_argmatches(&matches)?;
    let transformer = RankTransformer::new(config.get_solver(), config.top_n);
    let stdio: io::Stdin = io::stdin();
    let input: Input = match &config.input_path {
        Some(path) => Input::file(path)?,
        None => Input::console(&stdio),
    };
    let mut output: Output = Output::console();
    transformer.run(input, &mut output)?;
    Ok(())
}
