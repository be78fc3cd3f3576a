//! Linearise a file of MRL queries, one per line.

use std::path::PathBuf;

use nlmaps_mrl::Dialect;

use crate::util;

pub struct LineariseArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dialect: Dialect,
}

pub fn run(args: LineariseArgs) {
    let lines = util::read_lines_or_exit(&args.input);
    let output: Vec<String> = lines.iter().map(|line| args.dialect.preprocess(line)).collect();
    tracing::debug!("linearised {} queries from {}", output.len(), args.input.display());
    util::write_lines_or_exit(&args.output, &output);
}
