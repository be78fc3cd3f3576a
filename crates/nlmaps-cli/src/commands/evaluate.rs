//! Score a hypothesis file against a gold file.

use std::path::{Path, PathBuf};

use nlmaps_mrl::evaluate;

use crate::util;

pub struct EvaluateArgs {
    pub input: PathBuf,
    pub gold: PathBuf,
}

pub fn run(args: EvaluateArgs) {
    let hypos = util::read_lines_or_exit(&args.input);
    let golds = util::read_lines_or_exit(&args.gold);

    let evaluation = evaluate(&hypos, &golds);
    println!("{:.8}", evaluation.f1() * 100.0);

    util::write_lines_or_exit(&path_with_suffix(&args.input, ".eval"), &[evaluation.summary()]);
    util::write_lines_or_exit(&path_with_suffix(&args.input, ".sigf"), &evaluation.significance);
}

// "decoded.mrl" -> "decoded.mrl.eval", keeping the original extension.
fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
