//! Reconstruct MRL queries from a file of linearised streams.

use std::path::PathBuf;

use nlmaps_mrl::{Dialect, FunctionaliseOptions, ValidatorConfig};

use crate::util;

pub struct FunctionaliseArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub non_stemmed: Option<PathBuf>,
    pub stemmed: Option<PathBuf>,
    pub missing_at: bool,
    pub cfg: Option<PathBuf>,
    pub decoder: Option<PathBuf>,
    pub dialect: Dialect,
}

pub fn run(args: FunctionaliseArgs) {
    let lines = util::read_lines_or_exit(&args.input);
    let non_stemmed = args.non_stemmed.as_deref().map(util::read_lines_or_exit);
    let stemmed = args.stemmed.as_deref().map(util::read_lines_or_exit);

    let validator = match (args.cfg, args.decoder) {
        (Some(grammar), Some(decoder_root)) => Some(ValidatorConfig {
            decoder_root,
            grammar,
            query_db: None,
            db_dir: None,
        }),
        _ => None,
    };

    let mut rejected = 0usize;
    let output: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let opts = FunctionaliseOptions {
                non_stemmed: sentence_at(&non_stemmed, i),
                stemmed: sentence_at(&stemmed, i),
                insert_missing_at: args.missing_at,
                validator: validator.as_ref(),
            };
            let mrl = args.dialect.functionalise(line, &opts);
            if mrl.is_empty() {
                rejected += 1;
            }
            mrl
        })
        .collect();

    if rejected > 0 {
        tracing::warn!("{} of {} streams did not reconstruct", rejected, lines.len());
    }
    util::write_lines_or_exit(&args.output, &output);
}

fn sentence_at<'a>(sentences: &'a Option<Vec<String>>, index: usize) -> Option<&'a str> {
    sentences.as_ref().and_then(|s| s.get(index)).map(String::as_str)
}
