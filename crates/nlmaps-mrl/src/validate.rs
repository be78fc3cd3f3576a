//! Validation of reconstructed queries against the NLmaps CFG.
//!
//! Wraps the external `cdec` decoder behind a narrow boolean interface. The
//! adapter owns a per-call scratch directory, runs a single short-lived
//! subprocess, and never lets a failure escape as anything but `false`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use crate::Result;

/// Where to find the external decoder and grammar. Explicit value, no
/// process-global state.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Root of a cdec checkout; the binary is expected at `decoder/cdec`.
    pub decoder_root: PathBuf,
    /// The NLmaps context-free grammar.
    pub grammar: PathBuf,
    /// Database of gold query results, if any.
    pub query_db: Option<PathBuf>,
    /// Working directory of the database.
    pub db_dir: Option<PathBuf>,
}

static NAME_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"name:.*? \)").unwrap());
static KEYVAL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"keyval\( '([^()]+?)' , '[^()]+?' ").unwrap());
static KEYVAL_OR_VALUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"keyval\( '([^()]+?)' , or\( '[^()]+?' , '[^()]+?' ").unwrap()
});
static KEYVAL_AND_VALUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"keyval\( '([^()]+?)' , and\( '[^()]+?' , '[^()]+?' ").unwrap()
});
static QUOTED_LEAF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" '(.*?)' ").unwrap());
static TOPX_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"topx\( (.*?) \)").unwrap());
static MAXDIST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"maxdist\( (.*?) \)").unwrap());

/// Checks a reconstructed query against the CFG.
///
/// Returns `false` when the decoder reports `NO PARSE`, and on any failure
/// to invoke it. The scratch directory is removed on every exit path.
pub fn check_tree(config: &ValidatorConfig, mrl: &str) -> bool {
    let query = prepare_query(mrl);
    match run_decoder(config, &query) {
        Ok(stderr) => !stderr.contains("NO PARSE"),
        Err(err) => {
            tracing::debug!("cfg decoder invocation failed: {err}");
            false
        }
    }
}

/// Rewrites a query into the tokenisation the decoder's grammar expects.
///
/// Parentheses and commas are space-padded, quoted leaves spaced as
/// `' content '`, `name:*` values collapsed to the `name:lg` placeholder,
/// `keyval` values (direct or under `or`/`and`) replaced by `valvariable`,
/// and the numbers inside `topx(...)` and `maxdist(...)` separated per digit.
pub fn prepare_query(mrl: &str) -> String {
    let mut mrl = mrl.replace('(', "( ").replace(',', " , ").replace(')', " )");
    mrl = NAME_VALUE.replace_all(&mrl, "name:lg )").into_owned();
    mrl = KEYVAL_VALUE
        .replace_all(&mrl, "keyval( '${1}' , 'valvariable' ")
        .into_owned();
    mrl = KEYVAL_OR_VALUES
        .replace_all(&mrl, "keyval( '${1}' , or( 'valvariable' , 'valvariable' ")
        .into_owned();
    mrl = KEYVAL_AND_VALUES
        .replace_all(&mrl, "keyval( '${1}' , and( 'valvariable' , 'valvariable' ")
        .into_owned();
    mrl = QUOTED_LEAF.replace_all(&mrl, " ' ${1} ' ").into_owned();
    mrl = space_digits(mrl, &TOPX_NUMBER, "topx");
    mrl = space_digits(mrl, &MAXDIST_NUMBER, "maxdist");
    mrl
}

// The grammar reads numbers one digit at a time.
fn space_digits(mrl: String, pattern: &Regex, functor: &str) -> String {
    let Some(caps) = pattern.captures(&mrl) else {
        return mrl;
    };
    let spaced: String = caps[1].chars().map(|d| format!("{d} ")).collect();
    pattern
        .replace(&mrl, format!("{functor}( {spaced})"))
        .into_owned()
}

fn run_decoder(config: &ValidatorConfig, query: &str) -> Result<String> {
    let scratch = tempfile::Builder::new().prefix("nlmaps_validate").tempdir()?;

    let ini_path = scratch.path().join("cdec_validate.ini");
    fs::write(
        &ini_path,
        format!(
            "formalism=scfg\n\
             intersection_strategy=cube_pruning\n\
             cubepruning_pop_limit=1000\n\
             grammar={}\n\
             scfg_max_span_limit=1000\n",
            config.grammar.display()
        ),
    )?;

    let query_path = scratch.path().join("sent.tmp");
    fs::write(&query_path, format!("{query}\n"))?;

    let output = Command::new(config.decoder_root.join("decoder").join("cdec"))
        .arg("-c")
        .arg(&ini_path)
        .stdin(Stdio::from(File::open(&query_path)?))
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()?;

    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}
