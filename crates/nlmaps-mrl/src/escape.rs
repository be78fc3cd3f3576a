//! Sentinel codec for punctuation inside quoted MRL values.
//!
//! A whitespace/parenthesis tokenizer cannot tell the comma in
//! `keyval('cuisine','japanese,italian')` from a sibling separator. Before
//! linearisation the codec hides such characters behind textual sentinels;
//! after reconstruction [`decode`] restores them. The sentinel alphabet is
//! disjoint from anything a valid bare functor or identifier can contain.

use std::sync::LazyLock;

use regex::Regex;

/// Comma inside a quoted value.
pub const SAVE_COMMA: &str = "SAVECOMMA";
/// Opening parenthesis inside a quoted value.
pub const BRACKET_OPEN: &str = "BRACKETOPEN";
/// Closing parenthesis inside a quoted value.
pub const BRACKET_CLOSE: &str = "BRACKETCLOSE";
/// Apostrophe strictly inside a value, away from the quote boundaries.
pub const SAVE_APO: &str = "SAVEAPO";
/// Interior space inside a value. Non-ASCII, so space-splitting never sees it.
pub const SPACE_SENTINEL: &str = "\u{20ac}";

// A value never contains an unprotected ( or ), so [^()] confines each
// pattern to a single leaf.
static VALUE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(','[^()]*?),([^()]*?')").unwrap());
static VALUE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",' *([^()]*?)\((.*?) *'\)").unwrap());
static VALUE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",' *([^()]*?)\)([^()]*?) *'\)").unwrap());
static AND_VALUE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"and\(' *([^()]+?) *',' *([^()]+?) *'\)").unwrap());
static CLOSING_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(' *([^()]+?) *'\)").unwrap());
static OR_VALUE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([,)(])or\(([^()]+?)','([^()]+?)@s\)").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Encodes a surface query for linearisation.
///
/// Protects commas, single unbalanced parentheses, interior apostrophes, and
/// spaces occurring inside quoted values, tags string leaves with `@s`, and
/// strips the quotes so the linearizer sees bare leaf text. The rules apply
/// in a fixed order; each later rule relies on the rewrites of the earlier
/// ones (the `or(...)` rule, for instance, matches the `@s` tag attached by
/// the closing-value rule).
///
/// ```
/// use nlmaps_mrl::escape::encode;
///
/// assert_eq!(
///     encode("keyval('cuisine','japanese,italian')"),
///     "keyval(cuisine,japaneseSAVECOMMAitalian@s)"
/// );
/// ```
pub fn encode(mrl: &str) -> String {
    let mut mrl = VALUE_COMMA.replace_all(mrl, "${1}SAVECOMMA${2}").into_owned();
    // At most one unbalanced ( and one unbalanced ) per value.
    mrl = VALUE_OPEN
        .replace_all(&mrl, ",'${1}BRACKETOPEN${2}')")
        .into_owned();
    mrl = VALUE_CLOSE
        .replace_all(&mrl, ",'${1}BRACKETCLOSE${2}')")
        .into_owned();
    mrl = mrl.replace(' ', SPACE_SENTINEL);
    mrl = protect_interior_apostrophes(&mrl);
    // and()/or() around two end values: both sides become string leaves.
    mrl = AND_VALUE_PAIR
        .replace_all(&mrl, "and(${1}@s','${2}@s)")
        .into_owned();
    mrl = CLOSING_VALUE.replace_all(&mrl, "(${1}@s)").into_owned();
    mrl = OR_VALUE_PAIR
        .replace_all(&mrl, "${1}or(${2}@s','${3}@s)")
        .into_owned();
    mrl = WHITESPACE_RUN.replace_all(&mrl, " ").into_owned();
    mrl = mrl.replace('\'', "");
    mrl.trim().to_string()
}

/// Restores the characters hidden by [`encode`].
///
/// The space sentinel is not handled here: the reconstructor decodes it when
/// it re-quotes a string leaf. Total, and the identity on sentinel-free text.
pub fn decode(mrl: &str) -> String {
    mrl.replace(SAVE_APO, "'")
        .replace(BRACKET_OPEN, "(")
        .replace(BRACKET_CLOSE, ")")
        .replace(SAVE_COMMA, ",")
}

// An apostrophe with non-structural neighbours on both sides lies strictly
// inside a value; one at a leaf boundary touches , ( or ).
fn protect_interior_apostrophes(mrl: &str) -> String {
    let chars: Vec<char> = mrl.chars().collect();
    let mut out = String::with_capacity(mrl.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\''
            && i > 0
            && i + 1 < chars.len()
            && !is_structural(chars[i - 1])
            && !is_structural(chars[i + 1])
        {
            out.push_str(SAVE_APO);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_structural(c: char) -> bool {
    matches!(c, ',' | '(' | ')')
}
