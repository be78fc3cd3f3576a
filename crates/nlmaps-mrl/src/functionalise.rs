//! Reconstruction of the surface form from a linearised stream.
//!
//! The inverse of [`linearise`](crate::linearise::linearise): arity-driven,
//! stack-based, linear time. Any stream that does not encode a well-formed
//! tree collapses to the empty string; nothing in here panics or returns an
//! error across the module boundary.

use crate::escape::{self, SPACE_SENTINEL};
use crate::passthrough::insert_pass_through;
use crate::validate::{self, ValidatorConfig};

/// Functors whose bare `@0` value slot still needs surface quotes.
const QUOTED_VALUE_FUNCTORS: [&str; 2] = ["keyval", "findkey"];

/// Optional post-processing applied around the tree reconstruction.
#[derive(Debug, Default)]
pub struct FunctionaliseOptions<'a> {
    /// Non-stemmed source tokens, aligned with `stemmed`.
    pub non_stemmed: Option<&'a str>,
    /// Stemmed source tokens, aligned with `non_stemmed`.
    pub stemmed: Option<&'a str>,
    /// Append `@s` to any token missing its `@` annotation.
    pub insert_missing_at: bool,
    /// Validate the reconstructed query against an external CFG.
    pub validator: Option<&'a ValidatorConfig>,
}

/// Rebuilds the surface query encoded by a linearised stream.
///
/// Returns the empty string if the stream does not describe a tree, or if the
/// configured external grammar rejects the reconstruction. On success the
/// sentinels introduced by [`escape::encode`] are decoded away, so the result
/// is a plain surface query.
///
/// ```
/// use nlmaps_mrl::functionalise::{FunctionaliseOptions, functionalise};
///
/// let lin = "query@2 nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0";
/// assert_eq!(
///     functionalise(lin, &FunctionaliseOptions::default()),
///     "query(nwr(keyval('cuisine','japanese')),qtype(count))"
/// );
/// ```
pub fn functionalise(lin: &str, opts: &FunctionaliseOptions) -> String {
    let lin = lin.replace("<topx>", "").replace("</topx>", "@0");
    let mut atoms: Vec<String> = lin.split(' ').map(str::to_string).collect();

    if let (Some(non_stemmed), Some(stemmed)) = (opts.non_stemmed, opts.stemmed) {
        atoms = insert_pass_through(atoms, non_stemmed, stemmed);
    }
    if opts.insert_missing_at {
        add_missing_at(&mut atoms);
    }

    let mrl = transform_if_tree(&atoms);
    if mrl.is_empty() {
        tracing::debug!("stream does not encode a tree: {lin}");
        return String::new();
    }

    if let Some(config) = opts.validator {
        if !validate::check_tree(config, &mrl) {
            return String::new();
        }
    }

    escape::decode(&mrl)
}

/// Rebuilds the bracket structure of a linearised stream, or returns the
/// empty string if the stream does not define a tree.
///
/// Each atom carries its arity after the last `@`; an atom of arity k opens a
/// functor whose next k subtrees follow in pre-order. The stack holds the
/// remaining-child counts of the open ancestors. A string leaf (suffix `s`)
/// is quoted, as is the bare value slot of `keyval`/`findkey` — the one
/// contextual decision, driven by the previously emitted token.
pub fn transform_if_tree(atoms: &[String]) -> String {
    let mut stack: Vec<u32> = Vec::new();
    let mut mrl = String::new();
    let mut prev = String::new();

    for atom in atoms {
        let Some((body, suffix)) = atom.rsplit_once('@') else {
            return String::new();
        };
        let (arity, is_string) = if suffix == "s" {
            (0, true)
        } else {
            match suffix.parse::<u32>() {
                Ok(arity) => (arity, false),
                Err(_) => return String::new(),
            }
        };

        if arity > 0 {
            mrl.push_str(body);
            mrl.push('(');
            stack.push(arity);
            prev = body.to_string();
            continue;
        }

        // A string leaf cannot be the root of the query.
        if is_string && stack.is_empty() {
            return String::new();
        }

        let leaf = if is_string || QUOTED_VALUE_FUNCTORS.contains(&prev.as_str()) {
            format!("'{}'", body.replace(SPACE_SENTINEL, " "))
        } else {
            body.to_string()
        };
        mrl.push_str(&leaf);

        while let Some(remaining) = stack.pop() {
            if remaining > 1 {
                mrl.push(',');
                stack.push(remaining - 1);
                break;
            }
            mrl.push(')');
        }
        prev = leaf;
    }

    if stack.is_empty() { mrl } else { String::new() }
}

/// Appends `@s` to every atom whose second-to-last character is not `@`.
///
/// Recovers streams in which a decoder emitted bare words where string
/// leaves were expected.
pub fn add_missing_at(atoms: &mut [String]) {
    for atom in atoms.iter_mut() {
        if atom.chars().rev().nth(1) != Some('@') {
            atom.push_str("@s");
        }
    }
}
