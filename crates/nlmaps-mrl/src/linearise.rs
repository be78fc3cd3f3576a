//! Flattening of an escaped surface query into a `token@arity` stream.

use std::collections::HashMap;

use crate::arity::{count_arguments, skip_occurrences};

/// Linearises an escaped surface query into a pre-order `token@arity` stream.
///
/// Structure characters are blanked out to obtain the token sequence; each
/// token then gets annotated with the arity found at its own occurrence in
/// the escaped query. Tokens already tagged `@s` (string leaves) pass through
/// untouched. An atom of arity k is followed by exactly k subtrees, so the
/// output is invertible without a grammar.
///
/// ```
/// use nlmaps_mrl::linearise::linearise;
///
/// assert_eq!(
///     linearise("qtype(least(topx(1)))"),
///     "qtype@1 least@1 topx@1 1@0"
/// );
/// ```
pub fn linearise(mrl: &str) -> String {
    let just_words = mrl.replace(['(', ')', ','], " ");
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut lin: Vec<String> = Vec::new();

    for token in just_words.split_whitespace() {
        let occurrence = seen.entry(token).or_insert(0);
        *occurrence += 1;
        if token.ends_with("@s") {
            lin.push(token.to_string());
            continue;
        }
        let tail = skip_occurrences(mrl, token, *occurrence);
        let args = count_arguments(tail);
        lin.push(format!("{token}@{args}"));
    }

    lin.join(" ")
}
