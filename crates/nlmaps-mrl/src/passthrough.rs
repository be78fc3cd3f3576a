//! Pass-through substitution of stemmed source words.
//!
//! A decoder that copies words from a stemmed input sentence leaves bare,
//! un-annotated tokens in the linearised stream. Given the aligned
//! non-stemmed sentence, those tokens are replaced by their original surface
//! form and tagged as string leaves.

/// Replaces un-annotated atoms that match a stemmed source token with the
/// aligned non-stemmed token, tagged `@s`.
///
/// The streams are split on single spaces and aligned positionally; if their
/// lengths differ the input is returned unchanged. When an atom matches
/// several stemmed tokens, the last match wins.
pub fn insert_pass_through(
    mut atoms: Vec<String>,
    non_stemmed: &str,
    stemmed: &str,
) -> Vec<String> {
    let non_stemmed: Vec<&str> = non_stemmed.split(' ').collect();
    let stemmed: Vec<&str> = stemmed.split(' ').collect();
    if non_stemmed.len() != stemmed.len() {
        return atoms;
    }

    for atom in &mut atoms {
        if atom.contains('@') {
            continue;
        }
        if let Some(pos) = stemmed.iter().rposition(|s| *s == atom.as_str()) {
            *atom = format!("{}@s", non_stemmed[pos]);
        }
    }
    atoms
}
