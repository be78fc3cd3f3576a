//! Positional arity analysis over the escaped surface form.
//!
//! The linearizer never consults a grammar: the arity of a functor is
//! recovered by scanning the text that immediately follows its occurrence
//! and counting the comma-separated arguments its own parenthesis pair
//! encloses.

use regex::Regex;

/// Counts the arguments of the functor whose occurrence ends right before
/// `tail`.
///
/// Scans left-to-right tracking parenthesis depth: commas at depth 1 separate
/// the functor's own arguments, commas at deeper levels belong to nested
/// functors, and a comma before any `(` means the token is a leaf sibling.
/// The scan stops once the functor's parenthesis pair closes.
///
/// ```
/// use nlmaps_mrl::arity::count_arguments;
///
/// assert_eq!(count_arguments("(area(x,y),nwr(z))"), 2);
/// assert_eq!(count_arguments(",rest)"), 0);
/// assert_eq!(count_arguments(""), 0);
/// ```
pub fn count_arguments(tail: &str) -> usize {
    let mut args_found = false;
    let mut depth = 0i32;
    let mut commas = 0usize;

    let mut chars = tail.chars();
    loop {
        if !((!args_found && depth == 0) || (args_found && depth > 0)) {
            break;
        }
        let Some(c) = chars.next() else { break };
        match c {
            '(' => {
                args_found = true;
                depth += 1;
            }
            ')' => depth -= 1,
            ',' if depth == 1 => commas += 1,
            ',' if depth < 1 => break,
            _ => {}
        }
    }

    if args_found { commas + 1 } else { 0 }
}

/// Returns the text after the `n`-th whole-word occurrence of `token` in
/// `haystack`, or the empty string if there are fewer than `n`.
///
/// This is the moving cursor of the linearizer: the k-th emission of a token
/// body must be analysed in the context of its k-th occurrence, otherwise
/// repeated functor names double-count. Matching is word-bounded so that
/// `count` never matches inside `is_in:country`.
pub fn skip_occurrences<'a>(haystack: &'a str, token: &str, n: usize) -> &'a str {
    let Ok(pattern) = Regex::new(&format!(r"\b{}\b", regex::escape(token))) else {
        return "";
    };
    let mut tail = haystack;
    for _ in 0..n {
        match pattern.find(tail) {
            Some(m) => tail = &tail[m.end()..],
            None => return "",
        }
    }
    tail
}
