use crate::arity::{count_arguments, skip_occurrences};

#[test]
fn counts_top_level_arguments() {
    assert_eq!(count_arguments("(count)"), 1);
    assert_eq!(count_arguments("(a,b)"), 2);
    assert_eq!(count_arguments("(area(x,y),nwr(z),qtype(count))"), 3);
}

#[test]
fn nested_commas_do_not_count() {
    assert_eq!(count_arguments("(keyval(name,Paris@s))"), 1);
    assert_eq!(count_arguments("(and(a,b),c)"), 2);
}

#[test]
fn leaf_positions_have_no_arguments() {
    // A comma before any parenthesis means the token was a leaf sibling.
    assert_eq!(count_arguments(",rest)"), 0);
    // A closing parenthesis first means the token was the last leaf.
    assert_eq!(count_arguments("))"), 0);
    assert_eq!(count_arguments(""), 0);
}

#[test]
fn functor_with_empty_argument_region() {
    assert_eq!(count_arguments("()"), 1);
}

#[test]
fn scan_stops_at_own_closing_parenthesis() {
    // Arguments of a later sibling are out of scope.
    assert_eq!(count_arguments("(a),later(x,y,z)"), 1);
}

#[test]
fn skips_whole_word_occurrences() {
    let mrl = "query(area(keyval(name,Paris@s)),qtype(count))";
    assert_eq!(skip_occurrences(mrl, "area", 1), "(keyval(name,Paris@s)),qtype(count))");
    assert_eq!(skip_occurrences(mrl, "count", 1), "))");
}

#[test]
fn repeated_tokens_advance_the_cursor() {
    let mrl = "keyval(name,A@s),keyval(name,B@s)";
    assert_eq!(skip_occurrences(mrl, "keyval", 2), "(name,B@s)");
    assert_eq!(skip_occurrences(mrl, "name", 2), ",B@s)");
}

#[test]
fn word_boundaries_prevent_substring_matches() {
    // `count` must not match inside `is_in:country`.
    let mrl = "query(area(keyval(is_in:country,France@s)),qtype(count))";
    assert_eq!(skip_occurrences(mrl, "count", 1), "))");
}

#[test]
fn missing_occurrence_yields_empty_tail() {
    assert_eq!(skip_occurrences("qtype(count)", "count", 2), "");
    assert_eq!(skip_occurrences("qtype(count)", "absent", 1), "");
}
