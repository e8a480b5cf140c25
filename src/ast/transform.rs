//! Pure tree rewrites between LIKE wildcard syntax and regex syntax.
//!
//! Only string constants and two-operand `CONCAT` operations (recursively)
//! are rewritten; every other subtree is returned unchanged. Patterns that
//! contain literal regex metacharacters next to wildcards do not survive a
//! round trip: `regex_to_like(like_to_regex("a.%"))` yields `a\_%`.

use crate::ast::builders::concat;
use crate::ast::{Expr, Operator, Value};

/// Convert a LIKE pattern to an anchored regex.
pub fn like_to_regex(expr: &Expr) -> Expr {
    like_to_regex_with(expr, true)
}

/// Convert a LIKE pattern to a regex, anchoring with `^`/`$` when asked and
/// the pattern does not already start/end with `%`.
pub fn like_to_regex_with(expr: &Expr, match_start_and_end: bool) -> Expr {
    match expr {
        Expr::Constant(c) => match c.value() {
            Value::String(like) => Expr::constant(like_pattern_to_regex(like, match_start_and_end)),
            _ => expr.clone(),
        },
        Expr::Operation(o) if o.operator() == Operator::Concat => concat(
            like_to_regex_with(&o.args()[0], false),
            like_to_regex_with(&o.args()[1], false),
        ),
        _ => expr.clone(),
    }
}

/// Convert a regex to a LIKE pattern.
pub fn regex_to_like(expr: &Expr) -> Expr {
    match expr {
        Expr::Constant(c) => match c.value() {
            Value::String(regex) => Expr::constant(regex_pattern_to_like(regex)),
            _ => expr.clone(),
        },
        Expr::Operation(o) if o.operator() == Operator::Concat => {
            concat(regex_to_like(&o.args()[0]), regex_to_like(&o.args()[1]))
        }
        _ => expr.clone(),
    }
}

fn like_pattern_to_regex(like: &str, match_start_and_end: bool) -> String {
    let mut like = like.to_string();
    if match_start_and_end {
        if !like.starts_with('%') {
            like.insert(0, '^');
        }
        if !like.ends_with('%') {
            like.push('$');
        }
    }
    like.replace('.', "\\.")
        .replace('*', "\\*")
        .replace('?', "\\?")
        .replace('%', ".*")
        .replace('_', ".")
}

fn regex_pattern_to_like(regex: &str) -> String {
    // LIKE patterns are implicitly anchored
    let mut body = regex.strip_prefix('^').unwrap_or(regex);
    if body.ends_with('$') && !body.ends_with("\\$") {
        body = &body[..body.len() - 1];
    }
    body.replace(".*", "%").replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{eq, lower};
    use pretty_assertions::assert_eq;

    fn s(e: &Expr) -> String {
        e.as_constant()
            .and_then(|c| c.value().as_str())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_like_to_regex_anchoring() {
        assert_eq!(s(&like_to_regex(&Expr::constant("abc%"))), "^abc.*");
        assert_eq!(s(&like_to_regex(&Expr::constant("%abc"))), ".*abc$");
        assert_eq!(s(&like_to_regex(&Expr::constant("a_c"))), "^a.c$");
        assert_eq!(s(&like_to_regex_with(&Expr::constant("a_c"), false)), "a.c");
    }

    #[test]
    fn test_like_to_regex_escapes_metacharacters() {
        assert_eq!(
            s(&like_to_regex_with(&Expr::constant("a.b*c?%"), false)),
            "a\\.b\\*c\\?.*"
        );
    }

    #[test]
    fn test_regex_matches_like_semantics() {
        let re = regex::Regex::new(&s(&like_to_regex(&Expr::constant("jo_n%")))).unwrap();
        assert!(re.is_match("john smith"));
        assert!(re.is_match("joan"));
        assert!(!re.is_match("xjohn"));
        assert!(!re.is_match("jon"));
    }

    #[test]
    fn test_concat_recursion_without_anchors() {
        let e = concat(Expr::constant("a%"), concat(Expr::path("x"), Expr::constant("_")));
        let r = like_to_regex(&e);
        assert_eq!(
            r,
            concat(Expr::constant("a.*"), concat(Expr::path("x"), Expr::constant(".")))
        );
        assert_eq!(regex_to_like(&r), e);
    }

    #[test]
    fn test_other_shapes_pass_through() {
        let e = lower(Expr::constant("a%"));
        assert_eq!(like_to_regex(&e), e);
        let p = Expr::path("name");
        assert_eq!(regex_to_like(&p), p);
        let n = Expr::constant(5);
        assert_eq!(like_to_regex(&n), n);
        let q = eq(Expr::path("a"), Expr::constant("b%"));
        assert_eq!(like_to_regex(&q), q);
    }

    #[test]
    fn test_round_trip_without_collisions() {
        for pattern in ["abc%", "%abc", "%a_c%", "a_c", "plain", "%"] {
            let back = regex_to_like(&like_to_regex(&Expr::constant(pattern)));
            assert_eq!(s(&back), pattern);
        }
    }

    #[test]
    fn test_round_trip_is_lossy_on_collisions() {
        let back = regex_to_like(&like_to_regex_with(&Expr::constant("a.%"), false));
        assert_eq!(s(&back), "a\\_%");
    }
}
