//! Constraint expression parser
//!
//! Handles constraint formats:
//! - Exact: `==1.5.6` or `== 1.5.6`
//! - Compatible release: `~= 1.1.1` (PEP 440)
//! - Comparison: `>= 2.0`, `> 2.0`, `<= 3.0`, `< 3.0`, `!= 2.1`

use crate::domain::{Constraint, Operator};
use regex::Regex;
use std::sync::LazyLock;

// Two-character symbols are listed first so `>=` is never read as `>`.
static CONSTRAINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(==|~=|>=|<=|!=|<|>)\s*(\S+)$").unwrap());

/// Parses a constraint expression such as `== 1.5.6`
///
/// Returns `None` unless the expression is a recognized operator
/// followed by a single version token.
pub fn parse_constraint(expr: &str) -> Option<Constraint> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return None;
    }

    let caps = CONSTRAINT_RE.captures(trimmed)?;
    let op = Operator::from_symbol(caps.get(1)?.as_str())?;
    let version = caps.get(2)?.as_str();
    Some(Constraint::new(op, version))
}

/// Splits a requirement spec into its name and optional constraint expression
///
/// The split point is the first occurrence of an operator character, so
/// `Sphinx==1.5.6` and `Sphinx == 1.5.6` yield the same name. Whether the
/// expression actually parses is left to [`parse_constraint`].
pub fn split_spec(spec: &str) -> (&str, Option<&str>) {
    match spec.find(|c| matches!(c, '<' | '>' | '=' | '!' | '~')) {
        Some(idx) => {
            let (name, expr) = spec.split_at(idx);
            (name.trim(), Some(expr.trim()))
        }
        None => (spec.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        let constraint = parse_constraint("== 1.5.6").unwrap();
        assert_eq!(constraint.op, Operator::Exact);
        assert_eq!(constraint.version, "1.5.6");
        assert!(constraint.is_pinned());
    }

    #[test]
    fn test_parse_exact_attached() {
        let constraint = parse_constraint("==1.5.6").unwrap();
        assert_eq!(constraint.op, Operator::Exact);
        assert_eq!(constraint.version, "1.5.6");
    }

    #[test]
    fn test_parse_compatible_release() {
        let constraint = parse_constraint("~= 1.1.1").unwrap();
        assert_eq!(constraint.op, Operator::Compatible);
        assert_eq!(constraint.version, "1.1.1");
        assert!(!constraint.is_pinned());
    }

    #[test]
    fn test_parse_greater_or_equal() {
        let constraint = parse_constraint(">= 2.28.0").unwrap();
        assert_eq!(constraint.op, Operator::GreaterOrEqual);
        assert_eq!(constraint.version, "2.28.0");
    }

    #[test]
    fn test_parse_greater() {
        let constraint = parse_constraint("> 2.0").unwrap();
        assert_eq!(constraint.op, Operator::Greater);
        assert_eq!(constraint.version, "2.0");
    }

    #[test]
    fn test_parse_less_or_equal() {
        let constraint = parse_constraint("<= 3.0").unwrap();
        assert_eq!(constraint.op, Operator::LessOrEqual);
        assert_eq!(constraint.version, "3.0");
    }

    #[test]
    fn test_parse_less() {
        let constraint = parse_constraint("< 3.0").unwrap();
        assert_eq!(constraint.op, Operator::Less);
        assert_eq!(constraint.version, "3.0");
    }

    #[test]
    fn test_parse_not_equal() {
        let constraint = parse_constraint("!= 2.1").unwrap();
        assert_eq!(constraint.op, Operator::NotEqual);
        assert_eq!(constraint.version, "2.1");
    }

    #[test]
    fn test_parse_prerelease_version() {
        let constraint = parse_constraint("== 1.1.0b1.dev1").unwrap();
        assert_eq!(constraint.version, "1.1.0b1.dev1");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_constraint("").is_none());
        assert!(parse_constraint("   ").is_none());
    }

    #[test]
    fn test_parse_bare_operator() {
        assert!(parse_constraint("==").is_none());
        assert!(parse_constraint(">= ").is_none());
    }

    #[test]
    fn test_parse_single_equals_rejected() {
        assert!(parse_constraint("= 1.0").is_none());
    }

    #[test]
    fn test_parse_version_with_trailing_garbage() {
        assert!(parse_constraint("== 1.0 extra").is_none());
    }

    #[test]
    fn test_parse_missing_operator() {
        assert!(parse_constraint("1.5.6").is_none());
    }

    #[test]
    fn test_split_spec_spaced() {
        let (name, expr) = split_spec("Sphinx == 1.5.6");
        assert_eq!(name, "Sphinx");
        assert_eq!(expr, Some("== 1.5.6"));
    }

    #[test]
    fn test_split_spec_attached() {
        let (name, expr) = split_spec("Sphinx==1.5.6");
        assert_eq!(name, "Sphinx");
        assert_eq!(expr, Some("==1.5.6"));
    }

    #[test]
    fn test_split_spec_no_constraint() {
        let (name, expr) = split_spec("libsass");
        assert_eq!(name, "libsass");
        assert_eq!(expr, None);
    }

    #[test]
    fn test_split_spec_leading_operator() {
        let (name, expr) = split_spec("== 1.0");
        assert_eq!(name, "");
        assert_eq!(expr, Some("== 1.0"));
    }

    #[test]
    fn test_split_then_parse() {
        let (name, expr) = split_spec("pydocstyle ~= 1.1.1");
        let constraint = parse_constraint(expr.unwrap()).unwrap();
        assert_eq!(name, "pydocstyle");
        assert_eq!(constraint.op, Operator::Compatible);
        assert_eq!(constraint.version, "1.1.1");
    }
}
