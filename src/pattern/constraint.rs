use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use super::error::{PatternError, PatternResult};

/// Declarative parameter constraint vocabulary (spec.md §3, §4.5, §9 —
/// "procedural/closure constraints are explicitly deprecated"). Compiled
/// once at [`crate::route::Route`] construction and evaluated
/// allocation-free at request time.
#[derive(Debug, Clone)]
pub enum Constraint {
    Integer,
    Email(Arc<Regex>),
    Slug(Arc<Regex>),
    Regex(Arc<Regex>),
    Membership(Arc<HashSet<String>>),
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constraint::Integer, Constraint::Integer) => true,
            (Constraint::Email(a), Constraint::Email(b)) => a.as_str() == b.as_str(),
            (Constraint::Slug(a), Constraint::Slug(b)) => a.as_str() == b.as_str(),
            (Constraint::Regex(a), Constraint::Regex(b)) => a.as_str() == b.as_str(),
            (Constraint::Membership(a), Constraint::Membership(b)) => a == b,
            _ => false,
        }
    }
}

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

impl Constraint {
    pub fn integer() -> Self {
        Constraint::Integer
    }

    pub fn email() -> Self {
        Constraint::Email(Arc::new(Regex::new(EMAIL_PATTERN).expect("static email regex compiles")))
    }

    pub fn slug() -> Self {
        Constraint::Slug(Arc::new(Regex::new(SLUG_PATTERN).expect("static slug regex compiles")))
    }

    pub fn regex(name: &str, pattern: &str) -> PatternResult<Self> {
        let anchored = format!("^(?:{pattern})$");
        Regex::new(&anchored)
            .map(|re| Constraint::Regex(Arc::new(re)))
            .map_err(|err| PatternError::InvalidConstraintRegex {
                name: name.to_string(),
                error: err.to_string(),
            })
    }

    pub fn membership(values: impl IntoIterator<Item = String>) -> Self {
        Constraint::Membership(Arc::new(values.into_iter().collect()))
    }

    /// Look up a constraint by its declarative kind name, as used by the
    /// DSL's `constraints:` option (e.g. `id: :int`).
    pub fn from_kind(name: &str, kind: &str, arg: Option<&str>) -> PatternResult<Self> {
        match kind {
            "int" | "integer" => Ok(Constraint::integer()),
            "email" => Ok(Constraint::email()),
            "slug" => Ok(Constraint::slug()),
            "regex" => {
                let pattern = arg.ok_or_else(|| PatternError::UnknownConstraintKind {
                    name: name.to_string(),
                    kind: kind.to_string(),
                })?;
                Constraint::regex(name, pattern)
            }
            other => Err(PatternError::UnknownConstraintKind {
                name: name.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Constraint::Integer => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
            Constraint::Email(re) => re.is_match(value),
            Constraint::Slug(re) => re.is_match(value),
            Constraint::Regex(re) => re.is_match(value),
            Constraint::Membership(set) => set.contains(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_when_digits_then_satisfied() {
        assert!(Constraint::integer().is_satisfied_by("42"));
        assert!(!Constraint::integer().is_satisfied_by("4a"));
        assert!(!Constraint::integer().is_satisfied_by(""));
    }

    #[test]
    fn email_when_valid_shape_then_satisfied() {
        assert!(Constraint::email().is_satisfied_by("a@b.com"));
        assert!(!Constraint::email().is_satisfied_by("not-an-email"));
    }

    #[test]
    fn slug_when_valid_shape_then_satisfied() {
        assert!(Constraint::slug().is_satisfied_by("hello-world-1"));
        assert!(!Constraint::slug().is_satisfied_by("Hello World"));
    }

    #[test]
    fn membership_when_value_in_set_then_satisfied() {
        let c = Constraint::membership(["draft".to_string(), "published".to_string()]);
        assert!(c.is_satisfied_by("draft"));
        assert!(!c.is_satisfied_by("archived"));
    }

    #[test]
    fn regex_when_invalid_pattern_then_errors() {
        assert!(Constraint::regex("id", "(").is_err());
    }
}
