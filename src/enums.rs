use std::fmt;

/// Canonical HTTP verbs. `Other` covers any method string that is not one of
/// the seven standard verbs — the matcher still treats it as a literal,
/// case-insensitive token rather than rejecting the request (spec: "Unknown
/// method strings are accepted and matched literally").
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Other(String),
}

pub(crate) const STANDARD_METHOD_COUNT: usize = 7;

impl HttpMethod {
    /// Index into the fixed-size per-method route tables. Standard verbs get
    /// a stable slot; `Other` always lives in the overflow slot and is
    /// disambiguated by its literal text at lookup time.
    pub(crate) fn table_index(&self) -> usize {
        match self {
            HttpMethod::Get => 0,
            HttpMethod::Post => 1,
            HttpMethod::Put => 2,
            HttpMethod::Patch => 3,
            HttpMethod::Delete => 4,
            HttpMethod::Head => 5,
            HttpMethod::Options => 6,
            HttpMethod::Other(_) => STANDARD_METHOD_COUNT,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(s) => s.as_str(),
        }
    }

    /// Canonicalize: uppercase, match against the standard set, else `Other`.
    /// Input that is not already a string is expected to be converted by the
    /// caller first (spec: "inputs that are not strings are converted to
    /// their textual form first").
    pub fn canonicalize(input: &str) -> HttpMethod {
        let upper = input.to_ascii_uppercase();
        match upper.as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Other(upper),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_when_lowercase_then_uppercases() {
        assert_eq!(HttpMethod::canonicalize("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::canonicalize("PaTcH"), HttpMethod::Patch);
    }

    #[test]
    fn canonicalize_when_unknown_then_other_literal() {
        assert_eq!(
            HttpMethod::canonicalize("purge"),
            HttpMethod::Other("PURGE".to_string())
        );
    }

    #[test]
    fn canonicalize_when_head_then_not_aliased_to_get() {
        // Explicitly pinned per spec: HEAD is never folded into GET.
        assert_ne!(HttpMethod::canonicalize("HEAD"), HttpMethod::Get);
    }
}
