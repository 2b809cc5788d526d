use super::error::{PatternError, PatternResult};
use super::segment::SegmentKind;

fn validate_param_name(segment: &str, name: &str) -> PatternResult<()> {
    if name.is_empty() {
        return Err(PatternError::ParameterNameEmpty {
            segment: segment.to_string(),
        });
    }
    let bytes = name.as_bytes();
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: segment.to_string(),
            name: name.to_string(),
        });
    }
    for &b in &bytes[1..] {
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return Err(PatternError::ParameterInvalidCharacter {
                segment: segment.to_string(),
                name: name.to_string(),
                invalid: b as char,
            });
        }
    }
    Ok(())
}

/// Parse a single raw path segment into its [`SegmentKind`]. A segment is a
/// literal, `:name` (dynamic), `*name` (wildcard), or bare `*` (wildcard
/// named `splat`) — spec.md §6 "Path template grammar".
#[tracing::instrument(level = "trace", fields(segment = %segment))]
pub fn parse_segment(segment: &str) -> PatternResult<SegmentKind> {
    if segment.is_empty() {
        return Err(PatternError::EmptySegment {
            segment: segment.to_string(),
        });
    }

    if let Some(name) = segment.strip_prefix(':') {
        validate_param_name(segment, name)?;
        return Ok(SegmentKind::Dynamic(name.to_string()));
    }

    if let Some(name) = segment.strip_prefix('*') {
        if name.is_empty() {
            return Ok(SegmentKind::Wildcard("splat".to_string()));
        }
        validate_param_name(segment, name)?;
        return Ok(SegmentKind::Wildcard(name.to_string()));
    }

    Ok(SegmentKind::Static(segment.to_string()))
}

/// Parse a whole, already-normalized path template into its ordered
/// [`SegmentKind`] list, enforcing that a wildcard (if present) is the final
/// segment (spec.md §4.4 "wildcard... forces traversal termination").
pub fn parse_template(segments: &[String]) -> PatternResult<Vec<SegmentKind>> {
    let mut parsed = Vec::with_capacity(segments.len());
    for (idx, raw) in segments.iter().enumerate() {
        let kind = parse_segment(raw)?;
        if kind.is_wildcard() && idx != segments.len() - 1 {
            let name = match &kind {
                SegmentKind::Wildcard(name) => name.clone(),
                _ => unreachable!(),
            };
            return Err(PatternError::WildcardNotTerminal { name });
        }
        parsed.push(kind);
    }
    Ok(parsed)
}
