mod constraint;
mod error;
mod parser;
mod segment;

pub use constraint::Constraint;
pub use error::{PatternError, PatternResult};
pub use parser::{parse_segment, parse_template};
pub use segment::SegmentKind;
