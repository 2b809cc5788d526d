use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("path segment '{segment}' is empty")]
    EmptySegment { segment: String },
    #[error("parameter name in segment '{segment}' is empty")]
    ParameterNameEmpty { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore"
    )]
    ParameterInvalidStart { segment: String, name: String },
    #[error("parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'")]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("wildcard segment '*{name}' must be the final path segment")]
    WildcardNotTerminal { name: String },
    #[error("constraint regex for parameter '{name}' is invalid: {error}")]
    InvalidConstraintRegex { name: String, error: String },
    #[error("unknown constraint kind '{kind}' for parameter '{name}'")]
    UnknownConstraintKind { name: String, kind: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
