use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::HttpMethod;

/// Stable, machine-checkable identifier for a [`RouterError`], independent of
/// the human-readable message. Mirrors the teacher's `RouterErrorCode` shape:
/// callers can match on the code without parsing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouterErrorCode {
    InvalidRoute,
    InvalidPattern,
    InvalidParamName,
    RouteNotFound,
    ConstraintViolation,
    RouterFinalized,
    DuplicateRouteName,
    MissingGenerationParam,
    MaxRoutesExceeded,
    UnknownDslMethod,
}

impl RouterErrorCode {
    pub fn name(&self) -> &'static str {
        match self {
            RouterErrorCode::InvalidRoute => "invalid_route",
            RouterErrorCode::InvalidPattern => "invalid_pattern",
            RouterErrorCode::InvalidParamName => "invalid_param_name",
            RouterErrorCode::RouteNotFound => "route_not_found",
            RouterErrorCode::ConstraintViolation => "constraint_violation",
            RouterErrorCode::RouterFinalized => "router_finalized",
            RouterErrorCode::DuplicateRouteName => "duplicate_route_name",
            RouterErrorCode::MissingGenerationParam => "missing_generation_param",
            RouterErrorCode::MaxRoutesExceeded => "max_routes_exceeded",
            RouterErrorCode::UnknownDslMethod => "unknown_dsl_method",
        }
    }
}

/// A structured router error, carrying enough context (subsystem, stage,
/// cause) to be logged or serialized without re-deriving it from the message
/// string. Built with [`RouterError::new`]; `Display` renders `description`.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("{description}")]
pub struct RouterError {
    pub code: RouterErrorCode,
    pub subsystem: &'static str,
    pub stage: &'static str,
    pub description: String,
    pub detail: Option<serde_json::Value>,
}

impl RouterError {
    pub fn new(
        code: RouterErrorCode,
        subsystem: &'static str,
        stage: &'static str,
        description: impl Into<String>,
        detail: Option<serde_json::Value>,
    ) -> Self {
        Self {
            code,
            subsystem,
            stage,
            description: description.into(),
            detail,
        }
    }

    pub fn route_not_found(method: &HttpMethod, name: &str) -> Self {
        Self::new(
            RouterErrorCode::RouteNotFound,
            "route_set",
            "generate_path",
            format!("no named route '{name}' for generation (looked up via {method})"),
            Some(serde_json::json!({ "name": name })),
        )
    }

    pub fn finalized(operation: &'static str) -> Self {
        Self::new(
            RouterErrorCode::RouterFinalized,
            "router",
            operation,
            "router is finalized; no further DSL mutation is permitted",
            None,
        )
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
