//! Error types
//!
//! Single-entity creators fail hard on unknown ids. Composite and bulk
//! operations never surface these as errors; they log and skip, or collect
//! formatted strings into the batch result.

use thiserror::Error;

/// Errors from the single-entity generation functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("unknown material tier '{0}'")]
    UnknownMaterial(String),
    #[error("unknown mob tier '{0}'")]
    UnknownMobTier(String),
    #[error("unknown item template '{0}'")]
    UnknownItemTemplate(String),
    #[error("unknown mob template '{0}'")]
    UnknownMobTemplate(String),
    #[error("unknown NPC template '{0}'")]
    UnknownNpcTemplate(String),
}

/// Errors from dot-path field resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("empty field path")]
    Empty,
    #[error("field path '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("field path '{0}' uses array-index syntax, which is not supported")]
    IndexSyntax(String),
    #[error("unknown field path '{0}'")]
    UnknownPath(String),
    #[error("field '{path}' expects {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}
