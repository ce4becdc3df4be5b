//! Error types for CQN compilation.
//!
//! Two tiers reach the caller: [`ValidationError`] for structural problems
//! found before any transformation, and a wrapped [`ConversionError`] for
//! anything that fails while transforming or generating.

use thiserror::Error;

/// Structural violation found by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Query must be an object")]
    NotAnObject,

    #[error("Query must have exactly one key (SELECT, INSERT, UPDATE, DELETE, or UPSERT)")]
    KeyCount,

    /// Top-level key that is not a statement kind.
    #[error("Invalid query type: {0}. Must be one of: SELECT, INSERT, UPDATE, DELETE, UPSERT")]
    UnknownStatement(String),

    /// A mandatory clause is absent (e.g. SELECT without `from`).
    #[error("{statement} query must have {} {clause} clause", indefinite_article(.clause))]
    MissingClause {
        statement: &'static str,
        clause: &'static str,
    },

    #[error("UPSERT query must have an upsert or into clause")]
    MissingUpsertTarget,

    /// INSERT/UPSERT carried no non-empty payload collection.
    #[error("{0} must have entries, values, or rows")]
    EmptyPayload(&'static str),

    #[error("JOIN must have exactly two arguments, found {0}")]
    JoinArity(usize),

    #[error("Invalid source type")]
    InvalidSource,

    /// The input could not be decoded into query notation at all.
    #[error("Malformed query notation: {0}")]
    Malformed(String),
}

fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Failure while lowering query notation into the intermediate SQL tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Invalid query type")]
    InvalidQueryType,

    #[error("Source is undefined")]
    MissingSource,

    #[error("Invalid source type")]
    InvalidSource,

    #[error("{0} target is undefined")]
    MissingTarget(&'static str),

    /// Compound expression with an element count that has no meaning.
    #[error("Invalid expression: compound expression with {0} elements")]
    InvalidExpression(usize),

    #[error("Invalid expression type")]
    InvalidExpressionType,

    /// An operator token showed up where an operand was expected.
    #[error("Unexpected operator '{0}' in operand position")]
    UnexpectedToken(String),

    #[error("Expected an operator token at position {0}")]
    ExpectedOperator(usize),

    #[error("Reference path must not be empty")]
    EmptyReference,

    #[error("JOIN must have exactly two arguments, found {0}")]
    JoinArity(usize),

    /// Insert row with nothing left to render, e.g. every field was nested.
    #[error("Insert row {0} has no scalar values")]
    EmptyRow(usize),

    /// Object- or array-valued insert field under the reject policy.
    #[error("Nested insert payload in field '{field}' is not supported")]
    NestedEntry { field: String },
}

/// Failure while rendering the intermediate tree as SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{feature} is not supported by the {dialect} dialect")]
    Unsupported {
        dialect: String,
        feature: &'static str,
    },
}

impl GenerateError {
    pub fn unsupported(dialect: impl Into<String>, feature: &'static str) -> Self {
        Self::Unsupported {
            dialect: dialect.into(),
            feature,
        }
    }
}

/// Anything that went wrong after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// The main error type for CQN operations.
#[derive(Debug, Error)]
pub enum CqnError {
    /// Structural validation failed; surfaced unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transform or generate failed; the cause stays reachable via `source()`.
    #[error("Conversion failed: {0}")]
    Conversion(#[source] ConversionError),

    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    #[error("Dialect '{0}' is already registered")]
    DuplicateDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CqnError {
    /// Wrap a transform or generate failure.
    pub fn conversion(cause: impl Into<ConversionError>) -> Self {
        Self::Conversion(cause.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for CQN operations.
pub type CqnResult<T> = Result<T, CqnError>;

pub type TransformResult<T> = Result<T, TransformError>;

pub type GenerateResult<T> = Result<T, GenerateError>;
