//! Query notation: the structured, already-parsed input tree.
//!
//! Decoded from JSON with serde. Unrecognised shapes are kept in `Other`
//! variants instead of failing the decode, so the validator and transformer
//! can report them with their own messages.

pub mod expr;
pub mod query;
pub mod values;

pub use expr::*;
pub use query::*;
pub use values::{CqnValue, Fields};
