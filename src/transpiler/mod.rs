//! SQL generation from the intermediate tree.
//!
//! A [`Dialect`] is a capability set plus a provided `generate` entry point;
//! the statement builders in [`dml`] are generic over it, so a plug-in only
//! overrides the capabilities that differ from ANSI.

pub mod dml;
pub mod expr;
pub mod registry;
pub mod sql;
pub mod traits;

pub use registry::{DialectRegistry, DuplicatePolicy, get_dialect, list_dialects, register_dialect};
pub use traits::{Dialect, RESERVED_WORDS, needs_quoting, quote_with};
