//! # cqn-sql
//!
//! Compiles query notation (CQN), a structured JSON form of SELECT, INSERT,
//! UPDATE, DELETE and UPSERT statements, into dialect-specific SQL.
//!
//! ## Quick Example
//!
//! ```rust
//! use cqn_sql::prelude::*;
//! use serde_json::json;
//!
//! let query = json!({
//!     "SELECT": {
//!         "from": {"ref": ["Books"]},
//!         "where": {"xpr": [{"ref": ["price"]}, ">", {"ref": ["?"]}]}
//!     }
//! });
//!
//! let sql = Converter::for_dialect("sqlite")?.compile_value(&query)?;
//! assert_eq!(sql, "SELECT *\nFROM \"Books\"\nWHERE \"price\" > ?1");
//! # Ok::<(), CqnError>(())
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Validate | [`validator`] | pass / [`ValidationError`](error::ValidationError) |
//! | Transform | [`transformer`] | [`SqlNode`](sql_ast::SqlNode) |
//! | Generate | [`transpiler`] | SQL text |

pub mod config;
pub mod context;
pub mod converter;
pub mod cqn;
pub mod error;
pub mod sql_ast;
pub mod transformer;
pub mod transpiler;
pub mod validator;

pub mod prelude {
    pub use crate::config::ConverterConfig;
    pub use crate::context::{Context, ParamCounter};
    pub use crate::converter::{Compiled, Converter};
    pub use crate::cqn::Query;
    pub use crate::error::*;
    pub use crate::sql_ast::SqlNode;
    pub use crate::transformer::{NestedEntryPolicy, transform};
    pub use crate::transpiler::{
        Dialect, DialectRegistry, DuplicatePolicy, get_dialect, list_dialects, register_dialect,
    };
    pub use crate::validator::{validate, validate_value};
}

/// Compile JSON query notation with the ANSI dialect.
///
/// # Example
///
/// ```
/// let sql = cqn_sql::compile(&serde_json::json!({"DELETE": {"delete": {"ref": ["Books"]}}})).unwrap();
/// assert_eq!(sql, "DELETE FROM \"Books\"");
/// ```
pub fn compile(query: &serde_json::Value) -> error::CqnResult<String> {
    converter::Converter::new().compile_value(query)
}
