//! DELETE SQL generation.

use crate::error::GenerateResult;
use crate::sql_ast::SqlDelete;
use crate::transpiler::Dialect;
use crate::transpiler::expr::{render_expr, render_table};

/// Generate DELETE SQL.
pub fn build_delete<D: Dialect + ?Sized>(d: &D, delete: &SqlDelete) -> GenerateResult<String> {
    let mut parts = vec![format!("DELETE FROM {}", render_table(d, &delete.from))];
    if let Some(filter) = &delete.filter {
        parts.push(format!("WHERE {}", render_expr(d, filter)?));
    }
    Ok(parts.join("\n"))
}
