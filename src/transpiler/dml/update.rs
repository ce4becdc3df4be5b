//! UPDATE SQL generation.

use crate::error::GenerateResult;
use crate::sql_ast::SqlUpdate;
use crate::transpiler::Dialect;
use crate::transpiler::expr::{render_expr, render_table};

/// Generate UPDATE SQL. Assignments follow the set-map's key order.
pub fn build_update<D: Dialect + ?Sized>(d: &D, update: &SqlUpdate) -> GenerateResult<String> {
    let mut parts = vec![format!("UPDATE {}", render_table(d, &update.table))];

    let mut assignments = Vec::with_capacity(update.set.len());
    for (column, value) in &update.set {
        assignments.push(format!("{} = {}", d.quote_identifier(column), render_expr(d, value)?));
    }
    parts.push(format!("SET {}", assignments.join(", ")));

    if let Some(filter) = &update.filter {
        parts.push(format!("WHERE {}", render_expr(d, filter)?));
    }
    Ok(parts.join("\n"))
}
