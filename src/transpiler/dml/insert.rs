//! INSERT and UPSERT SQL generation.

use crate::error::GenerateResult;
use crate::sql_ast::SqlInsert;
use crate::transpiler::Dialect;
use crate::transpiler::expr::{render_table, render_value};

/// Generate INSERT SQL.
///
/// Rows come from the first non-empty of entries, values, rows. Entry rows
/// print their values in the entry's own key order; the column list is
/// printed only when one was supplied.
pub fn build_insert<D: Dialect + ?Sized>(d: &D, insert: &SqlInsert) -> GenerateResult<String> {
    let mut head = format!("INSERT INTO {}", render_table(d, &insert.into));
    if let Some(columns) = insert.columns.as_ref().filter(|c| !c.is_empty()) {
        let cols: Vec<String> = columns.iter().map(|c| d.quote_identifier(c)).collect();
        head.push_str(&format!(" ({})", cols.join(", ")));
    }

    let mut parts = vec![head];
    if let Some(rows) = insert.value_rows() {
        let rendered: Vec<String> = rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| render_value(d, v)).collect();
                format!("({})", cells.join(", "))
            })
            .collect();
        parts.push(format!("VALUES {}", rendered.join(", ")));
    }
    Ok(parts.join("\n"))
}

/// Generate UPSERT SQL: a plain INSERT on every dialect, no conflict clause.
pub fn build_upsert<D: Dialect + ?Sized>(d: &D, upsert: &SqlInsert) -> GenerateResult<String> {
    build_insert(d, upsert)
}
