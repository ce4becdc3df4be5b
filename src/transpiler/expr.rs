//! Expression, literal, and source rendering shared by every statement.

use crate::error::{GenerateError, GenerateResult};
use crate::sql_ast::{JoinKind, SqlExpr, SqlFunction, SqlJoin, SqlRef, SqlSource, SqlValue};
use crate::transpiler::Dialect;
use crate::transpiler::dml::select::build_select;

/// Functions that take no argument list when called without arguments.
pub const NILADIC_FUNCTIONS: &[&str] = &["CURRENT_TIMESTAMP", "CURRENT_DATE", "CURRENT_TIME"];

/// Render any expression. Aliases on expressions are not printed here.
pub fn render_expr<D: Dialect + ?Sized>(d: &D, expr: &SqlExpr) -> GenerateResult<String> {
    match expr {
        SqlExpr::Ref(r) => Ok(render_path(d, &r.path)),
        SqlExpr::Literal(value) => Ok(render_value(d, value)),
        SqlExpr::Binary { op, left, right } => Ok(format!(
            "{} {} {}",
            render_expr(d, left)?,
            d.format_operator(op),
            render_expr(d, right)?
        )),
        SqlExpr::Unary { op, operand } => {
            let inner = render_expr(d, operand)?;
            if matches!(**operand, SqlExpr::Binary { .. }) {
                Ok(format!("{} ({})", op.as_sql(), inner))
            } else {
                Ok(format!("{} {}", op.as_sql(), inner))
            }
        }
        SqlExpr::Group(inner) => Ok(format!("({})", render_expr(d, inner)?)),
        SqlExpr::Function(f) => render_function(d, f),
        SqlExpr::List(items) => Ok(format!("({})", render_list(d, items)?)),
        SqlExpr::Param(index) => Ok(d.format_param(*index)),
        SqlExpr::Subquery(select) => Ok(format!("({})", build_select(d, select)?)),
        SqlExpr::Cast { expr, target } => Ok(format!(
            "CAST({} AS {})",
            render_expr(d, expr)?,
            d.map_type(target)
        )),
    }
}

/// Comma-separated expressions.
pub fn render_list<D: Dialect + ?Sized>(d: &D, items: &[SqlExpr]) -> GenerateResult<String> {
    let parts = items
        .iter()
        .map(|e| render_expr(d, e))
        .collect::<GenerateResult<Vec<_>>>()?;
    Ok(parts.join(", "))
}

fn render_function<D: Dialect + ?Sized>(d: &D, f: &SqlFunction) -> GenerateResult<String> {
    let name = d.map_function(&f.name);
    if f.args.is_empty() && NILADIC_FUNCTIONS.contains(&name.as_str()) {
        return Ok(name);
    }
    Ok(format!("{}({})", name, render_list(d, &f.args)?))
}

/// Dotted path with every segment quoted, except a bare `*`.
pub fn render_path<D: Dialect + ?Sized>(d: &D, path: &[String]) -> String {
    path.iter()
        .map(|segment| {
            if segment == "*" {
                segment.clone()
            } else {
                d.quote_identifier(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Table reference in target or source position, alias included.
pub fn render_table<D: Dialect + ?Sized>(d: &D, table: &SqlRef) -> String {
    let name = render_path(d, &table.path);
    match &table.alias {
        Some(alias) => format!("{} AS {}", name, d.quote_identifier(alias)),
        None => name,
    }
}

pub fn render_value<D: Dialect + ?Sized>(d: &D, value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(b) => d.bool_literal(*b).to_string(),
        SqlValue::Number(n) => n.to_string(),
        SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

/// FROM-clause source.
pub fn render_source<D: Dialect + ?Sized>(d: &D, source: &SqlSource) -> GenerateResult<String> {
    match source {
        SqlSource::Table(table) => Ok(render_table(d, table)),
        SqlSource::Subquery(select) => {
            let sql = format!("({})", build_select(d, select)?);
            Ok(with_alias(d, sql, select.alias.as_deref()))
        }
        SqlSource::Join(join) => match &join.alias {
            Some(alias) => Ok(format!(
                "({}) AS {}",
                render_join(d, join)?,
                d.quote_identifier(alias)
            )),
            None => render_join(d, join),
        },
    }
}

fn render_join<D: Dialect + ?Sized>(d: &D, join: &SqlJoin) -> GenerateResult<String> {
    let left = render_source(d, &join.left)?;
    let right = match &join.right {
        SqlSource::Join(inner) if inner.alias.is_none() => format!("({})", render_join(d, inner)?),
        other => render_source(d, other)?,
    };
    let kind = join.kind.keyword();
    if join.kind == JoinKind::Cross {
        return Ok(format!("{} {} JOIN {}", left, kind, right));
    }
    let on = match &join.on {
        Some(on) => render_expr(d, on)?,
        None => "1=1".to_string(),
    };
    Ok(format!("{} {} JOIN {} ON {}", left, kind, right, on))
}

fn with_alias<D: Dialect + ?Sized>(d: &D, sql: String, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{} AS {}", sql, d.quote_identifier(alias)),
        None => sql,
    }
}

/// Shorthand for the error a dialect raises on a clause it cannot express.
pub(crate) fn unsupported<D: Dialect + ?Sized>(d: &D, feature: &'static str) -> GenerateError {
    GenerateError::unsupported(d.name(), feature)
}
