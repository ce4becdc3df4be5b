//! SELECT SQL generation.

use crate::error::GenerateResult;
use crate::sql_ast::{NullsOrder, SortDirection, SqlColumn, SqlOrder, SqlSelect};
use crate::transpiler::Dialect;
use crate::transpiler::expr::{render_expr, render_list, render_source, unsupported};

/// Generate SELECT SQL.
pub fn build_select<D: Dialect + ?Sized>(d: &D, select: &SqlSelect) -> GenerateResult<String> {
    let mut head = if select.distinct {
        String::from("SELECT DISTINCT ")
    } else {
        String::from("SELECT ")
    };
    head.push_str(&columns(d, &select.columns)?);

    let mut parts = vec![head, format!("FROM {}", render_source(d, &select.from)?)];

    if let Some(filter) = &select.filter {
        parts.push(format!("WHERE {}", render_expr(d, filter)?));
    }
    if !select.group_by.is_empty() {
        parts.push(format!("GROUP BY {}", render_list(d, &select.group_by)?));
    }
    if let Some(having) = &select.having {
        parts.push(format!("HAVING {}", render_expr(d, having)?));
    }
    if !select.order_by.is_empty() {
        let items = select
            .order_by
            .iter()
            .map(|o| order_item(d, o))
            .collect::<GenerateResult<Vec<_>>>()?;
        parts.push(format!("ORDER BY {}", items.join(", ")));
    }
    if let Some(limit) = &select.limit {
        if !d.supports_limit_offset() {
            return Err(unsupported(d, "LIMIT/OFFSET"));
        }
        let rows = render_expr(d, &limit.rows)?;
        let offset = limit.offset.as_ref().map(|o| render_expr(d, o)).transpose()?;
        parts.push(d.limit_clause(&rows, offset.as_deref()));
    }

    Ok(parts.join("\n"))
}

fn columns<D: Dialect + ?Sized>(d: &D, columns: &[SqlColumn]) -> GenerateResult<String> {
    if columns.is_empty() {
        return Ok("*".to_string());
    }
    let mut out = Vec::with_capacity(columns.len());
    for column in columns {
        match column {
            SqlColumn::Wildcard => out.push("*".to_string()),
            SqlColumn::Expr { expr, alias } => {
                let sql = render_expr(d, expr)?;
                match alias {
                    Some(alias) => out.push(format!("{} AS {}", sql, d.quote_identifier(alias))),
                    None => out.push(sql),
                }
            }
        }
    }
    Ok(out.join(", "))
}

fn order_item<D: Dialect + ?Sized>(d: &D, order: &SqlOrder) -> GenerateResult<String> {
    let direction = match order.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    let mut sql = format!("{} {}", render_expr(d, &order.expr)?, direction);
    if let Some(nulls) = order.nulls {
        if !d.supports_nulls_ordering() {
            return Err(unsupported(d, "NULLS ordering"));
        }
        sql.push_str(match nulls {
            NullsOrder::First => " NULLS FIRST",
            NullsOrder::Last => " NULLS LAST",
        });
    }
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_ast::{BinaryOperator, SqlExpr, SqlLimit, SqlRef, SqlSource, SqlValue};
    use crate::transpiler::sql::ansi::AnsiSql;

    fn books() -> SqlSelect {
        SqlSelect {
            columns: vec![SqlColumn::Wildcard],
            from: SqlSource::Table(SqlRef::new(vec!["Books".into()])),
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            distinct: false,
            alias: None,
        }
    }

    fn col(name: &str) -> SqlExpr {
        SqlExpr::Ref(SqlRef::new(vec![name.to_string()]))
    }

    #[test]
    fn test_minimal_select() {
        assert_eq!(build_select(&AnsiSql, &books()).unwrap(), "SELECT *\nFROM \"Books\"");
    }

    #[test]
    fn test_clause_order() {
        let mut select = books();
        select.distinct = true;
        select.columns = vec![
            SqlColumn::Expr {
                expr: col("category"),
                alias: Some("c".into()),
            },
        ];
        select.filter = Some(SqlExpr::binary(
            BinaryOperator::Gt,
            col("price"),
            SqlExpr::Literal(SqlValue::Number(100.into())),
        ));
        select.group_by = vec![col("category")];
        select.having = Some(SqlExpr::binary(
            BinaryOperator::Gt,
            col("n"),
            SqlExpr::Literal(SqlValue::Number(1.into())),
        ));
        select.order_by = vec![SqlOrder {
            expr: col("category"),
            direction: SortDirection::Desc,
            nulls: Some(NullsOrder::Last),
        }];
        select.limit = Some(SqlLimit {
            rows: SqlExpr::Literal(SqlValue::Number(10.into())),
            offset: Some(SqlExpr::Literal(SqlValue::Number(20.into()))),
        });

        let expected = [
            "SELECT DISTINCT \"category\" AS \"c\"",
            "FROM \"Books\"",
            "WHERE \"price\" > 100",
            "GROUP BY \"category\"",
            "HAVING \"n\" > 1",
            "ORDER BY \"category\" DESC NULLS LAST",
            "LIMIT 10 OFFSET 20",
        ]
        .join("\n");
        assert_eq!(build_select(&AnsiSql, &select).unwrap(), expected);
    }
}
