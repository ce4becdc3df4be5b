//! Lowering of query notation into the intermediate SQL tree.
//!
//! The transformer is dialect-agnostic. Its one piece of mutable state is the
//! parameter counter, which it receives by value and hands back together with
//! the finished tree.

use serde::Deserialize;
use tracing::warn;

use crate::context::ParamCounter;
use crate::cqn::{
    Column, CqnValue, Delete, Expr, Fields, Func, Insert, Join, Limit, Order, Payload, Query,
    Ref, RowValue, Select, Source, Statement, SubSelect, Update, Upsert, XprItem,
};
use crate::error::{TransformError, TransformResult};
use crate::sql_ast::{
    BinaryOperator, SqlColumn, SqlDelete, SqlExpr, SqlFunction, SqlInsert, SqlJoin, SqlLimit,
    SqlNode, SqlOrder, SqlRef, SqlSelect, SqlSource, SqlUpdate, SqlValue,
};

/// What to do with an insert entry field holding an object or array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedEntryPolicy {
    /// Drop the field and log a warning.
    #[default]
    Skip,
    /// Fail the compilation with [`TransformError::NestedEntry`].
    Reject,
}

/// Recursive query-notation to SQL-tree lowering.
///
/// ```
/// use cqn_sql::context::ParamCounter;
/// use cqn_sql::cqn::Query;
/// use cqn_sql::transformer::Transformer;
///
/// let query: Query = serde_json::from_str(
///     r#"{"SELECT": {"from": {"ref": ["Books"]}, "where": {"xpr": [{"ref": ["ID"]}, "=", {"ref": ["?"]}]}}}"#,
/// ).unwrap();
/// let (_node, params) = Transformer::new(ParamCounter::new()).run(&query).unwrap();
/// assert_eq!(params.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    params: ParamCounter,
    nested_entries: NestedEntryPolicy,
}

/// Lower `query` starting from `params`; returns the tree and the final counter.
pub fn transform(query: &Query, params: ParamCounter) -> TransformResult<(SqlNode, ParamCounter)> {
    Transformer::new(params).run(query)
}

impl Transformer {
    pub fn new(params: ParamCounter) -> Self {
        Self {
            params,
            nested_entries: NestedEntryPolicy::default(),
        }
    }

    pub fn nested_entries(mut self, policy: NestedEntryPolicy) -> Self {
        self.nested_entries = policy;
        self
    }

    pub fn run(mut self, query: &Query) -> TransformResult<(SqlNode, ParamCounter)> {
        let node = match query.statement() {
            Some(Statement::Select(select)) => SqlNode::Select(self.select(select, None)?),
            Some(Statement::Insert(insert)) => SqlNode::Insert(self.insert(insert)?),
            Some(Statement::Update(update)) => SqlNode::Update(self.update(update)?),
            Some(Statement::Delete(delete)) => SqlNode::Delete(self.delete(delete)?),
            Some(Statement::Upsert(upsert)) => SqlNode::Upsert(self.upsert(upsert)?),
            None => return Err(TransformError::InvalidQueryType),
        };
        Ok((node, self.params))
    }

    fn select(&mut self, select: &Select, alias: Option<&str>) -> TransformResult<SqlSelect> {
        let columns = self.columns(select.columns.as_deref())?;
        let from = select.from.as_ref().ok_or(TransformError::MissingSource)?;
        let from = self.source(from)?;
        let filter = select.filter.as_ref().map(|e| self.expr(e)).transpose()?;
        let group_by = match &select.group_by {
            Some(exprs) => exprs.iter().map(|e| self.expr(e)).collect::<TransformResult<_>>()?,
            None => Vec::new(),
        };
        let having = select.having.as_ref().map(|e| self.expr(e)).transpose()?;
        let order_by = match &select.order_by {
            Some(orders) => orders.iter().map(|o| self.order(o)).collect::<TransformResult<_>>()?,
            None => Vec::new(),
        };
        let limit = select.limit.as_ref().map(|l| self.limit(l)).transpose()?;

        Ok(SqlSelect {
            columns,
            from,
            filter,
            group_by,
            having,
            order_by,
            limit,
            distinct: select.distinct,
            alias: alias.map(str::to_string),
        })
    }

    fn columns(&mut self, columns: Option<&[Column]>) -> TransformResult<Vec<SqlColumn>> {
        let columns = match columns {
            Some(columns) if !columns.is_empty() => columns,
            _ => return Ok(vec![SqlColumn::Wildcard]),
        };
        columns
            .iter()
            .map(|column| match column {
                Column::Wildcard(_) | Column::Other(_) => Ok(SqlColumn::Wildcard),
                Column::Ref(r) => Ok(SqlColumn::Expr {
                    expr: self.reference(r)?,
                    alias: r.alias.clone(),
                }),
                Column::Func(f) => Ok(SqlColumn::Expr {
                    expr: self.function(f)?,
                    alias: f.alias.clone(),
                }),
            })
            .collect()
    }

    fn source(&mut self, source: &Source) -> TransformResult<SqlSource> {
        match source {
            Source::Ref(r) => Ok(SqlSource::Table(table_ref(r)?)),
            Source::Select(sub) => Ok(SqlSource::Subquery(Box::new(self.subselect(sub)?))),
            Source::Join(join) => Ok(SqlSource::Join(Box::new(self.join(join)?))),
            Source::Other(_) => Err(TransformError::InvalidSource),
        }
    }

    fn join(&mut self, join: &Join) -> TransformResult<SqlJoin> {
        let [left, right] = join.args.as_slice() else {
            return Err(TransformError::JoinArity(join.args.len()));
        };
        Ok(SqlJoin {
            kind: join.join,
            left: self.source(left)?,
            right: self.source(right)?,
            on: join.on.as_ref().map(|e| self.expr(e)).transpose()?,
            alias: join.alias.clone(),
        })
    }

    fn subselect(&mut self, sub: &SubSelect) -> TransformResult<SqlSelect> {
        self.select(&sub.select, sub.alias.as_deref())
    }

    fn order(&mut self, order: &Order) -> TransformResult<SqlOrder> {
        Ok(SqlOrder {
            expr: self.expr(&order.expr)?,
            direction: order.sort,
            nulls: order.nulls,
        })
    }

    fn limit(&mut self, limit: &Limit) -> TransformResult<SqlLimit> {
        Ok(SqlLimit {
            rows: self.expr(&limit.rows)?,
            offset: limit.offset.as_ref().map(|e| self.expr(e)).transpose()?,
        })
    }

    /// The central recursive rule.
    fn expr(&mut self, expr: &Expr) -> TransformResult<SqlExpr> {
        match expr {
            Expr::Ref(r) => self.reference(r),
            Expr::Val(v) => Ok(SqlExpr::Literal(v.val.clone().into())),
            Expr::Xpr(x) => self.compound(&x.xpr),
            Expr::List(list) => Ok(SqlExpr::List(
                list.list.iter().map(|e| self.expr(e)).collect::<TransformResult<_>>()?,
            )),
            Expr::Func(f) => self.function(f),
            Expr::Select(sub) => Ok(SqlExpr::Subquery(Box::new(self.subselect(sub)?))),
            Expr::BareSelect(bare) => Ok(SqlExpr::Subquery(Box::new(self.select(&bare.0, None)?))),
            Expr::Other(_) => Err(TransformError::InvalidExpressionType),
        }
    }

    fn reference(&mut self, r: &Ref) -> TransformResult<SqlExpr> {
        let expr = if r.is_param() {
            SqlExpr::Param(self.params.next())
        } else {
            SqlExpr::Ref(table_ref(r)?)
        };
        Ok(SqlExpr::cast(expr, r.cast.as_deref()))
    }

    fn function(&mut self, f: &Func) -> TransformResult<SqlExpr> {
        let args = f.args.iter().map(|a| self.expr(a)).collect::<TransformResult<_>>()?;
        let call = SqlExpr::Function(SqlFunction {
            name: f.func.clone(),
            args,
            alias: f.alias.clone(),
        });
        Ok(SqlExpr::cast(call, f.cast.as_deref()))
    }

    /// Flat `[operand, op, operand, ...]` list, folded strictly left to right.
    fn compound(&mut self, items: &[XprItem]) -> TransformResult<SqlExpr> {
        match items {
            [single] => self.operand(single),
            [negation, operand] if negation.is_negation() => Ok(SqlExpr::not(self.operand(operand)?)),
            [first, rest @ ..] if rest.len() % 2 == 0 => {
                let mut acc = self.operand(first)?;
                for (i, pair) in rest.chunks_exact(2).enumerate() {
                    let op = operator(&pair[0], 1 + i * 2)?;
                    let right = self.operand(&pair[1])?;
                    acc = SqlExpr::binary(op, acc, right);
                }
                Ok(acc)
            }
            _ => Err(TransformError::InvalidExpression(items.len())),
        }
    }

    /// A nested compound with more than one element keeps its own group.
    fn operand(&mut self, item: &XprItem) -> TransformResult<SqlExpr> {
        match item {
            XprItem::Expr(Expr::Xpr(x)) if x.xpr.len() > 1 => {
                Ok(SqlExpr::group(self.compound(&x.xpr)?))
            }
            XprItem::Expr(expr) => self.expr(expr),
            XprItem::Token(token) => Err(TransformError::UnexpectedToken(token.clone())),
        }
    }

    fn insert(&mut self, insert: &Insert) -> TransformResult<SqlInsert> {
        let into = insert.into.as_ref().ok_or(TransformError::MissingTarget("INSERT"))?;
        self.payload(table_ref(into)?, &insert.payload)
    }

    fn upsert(&mut self, upsert: &Upsert) -> TransformResult<SqlInsert> {
        let target = upsert.target().ok_or(TransformError::MissingTarget("UPSERT"))?;
        self.payload(table_ref(target)?, &upsert.payload)
    }

    fn payload(&mut self, into: SqlRef, payload: &Payload) -> TransformResult<SqlInsert> {
        let entries = match &payload.entries {
            Some(entries) => Some(
                entries
                    .iter()
                    .map(|entry| self.entry(entry))
                    .collect::<TransformResult<Vec<_>>>()?,
            ),
            None => None,
        };
        let values = payload.values.as_deref().map(literal_rows);
        let rows = payload.rows.as_deref().map(literal_rows);
        check_rows(entries.as_deref())?;
        check_rows(values.as_deref())?;
        check_rows(rows.as_deref())?;
        Ok(SqlInsert {
            into,
            columns: payload.columns.clone(),
            entries,
            values,
            rows,
        })
    }

    fn entry(&self, entry: &Fields<serde_json::Value>) -> TransformResult<Vec<(String, SqlValue)>> {
        let mut row = Vec::with_capacity(entry.len());
        for (field, value) in entry.iter() {
            match CqnValue::from_json(value) {
                Some(value) => row.push((field.to_string(), value.into())),
                None if self.nested_entries == NestedEntryPolicy::Reject => {
                    return Err(TransformError::NestedEntry {
                        field: field.to_string(),
                    });
                }
                None => warn!(field, "Dropping nested insert payload field"),
            }
        }
        Ok(row)
    }

    fn update(&mut self, update: &Update) -> TransformResult<SqlUpdate> {
        let table = update.update.as_ref().ok_or(TransformError::MissingTarget("UPDATE"))?;
        let set = match &update.set {
            Some(set) => set
                .iter()
                .map(|(column, expr)| Ok::<_, TransformError>((column.to_string(), self.expr(expr)?)))
                .collect::<TransformResult<_>>()?,
            None => Vec::new(),
        };
        Ok(SqlUpdate {
            table: table_ref(table)?,
            set,
            filter: update.filter.as_ref().map(|e| self.expr(e)).transpose()?,
        })
    }

    fn delete(&mut self, delete: &Delete) -> TransformResult<SqlDelete> {
        let from = delete.delete.as_ref().ok_or(TransformError::MissingTarget("DELETE"))?;
        Ok(SqlDelete {
            from: table_ref(from)?,
            filter: delete.filter.as_ref().map(|e| self.expr(e)).transpose()?,
        })
    }
}

fn table_ref(r: &Ref) -> TransformResult<SqlRef> {
    if r.path.is_empty() {
        return Err(TransformError::EmptyReference);
    }
    Ok(SqlRef {
        path: r.path.clone(),
        alias: r.alias.clone(),
    })
}

fn operator(item: &XprItem, position: usize) -> TransformResult<BinaryOperator> {
    item.as_token()
        .map(BinaryOperator::from_token)
        .ok_or(TransformError::ExpectedOperator(position))
}

/// Every row must render at least one value; `VALUES ()` is not SQL.
fn check_rows<T>(rows: Option<&[Vec<T>]>) -> TransformResult<()> {
    match rows.and_then(|rows| rows.iter().position(Vec::is_empty)) {
        Some(index) => Err(TransformError::EmptyRow(index)),
        None => Ok(()),
    }
}

fn literal_rows(rows: &[Vec<RowValue>]) -> Vec<Vec<SqlValue>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.value().clone().into()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_ast::{JoinKind, UnaryOperator};
    use serde_json::json;

    fn query(value: serde_json::Value) -> Query {
        serde_json::from_value(value).unwrap()
    }

    fn run(value: serde_json::Value) -> TransformResult<(SqlNode, ParamCounter)> {
        transform(&query(value), ParamCounter::new())
    }

    fn filter_of(value: serde_json::Value) -> SqlExpr {
        match run(value).unwrap().0 {
            SqlNode::Select(select) => select.filter.unwrap(),
            other => panic!("expected select, got {other:?}"),
        }
    }

    fn col(name: &str) -> SqlExpr {
        SqlExpr::Ref(SqlRef::new(vec![name.to_string()]))
    }

    #[test]
    fn test_default_wildcard_column() {
        let (node, params) = run(json!({"SELECT": {"from": {"ref": ["Books"]}}})).unwrap();
        let SqlNode::Select(select) = node else {
            panic!("expected select");
        };
        assert_eq!(select.columns, vec![SqlColumn::Wildcard]);
        assert_eq!(select.from, SqlSource::Table(SqlRef::new(vec!["Books".into()])));
        assert_eq!(params.count(), 0);
    }

    #[test]
    fn test_left_fold_shape() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [{"ref": ["a"]}, "and", {"ref": ["b"]}, "and", {"ref": ["c"]}]}
        }}));
        let expected = SqlExpr::binary(
            BinaryOperator::And,
            SqlExpr::binary(BinaryOperator::And, col("a"), col("b")),
            col("c"),
        );
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_fold_ignores_precedence() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [{"ref": ["a"]}, "or", {"ref": ["b"]}, "and", {"ref": ["c"]}]}
        }}));
        let expected = SqlExpr::binary(
            BinaryOperator::And,
            SqlExpr::binary(BinaryOperator::Or, col("a"), col("b")),
            col("c"),
        );
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_mixed_comparison_chain_folds_left() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [
                {"ref": ["a"]}, "=", {"val": 1}, "and", {"ref": ["b"]}, ">", {"val": 2}
            ]}
        }}));
        let lit = |n: i64| SqlExpr::Literal(SqlValue::Number(n.into()));
        let expected = SqlExpr::binary(
            BinaryOperator::Gt,
            SqlExpr::binary(
                BinaryOperator::And,
                SqlExpr::binary(BinaryOperator::Eq, col("a"), lit(1)),
                col("b"),
            ),
            lit(2),
        );
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_nested_compound_is_grouped() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [
                {"ref": ["a"]}, "and", {"xpr": [{"ref": ["b"]}, "or", {"ref": ["c"]}]}
            ]}
        }}));
        let expected = SqlExpr::binary(
            BinaryOperator::And,
            col("a"),
            SqlExpr::group(SqlExpr::binary(BinaryOperator::Or, col("b"), col("c"))),
        );
        assert_eq!(filter, expected);
    }

    #[test]
    fn test_single_and_negated_compound() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [{"xpr": [{"ref": ["a"]}]}, "=", {"val": 1}]}
        }}));
        assert!(matches!(filter, SqlExpr::Binary { op: BinaryOperator::Eq, ref left, .. } if **left == col("a")));

        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": ["not", {"ref": ["active"]}]}
        }}));
        assert_eq!(
            filter,
            SqlExpr::Unary {
                op: UnaryOperator::Not,
                operand: Box::new(col("active"))
            }
        );
    }

    #[test]
    fn test_invalid_compound_lengths() {
        for items in [
            json!([{"ref": ["a"]}, {"ref": ["b"]}]),
            json!([{"ref": ["a"]}, "between", {"val": 1}, "and"]),
            json!([]),
        ] {
            let len = items.as_array().map(Vec::len).unwrap_or_default();
            let err = run(json!({"SELECT": {"from": {"ref": ["T"]}, "where": {"xpr": items}}}))
                .unwrap_err();
            assert_eq!(err, TransformError::InvalidExpression(len));
        }
    }

    #[test]
    fn test_misplaced_tokens() {
        let err = run(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": ["=", "=", {"val": 1}]}
        }}))
        .unwrap_err();
        assert_eq!(err, TransformError::UnexpectedToken("=".into()));

        let err = run(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [{"ref": ["a"]}, {"ref": ["b"]}, {"ref": ["c"]}]}
        }}))
        .unwrap_err();
        assert_eq!(err, TransformError::ExpectedOperator(1));
    }

    #[test]
    fn test_params_numbered_in_order() {
        let (node, params) = run(json!({"SELECT": {
            "from": {"ref": ["T"]},
            "where": {"xpr": [
                {"ref": ["a"]}, "=", {"ref": ["?"]},
                "and",
                {"ref": ["b"]}, "=", {"ref": ["b"], "param": true}
            ]},
            "limit": {"rows": {"ref": ["?"]}}
        }}))
        .unwrap();
        assert_eq!(params.count(), 3);
        let SqlNode::Select(select) = node else {
            panic!("expected select");
        };
        assert_eq!(select.limit.unwrap().rows, SqlExpr::Param(3));
    }

    #[test]
    fn test_counter_threads_through() {
        let mut start = ParamCounter::new();
        start.next();
        let (_, params) = transform(
            &query(json!({"DELETE": {
                "delete": {"ref": ["T"]},
                "where": {"xpr": [{"ref": ["id"]}, "=", {"ref": ["?"]}]}
            }})),
            start,
        )
        .unwrap();
        assert_eq!(params.count(), 2);
    }

    #[test]
    fn test_columns() {
        let (node, _) = run(json!({"SELECT": {
            "from": {"ref": ["Books"]},
            "columns": [
                {"ref": ["title"], "as": "t"},
                {"func": "count", "args": [{"ref": ["*"]}], "as": "n"},
                {"*": true},
                "*"
            ]
        }}))
        .unwrap();
        let SqlNode::Select(select) = node else {
            panic!("expected select");
        };
        assert_eq!(select.columns.len(), 4);
        assert!(matches!(&select.columns[0], SqlColumn::Expr { alias: Some(a), .. } if a == "t"));
        assert!(matches!(
            &select.columns[1],
            SqlColumn::Expr { expr: SqlExpr::Function(f), .. } if f.name == "count" && f.args.len() == 1
        ));
        assert_eq!(select.columns[2], SqlColumn::Wildcard);
        assert_eq!(select.columns[3], SqlColumn::Wildcard);
    }

    #[test]
    fn test_join_source() {
        let (node, _) = run(json!({"SELECT": {"from": {
            "join": "left",
            "args": [{"ref": ["Books"], "as": "b"}, {"ref": ["Authors"], "as": "a"}],
            "on": {"xpr": [{"ref": ["b", "author_id"]}, "=", {"ref": ["a", "id"]}]}
        }}}))
        .unwrap();
        let SqlNode::Select(select) = node else {
            panic!("expected select");
        };
        let SqlSource::Join(join) = select.from else {
            panic!("expected join");
        };
        assert_eq!(join.kind, JoinKind::Left);
        assert_eq!(join.left, SqlSource::Table(SqlRef {
            path: vec!["Books".into()],
            alias: Some("b".into()),
        }));
        assert!(join.on.is_some());
    }

    #[test]
    fn test_subqueries() {
        let filter = filter_of(json!({"SELECT": {
            "from": {"ref": ["Books"]},
            "where": {"xpr": [
                {"ref": ["author_id"]}, "in",
                {"from": {"ref": ["Authors"]}, "columns": [{"ref": ["id"]}]}
            ]}
        }}));
        let SqlExpr::Binary { op, right, .. } = filter else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOperator::In);
        assert!(matches!(*right, SqlExpr::Subquery(_)));
    }

    #[test]
    fn test_invalid_expression_type() {
        let err = run(json!({"SELECT": {"from": {"ref": ["T"]}, "where": 42}})).unwrap_err();
        assert_eq!(err, TransformError::InvalidExpressionType);
        let err = run(json!({"SELECT": {"from": {"ref": []}}})).unwrap_err();
        assert_eq!(err, TransformError::EmptyReference);
    }

    #[test]
    fn test_insert_entries_drop_nested() {
        let (node, _) = run(json!({"INSERT": {
            "into": {"ref": ["Books"]},
            "entries": [{"ID": 1, "author": {"ID": 2}, "tags": ["a"], "title": "X"}]
        }}))
        .unwrap();
        let SqlNode::Insert(insert) = node else {
            panic!("expected insert");
        };
        let entries = insert.entries.unwrap();
        let keys: Vec<&str> = entries[0].iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["ID", "title"]);
    }

    #[test]
    fn test_entry_left_empty_is_rejected() {
        let err = run(json!({"INSERT": {
            "into": {"ref": ["Books"]},
            "entries": [{"ID": 1}, {"author": {"ID": 2}, "tags": ["a"]}]
        }}))
        .unwrap_err();
        assert_eq!(err, TransformError::EmptyRow(1));

        let err = run(json!({"INSERT": {"into": {"ref": ["Books"]}, "values": [[]]}})).unwrap_err();
        assert_eq!(err, TransformError::EmptyRow(0));
    }

    #[test]
    fn test_insert_entries_reject_nested() {
        let err = Transformer::new(ParamCounter::new())
            .nested_entries(NestedEntryPolicy::Reject)
            .run(&query(json!({"INSERT": {
                "into": {"ref": ["Books"]},
                "entries": [{"ID": 1, "author": {"ID": 2}}]
            }})))
            .unwrap_err();
        assert_eq!(err, TransformError::NestedEntry { field: "author".into() });
    }

    #[test]
    fn test_values_and_rows_equivalent() {
        let values = run(json!({"INSERT": {"into": {"ref": ["T"]}, "values": [[1, {"val": "x"}]]}}))
            .unwrap()
            .0;
        let rows = run(json!({"INSERT": {"into": {"ref": ["T"]}, "rows": [[1, {"val": "x"}]]}}))
            .unwrap()
            .0;
        let (SqlNode::Insert(values), SqlNode::Insert(rows)) = (values, rows) else {
            panic!("expected inserts");
        };
        assert_eq!(values.values, rows.rows);
        assert_eq!(values.value_rows(), rows.value_rows());
    }

    #[test]
    fn test_upsert_prefers_upsert_target() {
        let (node, _) = run(json!({"UPSERT": {
            "upsert": {"ref": ["A"]},
            "into": {"ref": ["B"]},
            "entries": [{"ID": 1}]
        }}))
        .unwrap();
        let SqlNode::Upsert(upsert) = node else {
            panic!("expected upsert");
        };
        assert_eq!(upsert.into.path, vec!["A".to_string()]);
    }

    #[test]
    fn test_update_set_order() {
        let (node, _) = run(json!({"UPDATE": {
            "update": {"ref": ["Books"]},
            "set": {"stock": {"val": 5}, "price": {"ref": ["?"]}}
        }}))
        .unwrap();
        let SqlNode::Update(update) = node else {
            panic!("expected update");
        };
        assert_eq!(update.set[0].0, "stock");
        assert_eq!(update.set[1], ("price".to_string(), SqlExpr::Param(1)));
    }

    #[test]
    fn test_empty_query_is_invalid() {
        assert_eq!(run(json!({})).unwrap_err(), TransformError::InvalidQueryType);
    }
}
