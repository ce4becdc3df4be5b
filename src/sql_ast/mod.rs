//! Intermediate SQL tree.
//!
//! Dialect-independent and fully normalised: compound expressions are
//! binary/unary nodes with canonical operators, placeholders carry their
//! final 1-based index, and columns are either wildcards or
//! `{expression, alias}` pairs. Produced once per compile call and consumed
//! only by [`crate::transpiler::Dialect::generate`].

pub mod operators;

pub use crate::cqn::{JoinKind, NullsOrder, SortDirection};
pub use operators::{BinaryOperator, UnaryOperator};

/// One compiled statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlNode {
    Select(SqlSelect),
    Insert(SqlInsert),
    Update(SqlUpdate),
    Delete(SqlDelete),
    /// Same shape as an insert; lowered to INSERT text.
    Upsert(SqlInsert),
}

impl SqlNode {
    pub fn kind(&self) -> &'static str {
        match self {
            SqlNode::Select(_) => "select",
            SqlNode::Insert(_) => "insert",
            SqlNode::Update(_) => "update",
            SqlNode::Delete(_) => "delete",
            SqlNode::Upsert(_) => "upsert",
        }
    }
}

/// Scalar literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl From<crate::cqn::CqnValue> for SqlValue {
    fn from(value: crate::cqn::CqnValue) -> Self {
        use crate::cqn::CqnValue;
        match value {
            CqnValue::Null => SqlValue::Null,
            CqnValue::Bool(b) => SqlValue::Bool(b),
            CqnValue::Number(n) => SqlValue::Number(n),
            CqnValue::Text(s) => SqlValue::Text(s),
        }
    }
}

/// Dotted name path with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRef {
    pub path: Vec<String>,
    pub alias: Option<String>,
}

impl SqlRef {
    pub fn new(path: Vec<String>) -> Self {
        Self { path, alias: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunction {
    pub name: String,
    pub args: Vec<SqlExpr>,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpr {
    Ref(SqlRef),
    Literal(SqlValue),
    Binary {
        op: BinaryOperator,
        left: Box<SqlExpr>,
        right: Box<SqlExpr>,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<SqlExpr>,
    },
    /// Explicitly nested compound expression, printed inside parentheses.
    Group(Box<SqlExpr>),
    Function(SqlFunction),
    /// Parenthesised membership list.
    List(Vec<SqlExpr>),
    /// Positional placeholder, 1-based.
    Param(usize),
    Subquery(Box<SqlSelect>),
    /// Declared target type, mapped to a native type name at generation.
    Cast {
        expr: Box<SqlExpr>,
        target: String,
    },
}

impl SqlExpr {
    pub fn binary(op: BinaryOperator, left: SqlExpr, right: SqlExpr) -> Self {
        SqlExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: SqlExpr) -> Self {
        SqlExpr::Unary {
            op: UnaryOperator::Not,
            operand: Box::new(operand),
        }
    }

    pub fn group(inner: SqlExpr) -> Self {
        SqlExpr::Group(Box::new(inner))
    }

    pub fn cast(expr: SqlExpr, target: Option<&str>) -> Self {
        match target {
            Some(target) => SqlExpr::Cast {
                expr: Box::new(expr),
                target: target.to_string(),
            },
            None => expr,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlColumn {
    Wildcard,
    Expr {
        expr: SqlExpr,
        alias: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlSource {
    Table(SqlRef),
    Subquery(Box<SqlSelect>),
    Join(Box<SqlJoin>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlJoin {
    pub kind: JoinKind,
    pub left: SqlSource,
    pub right: SqlSource,
    /// `None` renders as an always-true condition (cross joins print no ON).
    pub on: Option<SqlExpr>,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlOrder {
    pub expr: SqlExpr,
    pub direction: SortDirection,
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlLimit {
    pub rows: SqlExpr,
    pub offset: Option<SqlExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlSelect {
    pub columns: Vec<SqlColumn>,
    pub from: SqlSource,
    pub filter: Option<SqlExpr>,
    pub group_by: Vec<SqlExpr>,
    pub having: Option<SqlExpr>,
    pub order_by: Vec<SqlOrder>,
    pub limit: Option<SqlLimit>,
    pub distinct: bool,
    /// Set when the select is used as an aliased source.
    pub alias: Option<String>,
}

/// INSERT and UPSERT payload. Only the collections present on the input
/// are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlInsert {
    pub into: SqlRef,
    pub columns: Option<Vec<String>>,
    pub entries: Option<Vec<Vec<(String, SqlValue)>>>,
    pub values: Option<Vec<Vec<SqlValue>>>,
    pub rows: Option<Vec<Vec<SqlValue>>>,
}

impl SqlInsert {
    /// The rows to emit: the first non-empty of entries, values, rows.
    /// Entry rows keep their own key order.
    pub fn value_rows(&self) -> Option<Vec<Vec<&SqlValue>>> {
        if let Some(entries) = self.entries.as_ref().filter(|e| !e.is_empty()) {
            return Some(
                entries
                    .iter()
                    .map(|entry| entry.iter().map(|(_, v)| v).collect())
                    .collect(),
            );
        }
        [&self.values, &self.rows]
            .into_iter()
            .flatten()
            .find(|rows| !rows.is_empty())
            .map(|rows| rows.iter().map(|row| row.iter().collect()).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlUpdate {
    pub table: SqlRef,
    pub set: Vec<(String, SqlExpr)>,
    pub filter: Option<SqlExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlDelete {
    pub from: SqlRef,
    pub filter: Option<SqlExpr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(s.to_string())
    }

    #[test]
    fn test_value_rows_prefers_entries() {
        let insert = SqlInsert {
            into: SqlRef::new(vec!["T".into()]),
            columns: None,
            entries: Some(vec![vec![("b".into(), text("x")), ("a".into(), text("y"))]]),
            values: Some(vec![vec![text("ignored")]]),
            rows: None,
        };
        let rows = insert.value_rows().unwrap();
        assert_eq!(rows, vec![vec![&text("x"), &text("y")]]);
    }

    #[test]
    fn test_value_rows_falls_back_to_rows() {
        let insert = SqlInsert {
            into: SqlRef::new(vec!["T".into()]),
            columns: None,
            entries: Some(vec![]),
            values: None,
            rows: Some(vec![vec![SqlValue::Null]]),
        };
        assert_eq!(insert.value_rows(), Some(vec![vec![&SqlValue::Null]]));
    }

    #[test]
    fn test_cast_only_when_declared() {
        let base = SqlExpr::Ref(SqlRef::new(vec!["a".into()]));
        assert_eq!(SqlExpr::cast(base.clone(), None), base);
        assert!(matches!(
            SqlExpr::cast(base, Some("cds.Integer")),
            SqlExpr::Cast { ref target, .. } if target == "cds.Integer"
        ));
    }
}
