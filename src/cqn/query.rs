use serde::Deserialize;
use std::collections::BTreeMap;

use super::expr::{Expr, Func, Ref, SubSelect, Val};
use super::values::{CqnValue, Fields};

/// The five recognised top-level statement keys.
pub const STATEMENT_KEYS: &[&str] = &["SELECT", "INSERT", "UPDATE", "DELETE", "UPSERT"];

/// A query-notation tree as supplied by the caller.
///
/// Exactly one statement key is expected to be populated; anything else
/// lands in `other` so the validator can name it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Query {
    #[serde(rename = "SELECT")]
    pub select: Option<Select>,
    #[serde(rename = "INSERT")]
    pub insert: Option<Insert>,
    #[serde(rename = "UPDATE")]
    pub update: Option<Update>,
    #[serde(rename = "DELETE")]
    pub delete: Option<Delete>,
    #[serde(rename = "UPSERT")]
    pub upsert: Option<Upsert>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// Borrowed view of the populated statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    Select(&'a Select),
    Insert(&'a Insert),
    Update(&'a Update),
    Delete(&'a Delete),
    Upsert(&'a Upsert),
}

impl Statement<'_> {
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
            Statement::Upsert(_) => "UPSERT",
        }
    }
}

impl Query {
    /// First populated statement, in SELECT, INSERT, UPDATE, DELETE, UPSERT order.
    pub fn statement(&self) -> Option<Statement<'_>> {
        if let Some(s) = &self.select {
            return Some(Statement::Select(s));
        }
        if let Some(s) = &self.insert {
            return Some(Statement::Insert(s));
        }
        if let Some(s) = &self.update {
            return Some(Statement::Update(s));
        }
        if let Some(s) = &self.delete {
            return Some(Statement::Delete(s));
        }
        self.upsert.as_ref().map(Statement::Upsert)
    }

    /// Every populated top-level key, statement keys first.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        if self.select.is_some() {
            keys.push("SELECT");
        }
        if self.insert.is_some() {
            keys.push("INSERT");
        }
        if self.update.is_some() {
            keys.push("UPDATE");
        }
        if self.delete.is_some() {
            keys.push("DELETE");
        }
        if self.upsert.is_some() {
            keys.push("UPSERT");
        }
        keys.extend(self.other.keys().map(String::as_str));
        keys
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Select {
    pub from: Option<Source>,
    pub columns: Option<Vec<Column>>,
    #[serde(rename = "where")]
    pub filter: Option<Expr>,
    pub group_by: Option<Vec<Expr>>,
    pub having: Option<Expr>,
    pub order_by: Option<Vec<Order>>,
    pub limit: Option<Limit>,
    #[serde(default)]
    pub distinct: bool,
}

/// What a SELECT reads from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Ref(Ref),
    Join(Box<Join>),
    Select(SubSelect),
    /// Shape not recognised; rejected by the validator.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// `{ join, args: [left, right], on?, as? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Join {
    pub join: JoinKind,
    #[serde(default)]
    pub args: Vec<Source>,
    pub on: Option<Expr>,
    #[serde(rename = "as")]
    pub alias: Option<String>,
}

/// `{ "*": true }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wildcard {
    #[serde(rename = "*")]
    pub star: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Wildcard(Wildcard),
    Ref(Ref),
    Func(Func),
    /// Any other shape; compiles to a wildcard.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullsOrder {
    #[serde(alias = "FIRST")]
    First,
    #[serde(alias = "LAST")]
    Last,
}

/// One ORDER BY item: any expression plus direction and nulls placement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub expr: Expr,
    #[serde(default)]
    pub sort: SortDirection,
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Limit {
    pub rows: Expr,
    pub offset: Option<Expr>,
}

/// A row cell: `{ val: x }` or a bare scalar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RowValue {
    Val(Val),
    Scalar(CqnValue),
}

impl RowValue {
    pub fn value(&self) -> &CqnValue {
        match self {
            RowValue::Val(v) => &v.val,
            RowValue::Scalar(v) => v,
        }
    }
}

/// Column list plus the three interchangeable payload shapes shared by
/// INSERT and UPSERT.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Payload {
    pub columns: Option<Vec<String>>,
    pub entries: Option<Vec<Fields<serde_json::Value>>>,
    pub values: Option<Vec<Vec<RowValue>>>,
    pub rows: Option<Vec<Vec<RowValue>>>,
}

impl Payload {
    /// True when none of entries, values, rows carries at least one item.
    pub fn is_empty(&self) -> bool {
        let entries = self.entries.as_ref().is_none_or(Vec::is_empty);
        let values = self.values.as_ref().is_none_or(Vec::is_empty);
        let rows = self.rows.as_ref().is_none_or(Vec::is_empty);
        entries && values && rows
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Insert {
    pub into: Option<Ref>,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(rename = "as")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Upsert {
    pub upsert: Option<Ref>,
    pub into: Option<Ref>,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Upsert {
    /// The upsert-specific spelling wins over `into`.
    pub fn target(&self) -> Option<&Ref> {
        self.upsert.as_ref().or(self.into.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Update {
    pub update: Option<Ref>,
    pub set: Option<Fields<Expr>>,
    #[serde(rename = "where")]
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Delete {
    pub delete: Option<Ref>,
    #[serde(rename = "where")]
    pub filter: Option<Expr>,
}
