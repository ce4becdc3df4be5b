//! DML (Data Manipulation Language) SQL generation.
//!
//! One builder per statement kind. Every builder emits one clause per line
//! and leaves out clauses whose data is absent.

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

use crate::error::GenerateResult;
use crate::sql_ast::SqlNode;
use crate::transpiler::Dialect;

/// Dispatch on the statement kind.
pub fn build<D: Dialect + ?Sized>(d: &D, node: &SqlNode) -> GenerateResult<String> {
    match node {
        SqlNode::Select(select) => select::build_select(d, select),
        SqlNode::Insert(insert) => insert::build_insert(d, insert),
        SqlNode::Update(update) => update::build_update(d, update),
        SqlNode::Delete(delete) => delete::build_delete(d, delete),
        SqlNode::Upsert(upsert) => insert::build_upsert(d, upsert),
    }
}
