//! Per-compilation state.

use crate::sql_ast::SqlNode;
use crate::transpiler::Dialect;

/// Positional parameter counter, 1-based.
///
/// Passed by value through the transformer and handed back with the tree,
/// so two compilations never share one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamCounter {
    index: usize,
}

impl ParamCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance and return the new index. The first call returns 1.
    pub fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    /// Number of placeholders issued so far.
    pub fn count(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// State of one compile call: the active dialect, the running parameter
/// counter, and the most recent intermediate tree.
pub struct Context<'d> {
    pub dialect: &'d dyn Dialect,
    params: ParamCounter,
    sql_ast: Option<SqlNode>,
}

impl<'d> Context<'d> {
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            params: ParamCounter::new(),
            sql_ast: None,
        }
    }

    pub fn next_param_index(&mut self) -> usize {
        self.params.next()
    }

    /// Hand the counter to a stage that threads it by value.
    pub fn take_params(&mut self) -> ParamCounter {
        std::mem::take(&mut self.params)
    }

    pub fn set_params(&mut self, params: ParamCounter) {
        self.params = params;
    }

    pub fn param_count(&self) -> usize {
        self.params.count()
    }

    pub fn set_sql_ast(&mut self, node: SqlNode) -> &SqlNode {
        self.sql_ast.insert(node)
    }

    pub fn sql_ast(&self) -> Option<&SqlNode> {
        self.sql_ast.as_ref()
    }

    /// Counter back to zero, tree cleared.
    pub fn reset(&mut self) {
        self.params.reset();
        self.sql_ast = None;
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("dialect", &self.dialect.name())
            .field("params", &self.params)
            .field("sql_ast", &self.sql_ast)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_ast::{SqlDelete, SqlRef};
    use crate::transpiler::sql::ansi::AnsiSql;

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = ParamCounter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        counter.reset();
        assert_eq!(counter.next(), 1);
    }

    #[test]
    fn test_context_reset() {
        let dialect = AnsiSql;
        let mut ctx = Context::new(&dialect);
        ctx.next_param_index();
        ctx.next_param_index();
        ctx.set_sql_ast(SqlNode::Delete(SqlDelete {
            from: SqlRef::new(vec!["T".into()]),
            filter: None,
        }));
        assert_eq!(ctx.param_count(), 2);
        assert!(ctx.sql_ast().is_some());

        ctx.reset();
        assert_eq!(ctx.param_count(), 0);
        assert!(ctx.sql_ast().is_none());
        assert_eq!(ctx.next_param_index(), 1);
    }

    #[test]
    fn test_take_and_return_params() {
        let dialect = AnsiSql;
        let mut ctx = Context::new(&dialect);
        ctx.next_param_index();
        let mut params = ctx.take_params();
        assert_eq!(ctx.param_count(), 0);
        params.next();
        ctx.set_params(params);
        assert_eq!(ctx.param_count(), 2);
    }
}
