//! Validate, transform, generate.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::context::Context;
use crate::cqn::Query;
use crate::error::{CqnError, CqnResult, ValidationError};
use crate::transformer::{NestedEntryPolicy, Transformer};
use crate::transpiler::registry::get_dialect;
use crate::transpiler::sql::AnsiSql;
use crate::transpiler::Dialect;
use crate::validator::{validate, validate_value};

/// Output of one compile call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub sql: String,
    /// Number of positional placeholders in `sql`.
    pub param_count: usize,
}

/// Query-notation to SQL compiler bound to one dialect.
///
/// Holds no per-call state: every compile call gets its own [`Context`], so
/// one converter can be shared across threads.
///
/// ```
/// use cqn_sql::converter::Converter;
/// use serde_json::json;
///
/// let sql = Converter::new()
///     .compile_value(&json!({"SELECT": {"from": {"ref": ["Books"]}}}))
///     .unwrap();
/// assert_eq!(sql, "SELECT *\nFROM \"Books\"");
/// ```
#[derive(Clone)]
pub struct Converter {
    dialect: Arc<dyn Dialect>,
    nested_entries: NestedEntryPolicy,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter for ANSI SQL.
    pub fn new() -> Self {
        Self::with_dialect(Arc::new(AnsiSql))
    }

    pub fn with_dialect(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            nested_entries: NestedEntryPolicy::default(),
        }
    }

    /// Converter for a dialect from the process-wide registry.
    pub fn for_dialect(name: &str) -> CqnResult<Self> {
        get_dialect(name)
            .map(Self::with_dialect)
            .ok_or_else(|| CqnError::UnknownDialect(name.to_string()))
    }

    pub fn from_config(config: &ConverterConfig) -> CqnResult<Self> {
        Ok(Self::for_dialect(&config.dialect)?.nested_entries(config.nested_entries))
    }

    pub fn nested_entries(mut self, policy: NestedEntryPolicy) -> Self {
        self.nested_entries = policy;
        self
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Compile a decoded query to SQL text.
    pub fn compile(&self, query: &Query) -> CqnResult<String> {
        self.compile_with_params(query).map(|compiled| compiled.sql)
    }

    /// Compile and also report how many placeholders were issued.
    pub fn compile_with_params(&self, query: &Query) -> CqnResult<Compiled> {
        let mut ctx = Context::new(self.dialect.as_ref());
        let result = self.run(&mut ctx, query);
        ctx.reset();
        if let Err(err) = &result {
            debug!(error = %err, "Compilation failed");
        }
        result
    }

    /// Validate raw JSON, then compile it.
    pub fn compile_value(&self, value: &Value) -> CqnResult<String> {
        let query = validate_value(value).inspect_err(|err| debug!(error = %err, "Validation failed"))?;
        self.compile(&query)
    }

    /// Parse JSON text, then compile it.
    pub fn compile_str(&self, text: &str) -> CqnResult<String> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        self.compile_value(&value)
    }

    fn run(&self, ctx: &mut Context<'_>, query: &Query) -> CqnResult<Compiled> {
        validate(query)?;

        let dialect = ctx.dialect;
        let statement = query.statement().map(|s| s.keyword()).unwrap_or_default();
        debug!(dialect = dialect.name(), statement, "Compiling query");

        let (node, params) = Transformer::new(ctx.take_params())
            .nested_entries(self.nested_entries)
            .run(query)
            .map_err(CqnError::conversion)?;
        ctx.set_params(params);

        let node = ctx.set_sql_ast(node);
        let sql = dialect.generate(node).map_err(CqnError::conversion)?;

        let param_count = ctx.param_count();
        debug!(param_count, "Compiled query");
        Ok(Compiled { sql, param_count })
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("dialect", &self.dialect.name())
            .field("nested_entries", &self.nested_entries)
            .finish()
    }
}
