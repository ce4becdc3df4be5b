//! Dialect capability set and identifier utilities.

use crate::error::GenerateResult;
use crate::sql_ast::{BinaryOperator, SqlNode};
use crate::transpiler::sql::ansi;

/// SQL reserved words that must be quoted when used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "all",
    "and",
    "as",
    "between",
    "by",
    "case",
    "check",
    "constraint",
    "create",
    "cross",
    "default",
    "delete",
    "distinct",
    "else",
    "end",
    "exists",
    "false",
    "foreign",
    "from",
    "full",
    "group",
    "having",
    "in",
    "index",
    "inner",
    "insert",
    "into",
    "is",
    "join",
    "key",
    "left",
    "like",
    "limit",
    "not",
    "null",
    "offset",
    "on",
    "or",
    "order",
    "outer",
    "primary",
    "references",
    "right",
    "select",
    "set",
    "table",
    "then",
    "true",
    "union",
    "update",
    "user",
    "values",
    "when",
    "where",
];

/// Whether an identifier is unsafe to emit bare: a reserved word, a name
/// with characters outside `[A-Za-z0-9_]`, or one starting with a digit.
pub fn needs_quoting(name: &str) -> bool {
    let lower = name.to_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
        || name.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_')
        || name.chars().next().is_none_or(|c| c.is_ascii_digit())
}

/// Wrap `name` in `quote`, doubling any embedded quote character.
pub fn quote_with(name: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    format!("{quote}{}{quote}", name.replace(quote, &doubled))
}

/// One database's generation rules.
///
/// Every method except [`Dialect::name`] has an ANSI default, so a plug-in
/// only overrides what differs. The validator and transformer never consult
/// a dialect.
pub trait Dialect: Send + Sync {
    /// Registry key, e.g. `"postgres"`.
    fn name(&self) -> &str;

    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Quote an identifier unconditionally.
    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '"')
    }

    /// Quote only reserved words and names that are not plain identifiers.
    ///
    /// The built-in statement builders always call [`Dialect::quote_identifier`];
    /// this is for plug-in dialects and callers that emit bare identifiers.
    fn quote_if_needed(&self, name: &str) -> String {
        if needs_quoting(name) {
            self.quote_identifier(name)
        } else {
            name.to_string()
        }
    }

    /// Native type name for a declared type such as `cds.Integer`.
    fn map_type(&self, declared: &str) -> String {
        ansi::map_type(declared).to_string()
    }

    /// Native function name. Unknown names pass through unchanged.
    fn map_function(&self, name: &str) -> String {
        ansi::map_function(name)
    }

    /// Placeholder text for the 1-based positional parameter `index`.
    fn format_param(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn format_operator(&self, op: &BinaryOperator) -> String {
        op.as_sql().to_string()
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    /// Row-limiting clause from already rendered operands.
    fn limit_clause(&self, rows: &str, offset: Option<&str>) -> String {
        match offset {
            Some(offset) => format!("LIMIT {} OFFSET {}", rows, offset),
            None => format!("LIMIT {}", rows),
        }
    }

    fn supports_limit_offset(&self) -> bool {
        true
    }

    fn supports_nulls_ordering(&self) -> bool {
        true
    }

    fn supports_distinct_on(&self) -> bool {
        false
    }

    fn supports_returning(&self) -> bool {
        false
    }

    fn supports_merge(&self) -> bool {
        false
    }

    /// Render one intermediate tree as SQL text, clauses joined by newlines.
    fn generate(&self, node: &SqlNode) -> GenerateResult<String> {
        super::dml::build(self, node)
    }
}

impl std::fmt::Debug for dyn Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name())
            .field("version", &self.version())
            .finish()
    }
}
