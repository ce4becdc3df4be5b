use crate::transpiler::sql::ansi;
use crate::transpiler::traits::Dialect;

/// PostgreSQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &str {
        "postgres"
    }

    fn map_type(&self, declared: &str) -> String {
        match declared {
            "cds.UUID" => "UUID".to_string(),
            "cds.Binary" | "cds.LargeBinary" => "BYTEA".to_string(),
            "cds.LargeString" => "TEXT".to_string(),
            "cds.DateTime" | "cds.Timestamp" => "TIMESTAMPTZ".to_string(),
            other => ansi::map_type(other).to_string(),
        }
    }

    fn map_function(&self, name: &str) -> String {
        let mapped = ansi::map_function(name);
        if mapped == "IFNULL" {
            "COALESCE".to_string()
        } else {
            mapped
        }
    }

    fn supports_distinct_on(&self) -> bool {
        true
    }

    fn supports_returning(&self) -> bool {
        true
    }

    fn supports_merge(&self) -> bool {
        true
    }
}
