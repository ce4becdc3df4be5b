use crate::transpiler::sql::ansi;
use crate::transpiler::traits::Dialect;

/// SQLite: numbered `?n` placeholders, integer booleans, storage-class types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn map_type(&self, declared: &str) -> String {
        let native = match declared {
            "cds.Boolean" | "cds.Integer" | "cds.Integer64" => "INTEGER",
            "cds.Decimal" | "cds.Double" => "REAL",
            "cds.Binary" | "cds.LargeBinary" => "BLOB",
            _ => "TEXT",
        };
        native.to_string()
    }

    fn map_function(&self, name: &str) -> String {
        let mapped = ansi::map_function(name);
        if mapped == "SUBSTRING" {
            "SUBSTR".to_string()
        } else {
            mapped
        }
    }

    fn format_param(&self, index: usize) -> String {
        format!("?{}", index)
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn supports_returning(&self) -> bool {
        true
    }
}
