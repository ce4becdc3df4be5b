//! ANSI SQL, also the fallback tables for every other dialect.

use crate::transpiler::traits::Dialect;

/// Standard SQL: double-quoted identifiers, `$n` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiSql;

impl Dialect for AnsiSql {
    fn name(&self) -> &str {
        "ansi-sql"
    }
}

/// Default string type for declared types with no mapping.
pub const DEFAULT_STRING_TYPE: &str = "VARCHAR(5000)";

/// Declared type to standard SQL type.
pub fn map_type(declared: &str) -> &'static str {
    match declared {
        "cds.UUID" => "VARCHAR(36)",
        "cds.String" => "VARCHAR(5000)",
        "cds.Boolean" => "BOOLEAN",
        "cds.Integer" => "INTEGER",
        "cds.Integer64" => "BIGINT",
        "cds.Decimal" => "DECIMAL",
        "cds.Double" => "DOUBLE PRECISION",
        "cds.Date" => "DATE",
        "cds.Time" => "TIME",
        "cds.DateTime" | "cds.Timestamp" => "TIMESTAMP",
        "cds.Binary" | "cds.LargeBinary" => "BLOB",
        "cds.LargeString" => "TEXT",
        _ => DEFAULT_STRING_TYPE,
    }
}

/// Functions every built-in dialect spells the standard way.
pub const STANDARD_FUNCTIONS: &[&str] = &[
    "UPPER", "LOWER", "TRIM", "LTRIM", "RTRIM", "SUBSTRING", "CONCAT", "COALESCE", "IFNULL",
    "NULLIF", "LENGTH", "ABS", "CEIL", "FLOOR", "ROUND", "MOD", "POWER", "SQRT", "YEAR",
    "MONTH", "DAY", "HOUR", "MINUTE", "SECOND", "COUNT", "SUM", "AVG", "MIN", "MAX",
];

/// Function name lookup, case-insensitive on input. Unknown names are
/// returned unchanged.
pub fn map_function(name: &str) -> String {
    let upper = name.to_uppercase();
    if upper == "NOW" {
        return "CURRENT_TIMESTAMP".to_string();
    }
    if STANDARD_FUNCTIONS.contains(&upper.as_str()) {
        upper
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let d = AnsiSql;
        assert_eq!(d.name(), "ansi-sql");
        assert_eq!(d.version(), "1.0.0");
        assert!(d.supports_limit_offset());
        assert!(d.supports_nulls_ordering());
        assert!(!d.supports_distinct_on());
        assert!(!d.supports_returning());
        assert!(!d.supports_merge());
    }

    #[test]
    fn test_quoting() {
        let d = AnsiSql;
        assert_eq!(d.quote_identifier("Books"), "\"Books\"");
        assert_eq!(d.quote_if_needed("Books"), "Books");
        assert_eq!(d.quote_if_needed("order"), "\"order\"");
        assert_eq!(d.format_param(3), "$3");
    }

    #[test]
    fn test_type_and_function_maps() {
        assert_eq!(map_type("cds.Integer"), "INTEGER");
        assert_eq!(map_type("cds.Unknown"), DEFAULT_STRING_TYPE);
        assert_eq!(map_function("now"), "CURRENT_TIMESTAMP");
        assert_eq!(map_function("count"), "COUNT");
        assert_eq!(map_function("my_udf"), "my_udf");
    }
}
