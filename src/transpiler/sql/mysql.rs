use crate::transpiler::sql::ansi;
use crate::transpiler::traits::{Dialect, quote_with};

/// MySQL: backtick quoting and anonymous `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '`')
    }

    fn map_type(&self, declared: &str) -> String {
        match declared {
            "cds.Boolean" => "TINYINT(1)".to_string(),
            "cds.DateTime" | "cds.Timestamp" => "DATETIME".to_string(),
            "cds.Double" => "DOUBLE".to_string(),
            "cds.LargeString" => "LONGTEXT".to_string(),
            "cds.LargeBinary" => "LONGBLOB".to_string(),
            other => ansi::map_type(other).to_string(),
        }
    }

    fn format_param(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn supports_nulls_ordering(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_rules() {
        let d = MySql;
        assert_eq!(d.quote_identifier("Books"), "`Books`");
        assert_eq!(d.quote_identifier("we`ird"), "`we``ird`");
        assert_eq!(d.quote_if_needed("order"), "`order`");
        assert_eq!(d.format_param(4), "?");
        assert_eq!(d.bool_literal(false), "0");
        assert_eq!(d.map_type("cds.Boolean"), "TINYINT(1)");
        assert!(!d.supports_nulls_ordering());
    }
}
