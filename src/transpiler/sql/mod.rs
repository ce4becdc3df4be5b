//! Built-in SQL dialects.

pub mod ansi;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

pub use ansi::AnsiSql;
pub use mysql::MySql;
pub use postgres::Postgres;
pub use sqlite::Sqlite;
