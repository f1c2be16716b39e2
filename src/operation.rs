use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:--|#).*?$").unwrap());
static SQL_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s;]*").unwrap());
static FIRST_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+").unwrap());

/// Name of the operation performed by `query`: its first keyword, lowercased.
///
/// Comments, leading whitespace and leftover `;` are skipped. Returns an empty
/// string when the query has no leading word.
pub fn db_operation(query: &str) -> String {
    let query = BLOCK_COMMENT_REGEX.replace_all(query, "");
    let query = LINE_COMMENT_REGEX.replace_all(&query, "");
    let query = SQL_PREFIX_REGEX.replace(&query, "");
    FIRST_WORD_REGEX
        .find(&query)
        .map(|v| v.as_str().to_lowercase())
        .unwrap_or_default()
}

/// Database product, reported as `db.system.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbSystem {
    MySql,
    MsSql,
    PostgreSql,
    Sqlite,
    Spanner,
}

impl DbSystem {
    /// Recognizes the usual driver names, `None` for anything else.
    pub fn from_driver_name(driver_name: &str) -> Option<Self> {
        Some(match driver_name {
            "mysql" => DbSystem::MySql,
            "odbc" | "mssql" => DbSystem::MsSql,
            "pgx" | "postgres" => DbSystem::PostgreSql,
            "sqlite" | "sqlite3" => DbSystem::Sqlite,
            "spanner" => DbSystem::Spanner,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DbSystem::MySql => "mysql",
            DbSystem::MsSql => "mssql",
            DbSystem::PostgreSql => "postgresql",
            DbSystem::Sqlite => "sqlite3",
            DbSystem::Spanner => "spanner",
        }
    }
}
