/// Span names, one per kind of statement.
pub mod span_name {
    /// Insert
    pub const CREATE: &str = "sql:create";
    /// Get or find
    pub const QUERY: &str = "sql:query";
    pub const COUNT: &str = "sql:count";
    /// Sum of one or more columns
    pub const SUM: &str = "sql:sum";
    pub const DELETE: &str = "sql:delete";
    pub const UPDATE: &str = "sql:update";
    /// Row iteration
    pub const ROW: &str = "sql:row";
    /// Raw SQL string executed as is
    pub const RAW: &str = "sql:raw";
}

/// Attribute keys recorded on statement spans.
pub mod keys {
    pub use opentelemetry_semantic_conventions::attribute::{
        DB_COLLECTION_NAME, DB_NAMESPACE, DB_OPERATION_NAME, DB_QUERY_TEXT, DB_SYSTEM_NAME,
    };

    /// Rows affected by the statement, not part of the semantic conventions.
    pub const DB_ROWS_AFFECTED: &str = "db.rows_affected";
}

/// Name of the tracer obtained from a tracer provider.
pub const TRACER_NAME: &str = "sqlscope";
