//! Readable SQL for traces.
//!
//! [`explain_sql`] inlines the bound values of a statement into its text, the
//! [`QueryTracer`] wraps executed statements in OpenTelemetry client spans
//! carrying that text as `db.query.text` together with the other database
//! attributes.
//!
//! ```rust
//! use sqlscope::{QueryOutcome, QueryTracer, TraceOptions, Value, span_name};
//!
//! let tracer = QueryTracer::new(TraceOptions::default().with_db_name("shop"));
//! let values = vec![Value::from("O'Hara"), Value::from(3i32)];
//! let query = "SELECT * FROM customer WHERE name = ? LIMIT ?";
//! let [statement, operation] = tracer.statement_attributes(query, &values);
//! assert_eq!(
//!     statement.value.as_str(),
//!     "SELECT * FROM customer WHERE name = 'O''Hara' LIMIT 3",
//! );
//! assert_eq!(operation.value.as_str(), "select");
//!
//! let span = tracer.start(span_name::QUERY);
//! span.end(QueryOutcome {
//!     driver_name: "postgres",
//!     statement: Some((query, values.as_slice())),
//!     ..Default::default()
//! });
//! ```
mod operation;
mod options;
mod span;
mod tracer;

pub use operation::*;
pub use options::*;
pub use span::*;
pub use sqlscope_core::*;
pub use tracer::*;
