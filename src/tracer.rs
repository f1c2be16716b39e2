use crate::{DbSystem, TraceOptions, db_operation, keys};
use opentelemetry::{
    KeyValue,
    global::BoxedSpan,
    trace::{Span, SpanKind, Status, Tracer},
};
use sqlscope_core::{Error, Value, explain_sql, truncate_long};

/// What happened when a statement ran.
#[derive(Default, Debug, Clone, Copy)]
pub struct QueryOutcome<'a> {
    pub driver_name: &'a str,
    pub table_name: &'a str,
    /// `None` when the driver does not report it.
    pub rows_affected: Option<i64>,
    /// Statement template and its bound values, `None` when nothing was executed.
    pub statement: Option<(&'a str, &'a [Value])>,
    pub error: Option<&'a Error>,
}

/// Starts client spans around executed statements.
#[derive(Debug, Clone, Default)]
pub struct QueryTracer {
    options: TraceOptions,
}

impl QueryTracer {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Statement text as it will be reported.
    ///
    /// Values are inlined unless disabled, when that fails the template is
    /// reported instead. The query formatter, if any, runs last.
    pub fn statement(&self, query: &str, values: &[Value]) -> String {
        let statement = if self.options.exclude_query_vars {
            query.to_owned()
        } else {
            explain_sql(
                query,
                self.options.placeholder.as_ref(),
                self.options.quote,
                values,
            )
            .unwrap_or_else(|e| {
                log::warn!(
                    "Could not inline the values of `{}`, reporting the template: {:#}",
                    truncate_long!(query),
                    e
                );
                query.to_owned()
            })
        };
        match &self.options.query_formatter {
            Some(formatter) => formatter(&statement),
            None => statement,
        }
    }

    /// `db.query.text` and `db.operation.name` of a statement.
    pub fn statement_attributes(&self, query: &str, values: &[Value]) -> [KeyValue; 2] {
        let statement = self.statement(query, values);
        let operation = db_operation(&statement);
        [
            KeyValue::new(keys::DB_QUERY_TEXT, statement),
            KeyValue::new(keys::DB_OPERATION_NAME, operation),
        ]
    }

    /// Start a client span named `span_name`, to be closed with [`QuerySpan::end`]
    /// once the statement completed.
    pub fn start(&self, span_name: &str) -> QuerySpan<'_> {
        let span = self
            .options
            .tracer
            .span_builder(span_name.to_owned())
            .with_kind(SpanKind::Client)
            .start(&*self.options.tracer);
        QuerySpan { tracer: self, span }
    }

    /// Record a statement that already completed, in a span of its own.
    pub fn finish(&self, span_name: &str, outcome: QueryOutcome<'_>) {
        self.start(span_name).end(outcome);
    }

    fn attributes(&self, outcome: &QueryOutcome<'_>) -> Vec<KeyValue> {
        let mut attributes = Vec::with_capacity(self.options.attributes.len() + 5);
        attributes.extend(self.options.attributes.iter().cloned());
        if let Some(system) = DbSystem::from_driver_name(outcome.driver_name) {
            attributes.push(KeyValue::new(keys::DB_SYSTEM_NAME, system.as_str()));
        }
        if let Some((query, values)) = outcome.statement {
            attributes.extend(self.statement_attributes(query, values));
        }
        if !outcome.table_name.is_empty() {
            attributes.push(KeyValue::new(
                keys::DB_COLLECTION_NAME,
                outcome.table_name.to_owned(),
            ));
        }
        if let Some(rows_affected) = outcome.rows_affected {
            attributes.push(KeyValue::new(keys::DB_ROWS_AFFECTED, rows_affected));
        }
        attributes
    }
}

/// Span of a running statement.
///
/// Dropping it without calling [`QuerySpan::end`] ends the span with no
/// database attributes.
pub struct QuerySpan<'a> {
    tracer: &'a QueryTracer,
    span: BoxedSpan,
}

impl QuerySpan<'_> {
    /// Whether the span is sampled, nothing is computed for it otherwise.
    pub fn is_recording(&self) -> bool {
        self.span.is_recording()
    }

    /// Attach the outcome of the statement and end the span.
    ///
    /// The status is `Ok` unless the outcome carries an error that the ignored
    /// error predicate does not match, that error is also recorded as an event.
    pub fn end(mut self, outcome: QueryOutcome<'_>) {
        if !self.span.is_recording() {
            return;
        }
        self.span.set_attributes(self.tracer.attributes(&outcome));
        match outcome.error {
            Some(e) if !(self.tracer.options.ignored_error)(e) => {
                self.span.record_error(&**e);
                self.span.set_status(Status::error(e.to_string()));
            }
            _ => self.span.set_status(Status::Ok),
        }
        self.span.end();
    }
}
