use crate::{TRACER_NAME, keys};
use opentelemetry::{
    KeyValue, global,
    global::BoxedTracer,
    trace::{Span, Tracer, TracerProvider},
};
use regex::Regex;
use sqlscope_core::Error;
use std::{
    error, fmt,
    io::{self, ErrorKind},
    sync::Arc,
};

/// Error signaling that a query matched no row, not reported as a span failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoRows;

impl fmt::Display for NoRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no rows in result set")
    }
}

impl error::Error for NoRows {}

/// Errors that only mark the end of a result.
///
/// Only [`NoRows`] and an [`io::Error`] of kind [`ErrorKind::UnexpectedEof`]
/// are recognized. Other benign driver errors (a skipped statement, a missing
/// record reported as an error) need a predicate passed to
/// [`TraceOptions::with_ignored_error`].
pub fn is_end_of_rows(error: &Error) -> bool {
    error.downcast_ref::<NoRows>().is_some()
        || error
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == ErrorKind::UnexpectedEof)
}

/// How statements are turned into spans.
///
/// `TraceOptions::default()` inlines the bound values with `?` placeholders
/// and single quotes, and starts spans from the global tracer provider.
#[derive(Clone)]
pub struct TraceOptions {
    pub(crate) tracer: Arc<BoxedTracer>,
    pub(crate) attributes: Vec<KeyValue>,
    pub(crate) exclude_query_vars: bool,
    pub(crate) query_formatter: Option<Arc<dyn Fn(&str) -> String + Send + Sync>>,
    pub(crate) quote: char,
    pub(crate) placeholder: Option<Regex>,
    pub(crate) ignored_error: Arc<dyn Fn(&Error) -> bool + Send + Sync>,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            tracer: Arc::new(global::tracer(TRACER_NAME)),
            attributes: Vec::new(),
            exclude_query_vars: false,
            query_formatter: None,
            quote: '\'',
            placeholder: None,
            ignored_error: Arc::new(is_end_of_rows),
        }
    }
}

impl fmt::Debug for TraceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceOptions")
            .field("attributes", &self.attributes)
            .field("exclude_query_vars", &self.exclude_query_vars)
            .field("query_formatter", &self.query_formatter.is_some())
            .field("quote", &self.quote)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl TraceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the spans from the `sqlscope` tracer of `provider`.
    pub fn with_tracer_provider<P, T, S>(self, provider: &P) -> Self
    where
        P: TracerProvider<Tracer = T>,
        T: Tracer<Span = S> + Send + Sync + 'static,
        S: Span + Send + Sync + 'static,
    {
        self.with_tracer(provider.tracer(TRACER_NAME))
    }

    /// Start the spans from `tracer`.
    pub fn with_tracer<T, S>(mut self, tracer: T) -> Self
    where
        T: Tracer<Span = S> + Send + Sync + 'static,
        S: Span + Send + Sync + 'static,
    {
        self.tracer = Arc::new(BoxedTracer::new(Box::new(tracer)));
        self
    }

    /// Attributes added to every span.
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = KeyValue>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Reports `db.system.name` as the given driver name.
    pub fn with_driver_name(self, driver_name: impl Into<String>) -> Self {
        self.with_attributes([KeyValue::new(keys::DB_SYSTEM_NAME, driver_name.into())])
    }

    pub fn with_db_name(self, name: impl Into<String>) -> Self {
        self.with_attributes([KeyValue::new(keys::DB_NAMESPACE, name.into())])
    }

    pub fn with_table_name(self, name: impl Into<String>) -> Self {
        self.with_attributes([KeyValue::new(keys::DB_COLLECTION_NAME, name.into())])
    }

    /// Report the statement as written, without inlining the bound values.
    pub fn without_query_variables(mut self) -> Self {
        self.exclude_query_vars = true;
        self
    }

    /// Rewrites the statement before it is reported.
    pub fn with_query_formatter(
        mut self,
        formatter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.query_formatter = Some(Arc::new(formatter));
        self
    }

    /// Delimiter of the inlined string literals.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Numbered placeholders (like `\$(\d+)`) instead of positional `?`.
    pub fn with_placeholder(mut self, placeholder: Regex) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Errors matching `predicate` leave the span status `Ok`.
    pub fn with_ignored_error(
        mut self,
        predicate: impl Fn(&Error) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.ignored_error = Arc::new(predicate);
        self
    }
}
