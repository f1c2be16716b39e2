use crate::{
    Result, Value,
    writer::{Context, GenericLiteralWriter, LiteralWriter},
};
use regex::Regex;

/// Render `sql` with every placeholder replaced by the literal of its bound value.
///
/// Placeholders are `?` consumed in order, unless `placeholder` is given: then
/// every match of the pattern refers to the value at the 1-based index captured
/// by its first group (for example `@p(\d+)` or `\$(\d+)`). String-like
/// literals are wrapped in `quote`, which is doubled when it appears inside them.
///
/// Placeholders left without a value (too few positional values, an index that
/// is zero or out of range) are kept verbatim. An error is returned only when
/// a value conversion hook fails or the pattern has no capture group.
///
/// The output is meant for logs and traces, it must never be executed.
///
/// ```rust
/// use sqlscope_core::explain_sql;
/// let sql = explain_sql(
///     "SELECT * FROM users WHERE id = ? AND name = ?",
///     None,
///     '\'',
///     &[42i32.into(), "O'Hara".into()],
/// )
/// .unwrap();
/// assert_eq!(sql, "SELECT * FROM users WHERE id = 42 AND name = 'O''Hara'");
/// ```
pub fn explain_sql(
    sql: &str,
    placeholder: Option<&Regex>,
    quote: char,
    values: &[Value],
) -> Result<String> {
    const WRITER: GenericLiteralWriter = GenericLiteralWriter::new();
    let mut context = Context::new(quote);
    let mut out = String::new();
    WRITER.write_explained(&mut context, &mut out, sql, placeholder, values)?;
    Ok(out)
}
