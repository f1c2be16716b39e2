use crate::{Error, Result, Storable, Value, truncate_long, writer::Context};
use anyhow::Context as _;
use atoi::FromRadix10Checked;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt::Write;
use time::{OffsetDateTime, PrimitiveDateTime};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $context:ident, $out:ident, $value:expr) => {{
        let value = $value;
        if value.is_infinite() {
            $this.write_value_infinity($context, $out, value.is_sign_negative());
        } else if value.is_nan() {
            $this.write_value_nan($context, $out);
        } else {
            let mut buffer = ryu::Buffer::new();
            let printed = buffer.format_finite(value);
            if printed.contains('e') {
                // Positional notation, still the shortest digits that round trip
                let _ = write!($out, "{}", value);
            } else {
                $out.push_str(printed.strip_suffix(".0").unwrap_or(printed));
            }
        }
    }};
}

/// Printer turning bound values into SQL literals and inlining them into a
/// statement template.
///
/// Every rendering step is a default method, a dialect overrides only the ones
/// it needs (for example the positional placeholder character).
pub trait LiteralWriter {
    /// Character standing for a positional placeholder.
    fn positional_placeholder(&self) -> char {
        '?'
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Render a concrete value, the only failure is a conversion hook returning an error.
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) -> Result<()> {
        match value {
            Value::Null
            | Value::Boolean(None)
            | Value::Int8(None)
            | Value::Int16(None)
            | Value::Int32(None)
            | Value::Int64(None)
            | Value::Int128(None)
            | Value::UInt8(None)
            | Value::UInt16(None)
            | Value::UInt32(None)
            | Value::UInt64(None)
            | Value::UInt128(None)
            | Value::Float32(None)
            | Value::Float64(None)
            | Value::CustomFloat(None)
            | Value::Decimal(None)
            | Value::Varchar(None)
            | Value::Blob(None)
            | Value::Timestamp(None)
            | Value::TimestampWithTimezone(None)
            | Value::Storable(None)
            | Value::Unknown(None) => self.write_value_none(context, out),
            Value::Boolean(Some(v)) => self.write_value_bool(context, out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Int128(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::UInt128(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, context, out, *v),
            Value::Float64(Some(v)) => write_float!(self, context, out, *v),
            Value::CustomFloat(Some(v)) => self.write_value_custom_float(context, out, *v),
            Value::Decimal(Some(v)) => self.write_value_decimal(context, out, v),
            Value::Varchar(Some(v)) => self.write_value_string(context, out, v),
            Value::Blob(Some(v)) => self.write_value_blob(context, out, v),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(context, out, v),
            Value::TimestampWithTimezone(Some(v)) => {
                self.write_value_timestamptz(context, out, v)
            }
            Value::Storable(Some(v)) => self.write_value_storable(context, out, &**v)?,
            Value::Unknown(Some(v)) => self.write_value_unknown(context, out, v),
        };
        Ok(())
    }

    /// Render NULL literal.
    fn write_value_none(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render a float coming from a caller-defined type, always six decimal digits.
    fn write_value_custom_float(&self, context: &mut Context, out: &mut String, value: f64) {
        if value.is_infinite() {
            self.write_value_infinity(context, out, value.is_sign_negative());
        } else if value.is_nan() {
            self.write_value_nan(context, out);
        } else {
            let _ = write!(out, "{:.6}", value);
        }
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut String, negative: bool) {
        out.push_str(if negative { "-Infinity" } else { "Infinity" });
    }

    fn write_value_nan(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NaN");
    }

    fn write_value_decimal(&self, _context: &mut Context, out: &mut String, value: &Decimal) {
        let _ = write!(out, "{}", value);
    }

    /// Render a string literal, wrapped in the context quote which is doubled inside.
    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        let quote = context.quote;
        let escaped: String = [quote, quote].into_iter().collect();
        out.push(quote);
        self.write_escaped(context, out, value, quote, &escaped);
        out.push(quote);
    }

    /// Render a blob literal, the bytes are written as text.
    fn write_value_blob(&self, context: &mut Context, out: &mut String, value: &[u8]) {
        self.write_value_string(context, out, &String::from_utf8_lossy(value));
    }

    /// Render a TIMESTAMP literal with second precision.
    fn write_value_timestamp(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &PrimitiveDateTime,
    ) {
        let mut text = String::with_capacity(19);
        let _ = write!(
            text,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            value.year(),
            value.month() as u8,
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        );
        self.write_value_string(context, out, &text);
    }

    /// Render a TIMESTAMPTZ literal using the wall clock of its own offset.
    fn write_value_timestamptz(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &OffsetDateTime,
    ) {
        self.write_value_timestamp(
            context,
            out,
            &PrimitiveDateTime::new(value.date(), value.time()),
        );
    }

    /// Run the conversion hook and render what it returns.
    fn write_value_storable(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &dyn Storable,
    ) -> Result<()> {
        let stored = value
            .to_stored()
            .with_context(|| format!("The value conversion of {:?} failed", value))?;
        self.write_value(context, out, &Value::from(stored))
    }

    fn write_value_unknown(&self, _context: &mut Context, out: &mut String, value: &str) {
        out.push_str(value);
    }

    /// Literal text of a single value.
    fn literal(&self, context: &mut Context, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write_value(context, &mut out, value)?;
        Ok(out)
    }

    /// Inline `values` into `sql`.
    ///
    /// Without `placeholder` every occurrence of [`LiteralWriter::positional_placeholder`]
    /// takes the next value. With it, each match takes the value at the 1-based
    /// index found in its first capture group. Placeholders without a matching
    /// value stay as they are. Nothing is written when a value fails to render.
    fn write_explained(
        &self,
        context: &mut Context,
        out: &mut String,
        sql: &str,
        placeholder: Option<&Regex>,
        values: &[Value],
    ) -> Result<()> {
        if let Some(pattern) = placeholder {
            if pattern.captures_len() < 2 {
                return Err(Error::msg(format!(
                    "The placeholder pattern `{}` must capture the parameter index in a group",
                    pattern.as_str()
                )));
            }
        }
        let literals = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                self.literal(context, v).with_context(|| {
                    format!(
                        "Cannot render the value bound at position {} of `{}`",
                        i + 1,
                        truncate_long!(sql)
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        out.reserve(sql.len() + literals.iter().map(String::len).sum::<usize>());
        match placeholder {
            Some(pattern) => self.write_indexed(context, out, sql, pattern, &literals),
            None => self.write_positional(context, out, sql, &literals),
        }
        Ok(())
    }

    /// Substitute positional placeholders in order of appearance.
    fn write_positional(
        &self,
        context: &mut Context,
        out: &mut String,
        sql: &str,
        literals: &[String],
    ) {
        let placeholder = self.positional_placeholder();
        let mut literals = literals.iter();
        let mut position = 0;
        for (i, c) in sql.char_indices() {
            if c != placeholder {
                continue;
            }
            let Some(literal) = literals.next() else {
                log::debug!(
                    "Only {} values are bound, the remaining placeholders are kept in `{}`",
                    context.counter,
                    truncate_long!(sql)
                );
                break;
            };
            out.push_str(&sql[position..i]);
            out.push_str(literal);
            position = i + c.len_utf8();
            context.counter += 1;
        }
        out.push_str(&sql[position..]);
    }

    /// Substitute numbered placeholders matched by `pattern`.
    fn write_indexed(
        &self,
        context: &mut Context,
        out: &mut String,
        sql: &str,
        pattern: &Regex,
        literals: &[String],
    ) {
        let mut position = 0;
        for captures in pattern.captures_iter(sql) {
            let Some(matched) = captures.get(0) else {
                continue;
            };
            let index = captures
                .get(1)
                .and_then(|v| self.placeholder_index(v.as_str(), literals.len()));
            let Some(index) = index else {
                log::debug!(
                    "Placeholder `{}` does not refer to any of the {} bound values",
                    matched.as_str(),
                    literals.len()
                );
                continue;
            };
            out.push_str(&sql[position..matched.start()]);
            out.push_str(&literals[index]);
            position = matched.end();
            context.counter += 1;
        }
        out.push_str(&sql[position..]);
    }

    /// Zero-based position referenced by a captured 1-based index, if it is in range.
    fn placeholder_index(&self, captured: &str, len: usize) -> Option<usize> {
        let (index, used) = usize::from_radix_10_checked(captured.as_bytes());
        match index {
            Some(index) if used > 0 && used == captured.len() && (1..=len).contains(&index) => {
                Some(index - 1)
            }
            _ => None,
        }
    }
}

/// Stock [`LiteralWriter`], quoting and placeholder rules with no dialect overrides.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericLiteralWriter {}

impl GenericLiteralWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl LiteralWriter for GenericLiteralWriter {}
