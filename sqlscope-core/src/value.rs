use crate::Storable;
use rust_decimal::Decimal;
use std::{fmt::Display, sync::Arc};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Dynamically typed value bound to a statement placeholder.
///
/// Every typed variant carries an `Option`: `None` is a null reference of that
/// type (for example a missing timestamp) and renders exactly like [`Value::Null`].
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Int128(Option<i128>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    UInt128(Option<u128>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    /// Floating point number carried by a caller-defined type, rendered with a fixed precision.
    CustomFloat(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    /// Value producing its own representation, see [`Storable`].
    Storable(Option<Arc<dyn Storable>>),
    /// Anything else, already converted to its textual form.
    Unknown(Option<String>),
}

impl Value {
    /// Wrap a value implementing the conversion hook.
    pub fn storable(value: impl Storable + 'static) -> Self {
        Value::Storable(Some(Arc::new(value)))
    }

    /// Fallback for types without a dedicated variant, rendered verbatim.
    pub fn unknown(value: impl Display) -> Self {
        Value::Unknown(Some(value.to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(
            self,
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
                | Value::Unknown(None)
        )
    }

    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Int8(l), Self::Int8(r)) => l == r,
            (Self::Int16(l), Self::Int16(r)) => l == r,
            (Self::Int32(l), Self::Int32(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::Int128(l), Self::Int128(r)) => l == r,
            (Self::UInt8(l), Self::UInt8(r)) => l == r,
            (Self::UInt16(l), Self::UInt16(r)) => l == r,
            (Self::UInt32(l), Self::UInt32(r)) => l == r,
            (Self::UInt64(l), Self::UInt64(r)) => l == r,
            (Self::UInt128(l), Self::UInt128(r)) => l == r,
            (Self::Float32(l), Self::Float32(r)) => l == r,
            (Self::Float64(l), Self::Float64(r)) => l == r,
            (Self::CustomFloat(l), Self::CustomFloat(r)) => l == r,
            (Self::Decimal(l), Self::Decimal(r)) => l == r,
            (Self::Varchar(l), Self::Varchar(r)) => l == r,
            (Self::Blob(l), Self::Blob(r)) => l == r,
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            (Self::TimestampWithTimezone(l), Self::TimestampWithTimezone(r)) => l == r,
            (Self::Storable(Some(l)), Self::Storable(Some(r))) => Arc::ptr_eq(l, r),
            (Self::Unknown(l), Self::Unknown(r)) => l == r,
            _ => self.is_null() && other.is_null() && self.same_type(other),
        }
    }
}
