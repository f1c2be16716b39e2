use crate::{Storable, Value};
use rust_decimal::Decimal;
use std::{borrow::Cow, sync::Arc};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

/// Conversion of native Rust types into the dynamically typed [`Value`] bound
/// to a placeholder.
///
/// Caller-defined newtypes usually delegate to the wrapped type, the
/// [`newtype_value!`](crate::newtype_value) macro does that for them.
///
/// # Examples
/// ```rust
/// use sqlscope_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// assert!(None::<i32>.as_value().is_null());
/// ```
pub trait AsValue {
    /// The null variant for this type, used for absent optional data.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self as _))
            }
        }
    };
    ($source:ty, $destination:path, $convert:expr) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some($convert(self)))
            }
        }
    };
}
impl_as_value!(bool, Value::Boolean);
impl_as_value!(i8, Value::Int8);
impl_as_value!(i16, Value::Int16);
impl_as_value!(i32, Value::Int32);
impl_as_value!(i64, Value::Int64);
impl_as_value!(i128, Value::Int128);
impl_as_value!(isize, Value::Int64);
impl_as_value!(u8, Value::UInt8);
impl_as_value!(u16, Value::UInt16);
impl_as_value!(u32, Value::UInt32);
impl_as_value!(u64, Value::UInt64);
impl_as_value!(u128, Value::UInt128);
impl_as_value!(usize, Value::UInt64);
impl_as_value!(f32, Value::Float32);
impl_as_value!(f64, Value::Float64);
impl_as_value!(Decimal, Value::Decimal, |v| v);
impl_as_value!(String, Value::Varchar, |v| v);
impl_as_value!(&str, Value::Varchar, ToOwned::to_owned);
impl_as_value!(Cow<'_, str>, Value::Varchar, Cow::into_owned);
impl_as_value!(Box<[u8]>, Value::Blob, |v| v);
impl_as_value!(Vec<u8>, Value::Blob, Vec::into_boxed_slice);
impl_as_value!(&[u8], Value::Blob, Into::into);
impl_as_value!(PrimitiveDateTime, Value::Timestamp, |v| v);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone, |v| v);

impl<const N: usize> AsValue for [u8; N] {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into()))
    }
}

impl AsValue for Uuid {
    fn as_empty_value() -> Value {
        Value::Storable(None)
    }
    fn as_value(self) -> Value {
        Value::storable(self)
    }
}

/// Binds a [`Storable`] type so that its conversion hook decides the literal.
///
/// ```rust
/// use sqlscope_core::{Custom, Value};
/// use uuid::Uuid;
/// let id: Value = Custom(Uuid::nil()).into();
/// let missing: Value = None::<Custom<Uuid>>.into();
/// assert!(missing.is_null());
/// # let _ = id;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Custom<T>(pub T);

impl<T: Storable + 'static> AsValue for Custom<T> {
    fn as_empty_value() -> Value {
        Value::Storable(None)
    }
    fn as_value(self) -> Value {
        Value::Storable(Some(Arc::new(self.0)))
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
}

impl<T: AsValue + Clone> AsValue for Arc<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        Arc::try_unwrap(self)
            .unwrap_or_else(|v| v.as_ref().clone())
            .as_value()
    }
}

/// Implements [`AsValue`] for a caller-defined newtype by delegating to the
/// wrapped type.
///
/// Newtypes over `f32` or `f64` become [`Value::CustomFloat`], which renders
/// with six decimal digits instead of the shortest representation.
///
/// ```rust
/// use sqlscope_core::{AsValue, Value, newtype_value};
///
/// struct Role(String);
/// struct Weight(f64);
/// newtype_value!(Role, String);
/// newtype_value!(Weight, f64);
///
/// assert_eq!(Weight(1.5).as_value(), Value::CustomFloat(Some(1.5)));
/// assert_eq!(Role("admin".into()).as_value(), Value::Varchar(Some("admin".into())));
/// ```
#[macro_export]
macro_rules! newtype_value {
    ($name:ty, f32) => {
        impl $crate::AsValue for $name {
            fn as_empty_value() -> $crate::Value {
                $crate::Value::CustomFloat(None)
            }
            fn as_value(self) -> $crate::Value {
                $crate::Value::CustomFloat(Some(self.0 as f64))
            }
        }
    };
    ($name:ty, f64) => {
        impl $crate::AsValue for $name {
            fn as_empty_value() -> $crate::Value {
                $crate::Value::CustomFloat(None)
            }
            fn as_value(self) -> $crate::Value {
                $crate::Value::CustomFloat(Some(self.0))
            }
        }
    };
    ($name:ty, $inner:ty) => {
        impl $crate::AsValue for $name {
            fn as_empty_value() -> $crate::Value {
                <$inner as $crate::AsValue>::as_empty_value()
            }
            fn as_value(self) -> $crate::Value {
                <$inner as $crate::AsValue>::as_value(self.0)
            }
        }
    };
}
