use crate::{Result, Value};
use std::{fmt::Debug, sync::Arc};
use time::PrimitiveDateTime;
use uuid::Uuid;

/// Representation handed back by a [`Storable`] value.
///
/// A hook cannot return another hook, rendering the result recurses at most once.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(PrimitiveDateTime),
}

/// Value conversion hook.
///
/// Types that know how they are stored (JSON documents, identifiers, enums
/// mapped to strings) implement this instead of picking a [`Value`] variant
/// directly. The literal writer calls [`Storable::to_stored`] and then renders
/// the returned representation with its regular rules, an error aborts the
/// whole rendering.
///
/// ```rust
/// use sqlscope_core::{Result, Storable, StoredValue};
///
/// #[derive(Debug)]
/// struct Tags(Vec<&'static str>);
///
/// impl Storable for Tags {
///     fn to_stored(&self) -> Result<StoredValue> {
///         Ok(StoredValue::Text(self.0.join(",")))
///     }
/// }
/// ```
pub trait Storable: Debug + Send + Sync {
    fn to_stored(&self) -> Result<StoredValue>;
}

impl<T: Storable + ?Sized> Storable for Box<T> {
    fn to_stored(&self) -> Result<StoredValue> {
        (**self).to_stored()
    }
}

impl<T: Storable + ?Sized> Storable for Arc<T> {
    fn to_stored(&self) -> Result<StoredValue> {
        (**self).to_stored()
    }
}

impl<T: Storable> Storable for Option<T> {
    fn to_stored(&self) -> Result<StoredValue> {
        match self {
            Some(v) => v.to_stored(),
            None => Ok(StoredValue::Null),
        }
    }
}

impl Storable for Uuid {
    fn to_stored(&self) -> Result<StoredValue> {
        Ok(StoredValue::Text(self.hyphenated().to_string()))
    }
}

impl From<StoredValue> for Value {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Null => Value::Null,
            StoredValue::Bytes(v) => Value::Blob(Some(v.into_boxed_slice())),
            StoredValue::Text(v) => Value::Varchar(Some(v)),
            StoredValue::Integer(v) => Value::Int64(Some(v)),
            StoredValue::Float(v) => Value::Float64(Some(v)),
            StoredValue::Boolean(v) => Value::Boolean(Some(v)),
            StoredValue::Timestamp(v) => Value::Timestamp(Some(v)),
        }
    }
}
