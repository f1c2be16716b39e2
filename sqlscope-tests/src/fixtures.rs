use serde::Serialize;
use sqlscope_core::{Error, Result, Storable, StoredValue, newtype_value};
use time::{PrimitiveDateTime, macros::datetime};

/// Raw JSON document, stored as its bytes and as NULL when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json(pub Vec<u8>);

impl Storable for Json {
    fn to_stored(&self) -> Result<StoredValue> {
        if self.0.is_empty() {
            return Ok(StoredValue::Null);
        }
        Ok(StoredValue::Bytes(self.0.clone()))
    }
}

/// Struct stored as its JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExampleStruct {
    pub name: String,
    pub val: String,
}

impl Storable for ExampleStruct {
    fn to_stored(&self) -> Result<StoredValue> {
        Ok(StoredValue::Bytes(serde_json::to_vec(self)?))
    }
}

/// Hook that always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broken;

impl Storable for Broken {
    fn to_stored(&self) -> Result<StoredValue> {
        Err(Error::msg("the connection to the vault is closed"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(pub String);
newtype_value!(Role, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(pub Vec<u8>);
newtype_value!(Password, Vec<u8>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntType(pub i64);
newtype_value!(IntType, i64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatType(pub f64);
newtype_value!(FloatType, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallFloatType(pub f32);
newtype_value!(SmallFloatType, f32);

pub const JSON_PAYLOAD: &str = r#"{"Name":"test","Val":"test"}"#;

pub fn json() -> Json {
    Json(JSON_PAYLOAD.as_bytes().to_vec())
}

pub fn example_struct() -> ExampleStruct {
    ExampleStruct {
        name: "test".into(),
        val: "test".into(),
    }
}

pub fn timestamp() -> PrimitiveDateTime {
    datetime!(2024-09-26 17:45:15)
}

/// Wraps `value` in the quote, doubling the quotes inside.
pub fn quoted(value: &str, quote: char) -> String {
    let doubled: String = [quote, quote].into_iter().collect();
    format!("{quote}{}{quote}", value.replace(quote, &doubled))
}
