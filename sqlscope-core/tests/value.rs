#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlscope_core::{AsValue, Custom, Result, Storable, StoredValue, Value, newtype_value};
    use std::{borrow::Cow, sync::Arc};
    use time::{
        PrimitiveDateTime,
        macros::{datetime, offset},
    };
    use uuid::Uuid;

    #[derive(Debug)]
    struct Status(&'static str);

    impl Storable for Status {
        fn to_stored(&self) -> Result<StoredValue> {
            Ok(StoredValue::Text(self.0.to_uppercase()))
        }
    }

    struct Age(u16);
    newtype_value!(Age, u16);

    struct Nickname(String);
    newtype_value!(Nickname, String);

    struct Ratio(f32);
    newtype_value!(Ratio, f32);

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Timestamp(None), Value::Timestamp(None));
        assert_ne!(Value::Timestamp(None), Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(Value::Storable(None).is_null());
        assert!(!Value::Varchar(Some(String::new())).is_null());
        assert!(!Value::Boolean(Some(false)).is_null());
    }

    #[test]
    fn value_primitives() {
        assert_eq!(Value::from(true), Value::Boolean(Some(true)));
        assert_eq!(Value::from(-128i8), Value::Int8(Some(-128)));
        assert_eq!(Value::from(-32768i16), Value::Int16(Some(-32768)));
        assert_eq!(Value::from(7i32), Value::Int32(Some(7)));
        assert_eq!(Value::from(i64::MAX), Value::Int64(Some(i64::MAX)));
        assert_eq!(Value::from(i128::MIN), Value::Int128(Some(i128::MIN)));
        assert_eq!(Value::from(-3isize), Value::Int64(Some(-3)));
        assert_eq!(Value::from(255u8), Value::UInt8(Some(255)));
        assert_eq!(Value::from(65535u16), Value::UInt16(Some(65535)));
        assert_eq!(Value::from(1u32), Value::UInt32(Some(1)));
        assert_eq!(Value::from(u64::MAX), Value::UInt64(Some(u64::MAX)));
        assert_eq!(Value::from(u128::MAX), Value::UInt128(Some(u128::MAX)));
        assert_eq!(Value::from(12usize), Value::UInt64(Some(12)));
        assert_eq!(Value::from(0.5f32), Value::Float32(Some(0.5)));
        assert_eq!(Value::from(999.99f64), Value::Float64(Some(999.99)));
        assert_ne!(Value::from(1i32), Value::from(1i64));
        assert_eq!(
            Value::from(Decimal::new(12345, 2)),
            Value::Decimal(Some(Decimal::new(12345, 2)))
        );
    }

    #[test]
    fn value_text_and_bytes() {
        assert_eq!(Value::from("test"), Value::Varchar(Some("test".into())));
        assert_eq!(
            Value::from(String::from("test")),
            Value::Varchar(Some("test".into()))
        );
        assert_eq!(
            Value::from(Cow::Borrowed("cow")),
            Value::Varchar(Some("cow".into()))
        );
        let expected = Value::Blob(Some(b"12345".as_slice().into()));
        assert_eq!(Value::from(b"12345".as_slice()), expected);
        assert_eq!(Value::from(b"12345".to_vec()), expected);
        assert_eq!(Value::from(*b"12345"), expected);
        assert_ne!(Value::from("12345"), expected);
    }

    #[test]
    fn value_timestamps() {
        let tt = datetime!(2024-09-26 17:45:15);
        assert_eq!(Value::from(tt), Value::Timestamp(Some(tt)));
        assert_eq!(Value::from(Some(tt)), Value::Timestamp(Some(tt)));
        let missing: Option<PrimitiveDateTime> = None;
        let missing = Value::from(missing);
        assert_eq!(missing, Value::Timestamp(None));
        assert!(missing.is_null());
        let tz = tt.assume_offset(offset!(+2));
        assert_eq!(Value::from(tz), Value::TimestampWithTimezone(Some(tz)));
    }

    #[test]
    fn value_wrappers() {
        assert_eq!(Value::from(Box::new(5u8)), Value::UInt8(Some(5)));
        assert_eq!(Value::from(Arc::new(5u8)), Value::UInt8(Some(5)));
        let shared = Arc::new(String::from("shared"));
        let _other = shared.clone();
        assert_eq!(Value::from(shared), Value::Varchar(Some("shared".into())));
        assert_eq!(Value::from(None::<Box<bool>>), Value::Boolean(None));
        assert_eq!(Value::from(Some(Some(3i16))), Value::Int16(Some(3)));
    }

    #[test]
    fn value_newtypes() {
        assert_eq!(Age(40).as_value(), Value::UInt16(Some(40)));
        assert_eq!(Age::as_empty_value(), Value::UInt16(None));
        assert_eq!(
            Nickname("bob".into()).as_value(),
            Value::Varchar(Some("bob".into()))
        );
        assert_eq!(Ratio(0.5).as_value(), Value::CustomFloat(Some(0.5)));
        assert_eq!(Value::from(None::<Ratio>), Value::CustomFloat(None));
    }

    #[test]
    fn value_storable() {
        let value = Value::from(Custom(Status("active")));
        let Value::Storable(Some(ref hook)) = value else {
            panic!("Expected a storable value, got {value:?}");
        };
        assert_eq!(
            hook.to_stored().unwrap(),
            StoredValue::Text("ACTIVE".into())
        );
        assert_eq!(value, value.clone());
        assert_ne!(value, Value::storable(Status("active")));
        assert_eq!(Value::from(None::<Custom<Status>>), Value::Storable(None));
        assert!(Value::from(None::<Custom<Status>>).is_null());

        let boxed: Box<Status> = Box::new(Status("boxed"));
        assert_eq!(boxed.to_stored().unwrap(), StoredValue::Text("BOXED".into()));
        let absent: Option<Status> = None;
        assert_eq!(absent.to_stored().unwrap(), StoredValue::Null);

        let id = Uuid::from_u128(0x67e5504410b1426f9247bb680e5fe0c8);
        assert_eq!(
            id.to_stored().unwrap(),
            StoredValue::Text("67e55044-10b1-426f-9247-bb680e5fe0c8".into())
        );
        assert!(matches!(Value::from(id), Value::Storable(Some(..))));
        assert_eq!(Value::from(None::<Uuid>), Value::Storable(None));
    }

    #[test]
    fn value_from_stored() {
        let tt = datetime!(2024-09-26 17:45:15);
        assert_eq!(Value::from(StoredValue::Null), Value::Null);
        assert_eq!(
            Value::from(StoredValue::Bytes(b"{}".to_vec())),
            Value::Blob(Some(b"{}".as_slice().into()))
        );
        assert_eq!(
            Value::from(StoredValue::Text("a".into())),
            Value::Varchar(Some("a".into()))
        );
        assert_eq!(Value::from(StoredValue::Integer(-1)), Value::Int64(Some(-1)));
        assert_eq!(Value::from(StoredValue::Float(0.25)), Value::Float64(Some(0.25)));
        assert_eq!(Value::from(StoredValue::Boolean(true)), Value::Boolean(Some(true)));
        assert_eq!(Value::from(StoredValue::Timestamp(tt)), Value::Timestamp(Some(tt)));
    }

    #[test]
    fn value_unknown() {
        assert_eq!(
            Value::unknown(format_args!("ARRAY[{}, {}]", 1, 2)),
            Value::Unknown(Some("ARRAY[1, 2]".into()))
        );
        assert!(Value::Unknown(None).is_null());
    }
}
