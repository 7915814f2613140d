use crate::constant::{ColumnFlags, ColumnType, SqlType};

#[test]
fn column_type_round_trips_every_tag() {
    let mut known = 0;
    for byte in 0..=u8::MAX {
        if let Some(column_type) = ColumnType::from_u8(byte) {
            assert_eq!(column_type as u8, byte);
            known += 1;
        }
    }
    assert_eq!(known, 32);
}

#[test]
fn column_flags_cover_all_bits() {
    assert_eq!(ColumnFlags::all().bits(), 0xFFFF);
}

#[test]
fn sql_type_codes() {
    assert_eq!(SqlType::Bit.code(), -7);
    assert_eq!(SqlType::Decimal.code(), 3);
    assert_eq!(SqlType::Timestamp.code(), 93);
    assert_eq!(SqlType::from_code(-4), Some(SqlType::LongVarBinary));
    assert_eq!(SqlType::from_code(42), None);
}

#[test]
fn decimal_family() {
    for sql_type in [
        SqlType::Bit,
        SqlType::TinyInt,
        SqlType::SmallInt,
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Float,
        SqlType::Real,
        SqlType::Double,
        SqlType::Numeric,
        SqlType::Decimal,
    ] {
        assert!(sql_type.is_decimal_family(), "{:?}", sql_type);
    }
    for sql_type in [SqlType::Char, SqlType::Date, SqlType::Boolean, SqlType::Null] {
        assert!(!sql_type.is_decimal_family(), "{:?}", sql_type);
    }
}
