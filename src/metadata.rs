//! Introspection over the columns of a result set
//!
//! Every per-column query takes a 1-based column index and fails with
//! [`Error::OutOfRange`] when it falls outside `1..=column_count()`.

use crate::col::Field;
use crate::constant::{ColumnType, SqlType};
use crate::error::{Error, Result};

/// Whether a column may hold NULL
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    NoNulls = 0,
    Nullable = 1,
    Unknown = 2,
}

impl Nullability {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The kind of value a client should decode a column into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Decimal,
    F32,
    F64,
    String,
    Bytes,
    Date,
    Time,
    Timestamp,
    /// No specific class; decode as a generic value
    Value,
}

impl ColumnClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Decimal => "decimal",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Value => "value",
        }
    }
}

/// Column metadata of a result set, borrowed from its field descriptors
#[derive(Debug, Clone, Copy)]
pub struct ResultSetMetadata<'a> {
    fields: &'a [Field],
}

impl<'a> ResultSetMetadata<'a> {
    pub fn new(fields: &'a [Field]) -> Self {
        Self { fields }
    }

    fn field(&self, column: usize) -> Result<&'a Field> {
        let count = self.fields.len();
        match column.checked_sub(1).and_then(|i| self.fields.get(i)) {
            Some(field) => Ok(field),
            None => {
                tracing::debug!(column, count, "column index out of range");
                Err(Error::OutOfRange { column, count })
            }
        }
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    /// Always false: AUTO_INCREMENT columns accept explicit values, so they are not read-only
    pub fn is_auto_increment(&self, column: usize) -> Result<bool> {
        self.field(column)?;
        Ok(false)
    }

    /// Anything not obviously case-insensitive is reported as case-sensitive
    pub fn is_case_sensitive(&self, column: usize) -> Result<bool> {
        let sql_type = self.field(column)?.sql_type();
        Ok(!matches!(
            sql_type,
            SqlType::Bit
                | SqlType::TinyInt
                | SqlType::SmallInt
                | SqlType::Integer
                | SqlType::BigInt
                | SqlType::Float
                | SqlType::Real
                | SqlType::Double
                | SqlType::Date
                | SqlType::Time
                | SqlType::Timestamp
        ))
    }

    /// MySQL has no catalogs in the SQL-standard sense
    pub fn catalog_name(&self, column: usize) -> Result<&'a str> {
        self.field(column)?;
        Ok("")
    }

    pub fn schema_name(&self, column: usize) -> Result<&'a str> {
        self.field(column)?;
        Ok("")
    }

    pub fn column_class(&self, column: usize) -> Result<ColumnClass> {
        let field = self.field(column)?;
        let unsigned = field.is_unsigned();
        let class = match field.sql_type() {
            SqlType::Bit => ColumnClass::Bool,
            SqlType::TinyInt if unsigned => ColumnClass::I16,
            SqlType::TinyInt => ColumnClass::I8,
            SqlType::SmallInt if unsigned => ColumnClass::I32,
            SqlType::SmallInt => ColumnClass::I16,
            SqlType::Integer if unsigned => ColumnClass::I64,
            SqlType::Integer => ColumnClass::I32,
            SqlType::BigInt => ColumnClass::I64,
            SqlType::Decimal | SqlType::Numeric => ColumnClass::Decimal,
            SqlType::Real | SqlType::Float => ColumnClass::F32,
            SqlType::Double => ColumnClass::F64,
            SqlType::Char | SqlType::VarChar | SqlType::LongVarChar => ColumnClass::String,
            SqlType::Binary | SqlType::VarBinary | SqlType::LongVarBinary => {
                if field.is_blob() && field.is_binary() {
                    ColumnClass::Bytes
                } else {
                    ColumnClass::String
                }
            }
            SqlType::Date => ColumnClass::Date,
            SqlType::Time => ColumnClass::Time,
            SqlType::Timestamp => ColumnClass::Timestamp,
            SqlType::Null | SqlType::Other | SqlType::Boolean => ColumnClass::Value,
        };
        Ok(class)
    }

    pub fn column_display_size(&self, column: usize) -> Result<u32> {
        Ok(self.field(column)?.length())
    }

    /// There is no separate label; this is the column name
    pub fn column_label(&self, column: usize) -> Result<&'a str> {
        self.column_name(column)
    }

    pub fn column_name(&self, column: usize) -> Result<&'a str> {
        Ok(self.field(column)?.name())
    }

    pub fn table_name(&self, column: usize) -> Result<&'a str> {
        Ok(self.field(column)?.table())
    }

    pub fn column_type(&self, column: usize) -> Result<SqlType> {
        Ok(self.field(column)?.sql_type())
    }

    /// Name of the raw MySQL type, not of the SQL type
    pub fn column_type_name(&self, column: usize) -> Result<&'static str> {
        let field = self.field(column)?;
        Ok(type_name(field.raw_type(), field.is_binary()))
    }

    pub fn is_currency(&self, column: usize) -> Result<bool> {
        self.field(column)?;
        Ok(false)
    }

    pub fn is_definitely_writable(&self, column: usize) -> Result<bool> {
        self.is_writable(column)
    }

    pub fn is_nullable(&self, column: usize) -> Result<Nullability> {
        if self.field(column)?.is_not_null() {
            Ok(Nullability::NoNulls)
        } else {
            Ok(Nullability::Nullable)
        }
    }

    /// Number of digits for numeric columns, 0 for everything else
    ///
    /// The declared length of a column with a fractional part includes the decimal point.
    pub fn precision(&self, column: usize) -> Result<u32> {
        let field = self.field(column)?;
        if !field.sql_type().is_decimal_family() {
            return Ok(0);
        }
        if field.decimals() > 0 {
            Ok(field.length().saturating_sub(1))
        } else {
            Ok(field.length())
        }
    }

    pub fn is_read_only(&self, column: usize) -> Result<bool> {
        self.field(column)?;
        Ok(false)
    }

    /// Digits right of the decimal point for numeric columns, 0 for everything else
    pub fn scale(&self, column: usize) -> Result<u32> {
        let field = self.field(column)?;
        if field.sql_type().is_decimal_family() {
            Ok(u32::from(field.decimals()))
        } else {
            Ok(0)
        }
    }

    pub fn is_searchable(&self, column: usize) -> Result<bool> {
        self.field(column)?;
        Ok(true)
    }

    pub fn is_signed(&self, column: usize) -> Result<bool> {
        let field = self.field(column)?;
        match field.sql_type() {
            SqlType::TinyInt
            | SqlType::SmallInt
            | SqlType::Integer
            | SqlType::BigInt
            | SqlType::Float
            | SqlType::Real
            | SqlType::Double
            | SqlType::Numeric
            | SqlType::Decimal => Ok(!field.is_unsigned()),
            _ => Ok(false),
        }
    }

    pub fn is_writable(&self, column: usize) -> Result<bool> {
        Ok(!self.is_read_only(column)?)
    }
}

/// Display name of a raw MySQL column type
///
/// The blob tag is shared by BLOB and TEXT columns; `binary` selects between them.
/// Tags missing from the table, including ones this crate does not know, are "UNKNOWN".
pub fn type_name(raw_type: u8, binary: bool) -> &'static str {
    match ColumnType::from_u8(raw_type) {
        Some(ColumnType::MYSQL_TYPE_DECIMAL) => "DECIMAL",
        Some(ColumnType::MYSQL_TYPE_TINY) => "TINY",
        Some(ColumnType::MYSQL_TYPE_SHORT) => "SHORT",
        Some(ColumnType::MYSQL_TYPE_LONG) => "LONG",
        Some(ColumnType::MYSQL_TYPE_FLOAT) => "FLOAT",
        Some(ColumnType::MYSQL_TYPE_DOUBLE) => "DOUBLE",
        Some(ColumnType::MYSQL_TYPE_NULL) => "NULL",
        Some(ColumnType::MYSQL_TYPE_TIMESTAMP) => "TIMESTAMP",
        Some(ColumnType::MYSQL_TYPE_LONGLONG) => "LONGLONG",
        Some(ColumnType::MYSQL_TYPE_INT24) => "INT",
        Some(ColumnType::MYSQL_TYPE_DATE) => "DATE",
        Some(ColumnType::MYSQL_TYPE_TIME) => "TIME",
        Some(ColumnType::MYSQL_TYPE_DATETIME) => "DATETIME",
        Some(ColumnType::MYSQL_TYPE_TINY_BLOB) => "TINYBLOB",
        Some(ColumnType::MYSQL_TYPE_MEDIUM_BLOB) => "MEDIUMBLOB",
        Some(ColumnType::MYSQL_TYPE_LONG_BLOB) => "LONGBLOB",
        Some(ColumnType::MYSQL_TYPE_BLOB) if binary => "TEXT",
        Some(ColumnType::MYSQL_TYPE_BLOB) => "BLOB",
        Some(ColumnType::MYSQL_TYPE_VAR_STRING) => "VARCHAR",
        Some(ColumnType::MYSQL_TYPE_STRING) => "CHAR",
        Some(ColumnType::MYSQL_TYPE_ENUM) => "ENUM",
        Some(ColumnType::MYSQL_TYPE_SET) => "SET",
        _ => "UNKNOWN",
    }
}
