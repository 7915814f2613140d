use simdutf8::basic::from_utf8;

use crate::Opts;
use crate::constant::{ColumnFlags, ColumnType, SqlType};
use crate::error::{Error, Result};
use crate::protocol::command::ColumnDefinition;

/// Owned descriptor of one result-set column
///
/// Immutable once built. The standard SQL type is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    table: String,
    name: String,
    raw_type: u8,
    sql_type: SqlType,
    flags: ColumnFlags,
    length: u32,
    decimals: u8,
}

impl Field {
    /// Build a descriptor, deriving the SQL type from the raw type and flags
    pub fn new(
        table: impl Into<String>,
        name: impl Into<String>,
        column_type: ColumnType,
        flags: ColumnFlags,
        length: u32,
        decimals: u8,
        opts: &Opts,
    ) -> Self {
        Self::with_raw_type(table, name, column_type as u8, flags, length, decimals, opts)
    }

    /// Like [`Field::new`], but accepts type bytes outside [`ColumnType`]
    ///
    /// Unknown tags are reported as [`SqlType::Other`].
    pub fn with_raw_type(
        table: impl Into<String>,
        name: impl Into<String>,
        raw_type: u8,
        flags: ColumnFlags,
        length: u32,
        decimals: u8,
        opts: &Opts,
    ) -> Self {
        let sql_type = match ColumnType::from_u8(raw_type) {
            Some(column_type) => sql_type_of(column_type, flags, length, opts),
            None => {
                tracing::debug!(raw_type, "unknown column type");
                SqlType::Other
            }
        };
        Self {
            table: table.into(),
            name: name.into(),
            raw_type,
            sql_type,
            flags,
            length,
            decimals,
        }
    }

    /// Build a descriptor whose SQL type was already decided elsewhere
    pub fn with_sql_type(
        table: impl Into<String>,
        name: impl Into<String>,
        column_type: ColumnType,
        sql_type: SqlType,
        flags: ColumnFlags,
        length: u32,
        decimals: u8,
    ) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            raw_type: column_type as u8,
            sql_type,
            flags,
            length,
            decimals,
        }
    }

    /// Copy a column definition out of its packet
    ///
    /// Table and column names are the aliases the query assigned, which is what clients display.
    #[tracing::instrument(skip_all)]
    pub fn try_from_definition(def: &ColumnDefinition<'_>, opts: &Opts) -> Result<Self> {
        let table = from_utf8(def.table_alias).map_err(|_| Error::InvalidPacket)?;
        let name = from_utf8(def.name_alias).map_err(|_| Error::InvalidPacket)?;
        let tail = def.tail;
        Ok(Self::with_raw_type(
            table,
            name,
            tail.raw_column_type(),
            tail.flags(),
            tail.column_length(),
            tail.decimals(),
            opts,
        ))
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when the server sent a tag this crate does not know
    pub fn column_type(&self) -> Option<ColumnType> {
        ColumnType::from_u8(self.raw_type)
    }

    pub fn raw_type(&self) -> u8 {
        self.raw_type
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn flags(&self) -> ColumnFlags {
        self.flags
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_unsigned(&self) -> bool {
        self.flags.contains(ColumnFlags::UNSIGNED_FLAG)
    }

    pub fn is_not_null(&self) -> bool {
        self.flags.contains(ColumnFlags::NOT_NULL_FLAG)
    }

    pub fn is_binary(&self) -> bool {
        self.flags.contains(ColumnFlags::BINARY_FLAG)
    }

    pub fn is_blob(&self) -> bool {
        self.flags.contains(ColumnFlags::BLOB_FLAG)
    }
}

/// Map a raw MySQL type onto the portable SQL type reported to clients
pub fn sql_type_of(
    column_type: ColumnType,
    flags: ColumnFlags,
    length: u32,
    opts: &Opts,
) -> SqlType {
    // TEXT columns travel as blobs without the binary flag
    if column_type.is_blob_family() && !flags.contains(ColumnFlags::BINARY_FLAG) {
        return match column_type {
            ColumnType::MYSQL_TYPE_TINY_BLOB => SqlType::VarChar,
            _ => SqlType::LongVarChar,
        };
    }

    match column_type {
        ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => SqlType::Decimal,
        ColumnType::MYSQL_TYPE_TINY if opts.tiny_int1_is_bit && length == 1 => SqlType::Bit,
        ColumnType::MYSQL_TYPE_TINY => SqlType::TinyInt,
        ColumnType::MYSQL_TYPE_SHORT => SqlType::SmallInt,
        ColumnType::MYSQL_TYPE_LONG | ColumnType::MYSQL_TYPE_INT24 => SqlType::Integer,
        ColumnType::MYSQL_TYPE_LONGLONG => SqlType::BigInt,
        ColumnType::MYSQL_TYPE_FLOAT => SqlType::Real,
        ColumnType::MYSQL_TYPE_DOUBLE => SqlType::Double,
        ColumnType::MYSQL_TYPE_NULL => SqlType::Null,
        ColumnType::MYSQL_TYPE_TIMESTAMP
        | ColumnType::MYSQL_TYPE_DATETIME
        | ColumnType::MYSQL_TYPE_TIMESTAMP2
        | ColumnType::MYSQL_TYPE_DATETIME2 => SqlType::Timestamp,
        ColumnType::MYSQL_TYPE_DATE
        | ColumnType::MYSQL_TYPE_NEWDATE
        | ColumnType::MYSQL_TYPE_YEAR => SqlType::Date,
        ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => SqlType::Time,
        ColumnType::MYSQL_TYPE_VARCHAR | ColumnType::MYSQL_TYPE_VAR_STRING => SqlType::VarChar,
        ColumnType::MYSQL_TYPE_STRING | ColumnType::MYSQL_TYPE_ENUM | ColumnType::MYSQL_TYPE_SET => {
            SqlType::Char
        }
        ColumnType::MYSQL_TYPE_TINY_BLOB => SqlType::VarBinary,
        ColumnType::MYSQL_TYPE_BLOB
        | ColumnType::MYSQL_TYPE_MEDIUM_BLOB
        | ColumnType::MYSQL_TYPE_LONG_BLOB => SqlType::LongVarBinary,
        ColumnType::MYSQL_TYPE_JSON => SqlType::LongVarChar,
        ColumnType::MYSQL_TYPE_BIT => SqlType::Bit,
        ColumnType::MYSQL_TYPE_GEOMETRY => SqlType::Binary,
        ColumnType::MYSQL_TYPE_TYPED_ARRAY => SqlType::Other,
    }
}
