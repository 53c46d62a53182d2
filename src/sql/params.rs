//! Values the builder binds, and their sqlx encoding.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A bound statement argument: a year or a piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqliteBindValue {
    Int(i64),
    Text(String),
}

impl From<u16> for SqliteBindValue {
    fn from(n: u16) -> Self {
        SqliteBindValue::Int(i64::from(n))
    }
}

impl From<&str> for SqliteBindValue {
    fn from(s: &str) -> Self {
        SqliteBindValue::Text(s.to_string())
    }
}

impl From<String> for SqliteBindValue {
    fn from(s: String) -> Self {
        SqliteBindValue::Text(s)
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqliteBindValue::Int(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <str as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}
