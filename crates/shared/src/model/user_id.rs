use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Identity of an authenticated user, as handed over by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId {
    pub id: i64,
}

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self { id }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}

impl Deref for UserId {
    type Target = i64;
    fn deref(&self) -> &Self::Target {
        &self.id
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId::new)
    }
}

#[cfg(feature = "backend")]
impl ToSql for UserId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.id))
    }
}

#[cfg(feature = "backend")]
impl FromSql for UserId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(UserId::new)
    }
}

#[cfg(feature = "backend")]
impl From<UserId> for sea_query::Value {
    fn from(value: UserId) -> Self {
        value.id.into()
    }
}

#[cfg(feature = "backend")]
impl From<&UserId> for sea_query::Value {
    fn from(value: &UserId) -> Self {
        value.id.into()
    }
}
