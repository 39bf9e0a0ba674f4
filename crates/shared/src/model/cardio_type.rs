use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Func, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use super::UserId;
use crate::api::payloads::CardioTypeItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("cardio_type"))]
#[cfg_attr(
    feature = "backend",
    check("../../../server/migrations/01-schema/up.sql")
)]
#[cfg_attr(feature = "backend", enum_def)]
pub struct CardioType {
    pub id: i64,
    pub owner: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("cardio_type"))]
pub struct NewCardioType {
    pub owner: UserId,
    pub name: String,
}

impl NewCardioType {
    pub fn new<N: Into<String>>(owner: UserId, name: N) -> Self {
        Self { owner, name: name.into() }
    }
}

impl From<CardioType> for CardioTypeItem {
    fn from(value: CardioType) -> Self {
        Self { id: value.id, name: value.name }
    }
}

#[cfg(feature = "backend")]
const CARDIO_TYPE_STAR: [CardioTypeIden; 3] = [
    CardioTypeIden::Id,
    CardioTypeIden::Owner,
    CardioTypeIden::Name,
];

#[cfg(feature = "backend")]
impl CardioType {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns(CARDIO_TYPE_STAR)
            .from(CardioTypeIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: i64) -> Result<Option<CardioType>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(CardioTypeIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), CardioType::from_row).optional()?;
        Ok(res)
    }

    /// Cardio types are never shared, only the owner can use one
    pub fn fetch_owned(
        conn: &Connection,
        user: &UserId,
        id: i64,
    ) -> Result<Option<CardioType>, rusqlite::Error> {
        Ok(Self::fetch_by_id(conn, id)?.filter(|t| &t.owner == user))
    }

    pub fn fetch_all_owned(conn: &Connection, user: &UserId) -> Result<Vec<CardioType>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(CardioTypeIden::Owner).eq(user))
            .order_by(CardioTypeIden::Name, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), CardioType::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn name_taken(conn: &Connection, user: &UserId, name: &str) -> Result<bool, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column(CardioTypeIden::Id)
            .from(CardioTypeIden::Table)
            .and_where(Expr::col(CardioTypeIden::Owner).eq(user))
            .and_where(
                Expr::expr(Func::lower(Expr::col(CardioTypeIden::Name)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.exists(&*values.as_params())
    }

    pub fn create(conn: &Connection, new_cardio_type: NewCardioType) -> Result<CardioType, rusqlite::Error> {
        new_cardio_type.insert(conn)?;
        Self::fetch_by_id(conn, conn.last_insert_rowid())?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)
    }
}
