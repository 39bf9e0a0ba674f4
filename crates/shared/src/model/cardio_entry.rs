use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    super::{CardioTypeIden, UserId, WorkoutIden},
    crate::{
        api::payloads::{CardioEntryView, CardioTypeItem},
        stats::CardioSample,
    },
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use crate::types::Fixed2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("cardio_entry"))]
#[cfg_attr(
    feature = "backend",
    check("../../../server/migrations/01-schema/up.sql")
)]
#[cfg_attr(feature = "backend", enum_def)]
pub struct CardioEntry {
    pub id: i64,
    pub workout_id: i64,
    pub cardio_type_id: i64,
    pub minutes: u32,
    pub distance: Option<Fixed2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("cardio_entry"))]
pub struct NewCardioEntry {
    pub workout_id: i64,
    pub cardio_type_id: i64,
    pub minutes: u32,
    pub distance: Option<Fixed2>,
}

#[cfg(feature = "backend")]
impl NewCardioEntry {
    pub fn create(&self, conn: &Connection) -> Result<(), rusqlite::Error> {
        self.insert(conn)
    }
}

#[cfg(feature = "backend")]
impl CardioEntry {
    pub fn delete_for_workout(conn: &Connection, workout_id: i64) -> Result<usize, rusqlite::Error> {
        let (sql, values) = Query::delete()
            .from_table(CardioEntryIden::Table)
            .and_where(Expr::col(CardioEntryIden::WorkoutId).eq(workout_id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())
    }

    pub fn fetch_views(conn: &Connection, workout_id: i64) -> Result<Vec<CardioEntryView>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([
                (CardioEntryIden::Table, CardioEntryIden::Id),
                (CardioEntryIden::Table, CardioEntryIden::CardioTypeId),
                (CardioEntryIden::Table, CardioEntryIden::Minutes),
                (CardioEntryIden::Table, CardioEntryIden::Distance),
            ])
            .column((CardioTypeIden::Table, CardioTypeIden::Name))
            .from(CardioEntryIden::Table)
            .inner_join(
                CardioTypeIden::Table,
                Expr::col((CardioTypeIden::Table, CardioTypeIden::Id))
                    .equals((CardioEntryIden::Table, CardioEntryIden::CardioTypeId)),
            )
            .and_where(Expr::col((CardioEntryIden::Table, CardioEntryIden::WorkoutId)).eq(workout_id))
            .order_by((CardioEntryIden::Table, CardioEntryIden::Id), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                Ok(CardioEntryView {
                    id: row.get(0)?,
                    cardio_type: CardioTypeItem {
                        id: row.get(1)?,
                        name: row.get(4)?,
                    },
                    minutes: row.get(2)?,
                    distance: row.get(3)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn fetch_cardio_samples(conn: &Connection, user: &UserId) -> Result<Vec<CardioSample>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column((CardioTypeIden::Table, CardioTypeIden::Name))
            .columns([
                (CardioEntryIden::Table, CardioEntryIden::Minutes),
                (CardioEntryIden::Table, CardioEntryIden::Distance),
            ])
            .from(CardioEntryIden::Table)
            .inner_join(
                WorkoutIden::Table,
                Expr::col((WorkoutIden::Table, WorkoutIden::Id))
                    .equals((CardioEntryIden::Table, CardioEntryIden::WorkoutId)),
            )
            .inner_join(
                CardioTypeIden::Table,
                Expr::col((CardioTypeIden::Table, CardioTypeIden::Id))
                    .equals((CardioEntryIden::Table, CardioEntryIden::CardioTypeId)),
            )
            .and_where(Expr::col((WorkoutIden::Table, WorkoutIden::Owner)).eq(user))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                Ok(CardioSample {
                    cardio_type: row.get(0)?,
                    minutes: row.get(1)?,
                    distance: row.get(2)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
