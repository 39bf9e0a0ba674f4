use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    super::{CardioEntryIden, WorkoutEntryIden},
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, OnConflict, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use super::UserId;

/// One user's training day. There is at most one per (owner, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("workout"))]
#[cfg_attr(
    feature = "backend",
    check("../../../server/migrations/01-schema/up.sql")
)]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Workout {
    pub id: i64,
    pub owner: UserId,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "backend")]
const WORKOUT_STAR: [WorkoutIden; 5] = [
    WorkoutIden::Id,
    WorkoutIden::Owner,
    WorkoutIden::Date,
    WorkoutIden::CreatedAt,
    WorkoutIden::UpdatedAt,
];

#[cfg(feature = "backend")]
impl Workout {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns(WORKOUT_STAR)
            .from(WorkoutIden::Table)
            .to_owned()
    }

    pub fn fetch_by_date(
        conn: &Connection,
        user: &UserId,
        date: NaiveDate,
    ) -> Result<Option<Workout>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(WorkoutIden::Owner).eq(user))
            .and_where(Expr::col(WorkoutIden::Date).eq(date))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Workout::from_row).optional()?;
        Ok(res)
    }

    /// Workouts with `start <= date < end`, oldest first
    pub fn fetch_in_range(
        conn: &Connection,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Workout>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(WorkoutIden::Owner).eq(user))
            .and_where(Expr::col(WorkoutIden::Date).gte(start))
            .and_where(Expr::col(WorkoutIden::Date).lt(end))
            .order_by(WorkoutIden::Date, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Workout::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn count_for_user(conn: &Connection, user: &UserId) -> Result<u64, rusqlite::Error> {
        let (sql, values) = Query::select()
            .expr(Expr::col(WorkoutIden::Id).count())
            .from(WorkoutIden::Table)
            .and_where(Expr::col(WorkoutIden::Owner).eq(user))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.query_row(&*values.as_params(), |row| row.get(0))
    }

    /// Returns the workout for the day and whether this call created it.
    ///
    /// A row inserted concurrently for the same (owner, date) is reused
    /// instead of surfacing the unique constraint failure.
    pub fn find_or_create(
        conn: &Connection,
        user: &UserId,
        date: NaiveDate,
    ) -> Result<(Workout, bool), rusqlite::Error> {
        let now = Utc::now();
        let (sql, values) = Query::insert()
            .into_table(WorkoutIden::Table)
            .columns([
                WorkoutIden::Owner,
                WorkoutIden::Date,
                WorkoutIden::CreatedAt,
                WorkoutIden::UpdatedAt,
            ])
            .values_panic([(*user).into(), date.into(), now.into(), now.into()])
            .on_conflict(
                OnConflict::columns([WorkoutIden::Owner, WorkoutIden::Date])
                    .do_nothing()
                    .to_owned(),
            )
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let created = stmt.execute(&*values.as_params())? > 0;

        let workout = Self::fetch_by_date(conn, user, date)?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        Ok((workout, created))
    }

    pub fn touch(&mut self, conn: &Connection) -> Result<(), rusqlite::Error> {
        self.updated_at = Utc::now();
        let (sql, values) = Query::update()
            .table(WorkoutIden::Table)
            .values([(WorkoutIden::UpdatedAt, self.updated_at.into())])
            .and_where(Expr::col(WorkoutIden::Id).eq(self.id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())?;
        Ok(())
    }

    /// Entries go with it through `ON DELETE CASCADE`
    pub fn delete(self, conn: &Connection) -> Result<(), rusqlite::Error> {
        let (sql, values) = Query::delete()
            .from_table(WorkoutIden::Table)
            .and_where(Expr::col(WorkoutIden::Id).eq(self.id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())?;
        Ok(())
    }

    /// True when the workout has no strength and no cardio entries
    pub fn is_empty(&self, conn: &Connection) -> Result<bool, rusqlite::Error> {
        let (strength_sql, strength_values) = Query::select()
            .column(WorkoutEntryIden::Id)
            .from(WorkoutEntryIden::Table)
            .and_where(Expr::col(WorkoutEntryIden::WorkoutId).eq(self.id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);
        let (cardio_sql, cardio_values) = Query::select()
            .column(CardioEntryIden::Id)
            .from(CardioEntryIden::Table)
            .and_where(Expr::col(CardioEntryIden::WorkoutId).eq(self.id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let has_strength = conn.prepare_cached(&strength_sql)?.exists(&*strength_values.as_params())?;
        let has_cardio = conn.prepare_cached(&cardio_sql)?.exists(&*cardio_values.as_params())?;
        Ok(!has_strength && !has_cardio)
    }
}
