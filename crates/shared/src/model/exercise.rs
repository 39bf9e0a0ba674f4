use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Cond, Expr, Func, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use super::{UserId, Visibility};
use crate::api::payloads::ExerciseItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(
    feature = "backend",
    check("../../../server/migrations/01-schema/up.sql")
)]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: i64,
    pub owner: Visibility,
    pub name: String,
    /// Free text label used to group analytics
    pub muscle_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub owner: Visibility,
    pub name: String,
    pub muscle_group: String,
}

impl NewExercise {
    /// Exercises created through the API always belong to their creator
    pub fn owned_by<N: Into<String>, G: Into<String>>(owner: UserId, name: N, muscle_group: G) -> Self {
        Self {
            owner: Visibility::Owned(owner),
            name: name.into(),
            muscle_group: muscle_group.into(),
        }
    }
}

impl From<Exercise> for ExerciseItem {
    fn from(value: Exercise) -> Self {
        Self {
            id: value.id,
            name: value.name,
            muscle_group: value.muscle_group,
        }
    }
}

#[cfg(feature = "backend")]
const EXERCISE_STAR: [ExerciseIden; 4] = [
    ExerciseIden::Id,
    ExerciseIden::Owner,
    ExerciseIden::Name,
    ExerciseIden::MuscleGroup,
];

#[cfg(feature = "backend")]
impl Exercise {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns(EXERCISE_STAR)
            .from(ExerciseIden::Table)
            .to_owned()
    }

    /// `owner = user OR owner IS NULL`
    pub fn visible_to(user: &UserId) -> Cond {
        Cond::any()
            .add(Expr::col(ExerciseIden::Owner).eq(user))
            .add(Expr::col(ExerciseIden::Owner).is_null())
    }

    pub fn fetch_by_id(conn: &Connection, id: i64) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row).optional()?;
        Ok(res)
    }

    /// Fetches an exercise only if `user` owns it or it is shared
    pub fn fetch_visible(
        conn: &Connection,
        user: &UserId,
        id: i64,
    ) -> Result<Option<Exercise>, rusqlite::Error> {
        Ok(Self::fetch_by_id(conn, id)?.filter(|e| e.owner.is_visible_to(user)))
    }

    pub fn fetch_all_visible(conn: &Connection, user: &UserId) -> Result<Vec<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .cond_where(Self::visible_to(user))
            .order_by(ExerciseIden::Name, Order::Asc)
            .order_by(ExerciseIden::Id, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Case insensitive check against the user's own exercises. Shared
    /// exercises don't count, a user may shadow one with their own.
    pub fn name_taken(conn: &Connection, user: &UserId, name: &str) -> Result<bool, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column(ExerciseIden::Id)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Owner).eq(user))
            .and_where(
                Expr::expr(Func::lower(Expr::col(ExerciseIden::Name)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.exists(&*values.as_params())
    }

    pub fn create(conn: &Connection, new_exercise: NewExercise) -> Result<Exercise, rusqlite::Error> {
        new_exercise.insert(conn)?;
        Self::fetch_by_id(conn, conn.last_insert_rowid())?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)
    }
}
