use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    super::{ExerciseIden, UserId, WorkoutIden},
    crate::{
        api::payloads::WorkoutEntryView,
        stats::{entry_total, HistorySample, StrengthSample},
    },
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use crate::types::Fixed2;

/// A strength exercise performed as part of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("workout_entry"))]
#[cfg_attr(
    feature = "backend",
    check("../../../server/migrations/01-schema/up.sql")
)]
#[cfg_attr(feature = "backend", enum_def)]
pub struct WorkoutEntry {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("workout_entry"))]
pub struct NewWorkoutEntry {
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
}

#[cfg(feature = "backend")]
impl NewWorkoutEntry {
    pub fn create(&self, conn: &Connection) -> Result<(), rusqlite::Error> {
        self.insert(conn)
    }
}

#[cfg(feature = "backend")]
impl WorkoutEntry {
    pub fn delete_for_workout(conn: &Connection, workout_id: i64) -> Result<usize, rusqlite::Error> {
        let (sql, values) = Query::delete()
            .from_table(WorkoutEntryIden::Table)
            .and_where(Expr::col(WorkoutEntryIden::WorkoutId).eq(workout_id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())
    }

    /// Entries of one workout joined with their exercise, in insertion order
    pub fn fetch_views(conn: &Connection, workout_id: i64) -> Result<Vec<WorkoutEntryView>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns([
                (WorkoutEntryIden::Table, WorkoutEntryIden::Id),
                (WorkoutEntryIden::Table, WorkoutEntryIden::ExerciseId),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Sets),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Reps),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Weight),
            ])
            .columns([
                (ExerciseIden::Table, ExerciseIden::Name),
                (ExerciseIden::Table, ExerciseIden::MuscleGroup),
            ])
            .from(WorkoutEntryIden::Table)
            .inner_join(
                ExerciseIden::Table,
                Expr::col((ExerciseIden::Table, ExerciseIden::Id))
                    .equals((WorkoutEntryIden::Table, WorkoutEntryIden::ExerciseId)),
            )
            .and_where(Expr::col((WorkoutEntryIden::Table, WorkoutEntryIden::WorkoutId)).eq(workout_id))
            .order_by((WorkoutEntryIden::Table, WorkoutEntryIden::Id), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                let sets: u32 = row.get(2)?;
                let reps: u32 = row.get(3)?;
                let weight: Fixed2 = row.get(4)?;
                Ok(WorkoutEntryView {
                    id: row.get(0)?,
                    exercise_id: row.get(1)?,
                    exercise_name: row.get(5)?,
                    muscle_group: row.get(6)?,
                    sets,
                    reps,
                    weight,
                    total_weight: entry_total(sets, reps, weight),
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Every strength entry the user has logged, tagged with its muscle group
    pub fn fetch_strength_samples(conn: &Connection, user: &UserId) -> Result<Vec<StrengthSample>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column((ExerciseIden::Table, ExerciseIden::MuscleGroup))
            .columns([
                (WorkoutEntryIden::Table, WorkoutEntryIden::Sets),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Reps),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Weight),
            ])
            .from(WorkoutEntryIden::Table)
            .inner_join(
                WorkoutIden::Table,
                Expr::col((WorkoutIden::Table, WorkoutIden::Id))
                    .equals((WorkoutEntryIden::Table, WorkoutEntryIden::WorkoutId)),
            )
            .inner_join(
                ExerciseIden::Table,
                Expr::col((ExerciseIden::Table, ExerciseIden::Id))
                    .equals((WorkoutEntryIden::Table, WorkoutEntryIden::ExerciseId)),
            )
            .and_where(Expr::col((WorkoutIden::Table, WorkoutIden::Owner)).eq(user))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                Ok(StrengthSample {
                    muscle_group: row.get(0)?,
                    sets: row.get(1)?,
                    reps: row.get(2)?,
                    weight: row.get(3)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// Entries of one exercise across the user's workouts, oldest first
    pub fn fetch_history_samples(
        conn: &Connection,
        user: &UserId,
        exercise_id: i64,
    ) -> Result<Vec<HistorySample>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column((WorkoutIden::Table, WorkoutIden::Date))
            .columns([
                (WorkoutEntryIden::Table, WorkoutEntryIden::Sets),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Reps),
                (WorkoutEntryIden::Table, WorkoutEntryIden::Weight),
            ])
            .from(WorkoutEntryIden::Table)
            .inner_join(
                WorkoutIden::Table,
                Expr::col((WorkoutIden::Table, WorkoutIden::Id))
                    .equals((WorkoutEntryIden::Table, WorkoutEntryIden::WorkoutId)),
            )
            .and_where(Expr::col((WorkoutIden::Table, WorkoutIden::Owner)).eq(user))
            .and_where(Expr::col((WorkoutEntryIden::Table, WorkoutEntryIden::ExerciseId)).eq(exercise_id))
            .order_by((WorkoutIden::Table, WorkoutIden::Date), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| {
                Ok(HistorySample {
                    date: row.get(0)?,
                    sets: row.get(1)?,
                    reps: row.get(2)?,
                    weight: row.get(3)?,
                })
            })?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
