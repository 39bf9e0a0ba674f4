use chrono::NaiveDate;
use rusqlite::{Connection, TransactionBehavior};
use shared::{
    api::{
        error::ServerError,
        payloads::{DayWorkoutRequest, DayWorkoutResponse},
        response_errors::DayWorkoutError,
    },
    model::{
        CardioEntry, CardioType, Exercise, NewCardioEntry, NewWorkoutEntry, UserId, Workout,
        WorkoutEntry,
    },
    stats::DayTotals,
};
use tracing::{debug, instrument};

/// Result of replacing a day
#[derive(Debug, Clone, PartialEq)]
pub struct DayWrite {
    /// True when this request created the day's workout and it still exists
    pub created: bool,
    pub day: DayWorkoutResponse,
}

/// Parses the `date` query parameter of the day view
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate, DayWorkoutError> {
    let value = match date.map(str::trim) {
        None | Some("") => return Err(DayWorkoutError::DateRequired),
        Some(value) => value,
    };
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DayWorkoutError::InvalidDate {
        value: value.to_owned(),
    })
}

fn load_day(
    conn: &Connection,
    workout: &Workout,
    notes: String,
) -> Result<DayWorkoutResponse, rusqlite::Error> {
    let entries = WorkoutEntry::fetch_views(conn, workout.id)?;
    let cardio_entries = CardioEntry::fetch_views(conn, workout.id)?;
    let totals = DayTotals::from_views(&entries, &cardio_entries);

    Ok(DayWorkoutResponse {
        date: workout.date,
        notes,
        entries,
        cardio_entries,
        day_total_weight: totals.total_weight,
        day_total_reps: totals.total_reps,
        day_total_cardio_minutes: totals.total_cardio_minutes,
    })
}

/// The day's entries and totals, or the empty shape when nothing was logged
#[instrument(skip(conn))]
pub fn read_day(
    conn: &Connection,
    user: &UserId,
    date: NaiveDate,
) -> Result<DayWorkoutResponse, rusqlite::Error> {
    match Workout::fetch_by_date(conn, user, date)? {
        Some(workout) => load_day(conn, &workout, String::new()),
        None => Ok(DayWorkoutResponse::empty(date, String::new())),
    }
}

/// Every referenced exercise must be visible to the user and every cardio
/// type owned by them. Runs before anything is written.
fn check_references(
    conn: &Connection,
    user: &UserId,
    request: &DayWorkoutRequest,
) -> Result<(), ServerError<DayWorkoutError>> {
    for entry in &request.entries {
        if Exercise::fetch_visible(conn, user, entry.exercise_id)?.is_none() {
            Err(DayWorkoutError::ExerciseNotAccessible {
                exercise_id: entry.exercise_id,
            })?;
        }
    }

    for entry in &request.cardio_entries {
        if CardioType::fetch_owned(conn, user, entry.cardio_type_id)?.is_none() {
            Err(DayWorkoutError::CardioTypeNotAccessible {
                cardio_type_id: entry.cardio_type_id,
            })?;
        }
    }

    Ok(())
}

/// Replaces the day's strength and cardio entries with the ones in
/// `request`.
///
/// Everything happens in a single `IMMEDIATE` transaction: either every
/// reference checks out and the whole day is rewritten, or nothing changes.
/// A day left without entries loses its workout row.
#[instrument(skip(conn, request), fields(date = %request.date))]
pub fn replace_day(
    conn: &mut Connection,
    user: &UserId,
    request: DayWorkoutRequest,
) -> Result<DayWrite, ServerError<DayWorkoutError>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    check_references(&tx, user, &request)?;

    let DayWorkoutRequest {
        date,
        notes,
        entries,
        cardio_entries,
    } = request;

    let (mut workout, created) = Workout::find_or_create(&tx, user, date)?;

    let removed = WorkoutEntry::delete_for_workout(&tx, workout.id)?;
    for entry in entries {
        NewWorkoutEntry {
            workout_id: workout.id,
            exercise_id: entry.exercise_id,
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
        }
        .create(&tx)?;
    }

    let removed_cardio = CardioEntry::delete_for_workout(&tx, workout.id)?;
    for entry in cardio_entries {
        NewCardioEntry {
            workout_id: workout.id,
            cardio_type_id: entry.cardio_type_id,
            minutes: entry.minutes,
            distance: entry.distance,
        }
        .create(&tx)?;
    }
    debug!(workout = workout.id, created, removed, removed_cardio, "entries replaced");

    let write = if workout.is_empty(&tx)? {
        debug!(workout = workout.id, "no entries left, removing workout");
        workout.delete(&tx)?;
        DayWrite {
            created: false,
            day: DayWorkoutResponse::empty(date, String::new()),
        }
    } else {
        workout.touch(&tx)?;
        DayWrite {
            created,
            day: load_day(&tx, &workout, notes.unwrap_or_default())?,
        }
    };

    tx.commit()?;
    Ok(write)
}
