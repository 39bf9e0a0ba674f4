use rusqlite::Connection;
use shared::{
    api::{
        error::ServerError,
        payloads::ExerciseHistoryResponse,
        response_errors::ExerciseHistoryError,
    },
    model::{Exercise, UserId, WorkoutEntry},
    stats::history_points,
};
use tracing::instrument;

pub fn parse_exercise_id(exercise_id: Option<&str>) -> Result<i64, ExerciseHistoryError> {
    match exercise_id.map(str::trim) {
        None | Some("") => Err(ExerciseHistoryError::ExerciseIdRequired),
        Some(value) => value
            .parse()
            .map_err(|_| ExerciseHistoryError::InvalidExerciseId { value: value.to_owned() }),
    }
}

/// Volume and average load per date for one exercise
#[instrument(skip(conn))]
pub fn exercise_history(
    conn: &Connection,
    user: &UserId,
    exercise_id: i64,
) -> Result<ExerciseHistoryResponse, ServerError<ExerciseHistoryError>> {
    let exercise = Exercise::fetch_visible(conn, user, exercise_id)?
        .ok_or(ExerciseHistoryError::ExerciseNotFound { exercise_id })?;

    let samples = WorkoutEntry::fetch_history_samples(conn, user, exercise.id)?;

    Ok(ExerciseHistoryResponse {
        exercise: exercise.into(),
        points: history_points(samples),
    })
}
