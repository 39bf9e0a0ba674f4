use rusqlite::Connection;
use shared::{
    api::payloads::AnalyticsSummaryResponse,
    model::{CardioEntry, UserId, Workout, WorkoutEntry},
    stats::summarize,
};
use tracing::instrument;

/// Lifetime totals for the user, grouped by muscle group and cardio type
#[instrument(skip(conn))]
pub fn summary(conn: &Connection, user: &UserId) -> Result<AnalyticsSummaryResponse, rusqlite::Error> {
    let total_workouts = Workout::count_for_user(conn, user)?;
    let strength = WorkoutEntry::fetch_strength_samples(conn, user)?;
    let cardio = CardioEntry::fetch_cardio_samples(conn, user)?;

    Ok(summarize(total_workouts, strength, cardio))
}
