use rusqlite::Connection;
use shared::{
    api::payloads::MonthWorkoutsResponse,
    model::{CardioEntry, UserId, Workout, WorkoutEntry},
    stats::{month_summary, DayTotals, MonthSelection},
};
use tracing::instrument;

/// Per day totals for every workout in the selected month
#[instrument(skip(conn))]
pub fn month_view(
    conn: &Connection,
    user: &UserId,
    selection: MonthSelection,
) -> Result<MonthWorkoutsResponse, rusqlite::Error> {
    let Some((start, end)) = selection.bounds() else {
        return Ok(month_summary(selection, Vec::new()));
    };

    let days = Workout::fetch_in_range(conn, user, start, end)?
        .into_iter()
        .map(|workout| {
            let entries = WorkoutEntry::fetch_views(conn, workout.id)?;
            let cardio_entries = CardioEntry::fetch_views(conn, workout.id)?;
            Ok((workout.date, DayTotals::from_views(&entries, &cardio_entries)))
        })
        .collect::<Result<Vec<_>, rusqlite::Error>>()?;

    Ok(month_summary(selection, days))
}
