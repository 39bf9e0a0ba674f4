use axum::{extract::Query, Json};
use shared::api::{
    error::{Nothing, ServerError},
    payloads::{AnalyticsSummaryResponse, ExerciseHistoryQuery, ExerciseHistoryResponse},
    response_errors::ExerciseHistoryError,
};
use tracing::instrument;

use crate::{
    db::DatabaseConnection,
    engine::{analytics, history},
    UserState,
};

#[instrument(skip(conn))]
pub async fn summary(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
) -> Result<Json<AnalyticsSummaryResponse>, ServerError<Nothing>> {
    let res = conn
        .interact(move |conn| analytics::summary(conn, &user_state.id))
        .await??;
    Ok(Json(res))
}

#[instrument(skip(conn))]
pub async fn exercise_history(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    Query(query): Query<ExerciseHistoryQuery>,
) -> Result<Json<ExerciseHistoryResponse>, ServerError<ExerciseHistoryError>> {
    let exercise_id = history::parse_exercise_id(query.exercise_id.as_deref())?;

    let res = conn
        .interact(move |conn| history::exercise_history(conn, &user_state.id, exercise_id))
        .await??;
    Ok(Json(res))
}
