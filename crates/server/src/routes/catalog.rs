use axum::{http::StatusCode, Json};
use shared::api::{
    error::{Nothing, ServerError},
    payloads::{CardioTypeItem, ExerciseItem, NewCardioTypeRequest, NewExerciseRequest},
    response_errors::CatalogError,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, engine::catalog, UserState, ValidJson};

#[instrument(skip(conn))]
pub async fn list_exercises(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
) -> Result<Json<Vec<ExerciseItem>>, ServerError<Nothing>> {
    let res = conn
        .interact(move |conn| catalog::list_exercises(conn, &user_state.id))
        .await??;
    Ok(Json(res))
}

#[instrument(skip(conn))]
pub async fn create_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    ValidJson(request): ValidJson<NewExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseItem>), ServerError<CatalogError>> {
    let res = conn
        .interact(move |conn| catalog::create_exercise(conn, &user_state.id, &request))
        .await??;
    Ok((StatusCode::CREATED, Json(res)))
}

#[instrument(skip(conn))]
pub async fn list_cardio_types(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
) -> Result<Json<Vec<CardioTypeItem>>, ServerError<Nothing>> {
    let res = conn
        .interact(move |conn| catalog::list_cardio_types(conn, &user_state.id))
        .await??;
    Ok(Json(res))
}

#[instrument(skip(conn))]
pub async fn create_cardio_type(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    ValidJson(request): ValidJson<NewCardioTypeRequest>,
) -> Result<(StatusCode, Json<CardioTypeItem>), ServerError<CatalogError>> {
    let res = conn
        .interact(move |conn| catalog::create_cardio_type(conn, &user_state.id, &request))
        .await??;
    Ok((StatusCode::CREATED, Json(res)))
}
