use axum::{extract::Query, http::StatusCode, Json};
use chrono::Utc;
use shared::{
    api::{
        error::ServerError,
        payloads::{DayQuery, DayWorkoutRequest, DayWorkoutResponse, MonthQuery, MonthWorkoutsResponse},
        response_errors::{DayWorkoutError, MonthError},
    },
    stats::MonthSelection,
};
use tracing::instrument;

use crate::{
    db::DatabaseConnection,
    engine::{day, month},
    state::Args,
    UserState, ValidJson,
};

#[instrument(skip(conn))]
pub async fn month_view(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    args: Args,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthWorkoutsResponse>, ServerError<MonthError>> {
    let today = Utc::now().date_naive();
    let selection = MonthSelection::parse(&query, &args.allowed_years, today)?;

    let res = conn
        .interact(move |conn| month::month_view(conn, &user_state.id, selection))
        .await??;
    Ok(Json(res))
}

#[instrument(skip(conn))]
pub async fn read_day(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayWorkoutResponse>, ServerError<DayWorkoutError>> {
    let date = day::parse_date(query.date.as_deref())?;

    let res = conn
        .interact(move |conn| day::read_day(conn, &user_state.id, date))
        .await??;
    Ok(Json(res))
}

#[instrument(skip(conn, request))]
pub async fn write_day(
    DatabaseConnection(conn): DatabaseConnection,
    user_state: UserState,
    ValidJson(request): ValidJson<DayWorkoutRequest>,
) -> Result<(StatusCode, Json<DayWorkoutResponse>), ServerError<DayWorkoutError>> {
    let write = conn
        .interact(move |conn| day::replace_day(conn, &user_state.id, request))
        .await??;

    let code = if write.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((code, Json(write.day)))
}
