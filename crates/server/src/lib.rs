use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use shared::api::{
    error::{Nothing, ServerError},
    Object,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod cli;
pub mod db;
pub mod engine;
pub mod routes;

mod extract;
pub use extract::*;

mod identity;
pub use identity::*;

mod state;
pub use state::*;

/// Largest request body accepted
const MAX_BODY_BYTES: usize = 1024 * 1024;

fn cors_layer(origin: &str, identity_header: &str) -> Result<CorsLayer, ServerError<Nothing>> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ServerError::other(format!("cors origin {origin:?}: {e}")))?;
    let identity_header = HeaderName::from_bytes(identity_header.as_bytes())
        .map_err(|e| ServerError::other(format!("identity header {identity_header:?}: {e}")))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, identity_header]))
}

/// The full API, ready to serve
pub fn app(state: AppState) -> Result<Router, ServerError<Nothing>> {
    let cors = state
        .args
        .cors_origin
        .as_deref()
        .map(|origin| cors_layer(origin, &state.args.identity_header))
        .transpose()?;

    let router = Router::new()
        .route(Object::Ping.path(), get(routes::ping))
        .route(Object::WorkoutsMonth.path(), get(routes::workouts::month_view))
        .route(
            Object::WorkoutsDay.path(),
            get(routes::workouts::read_day).post(routes::workouts::write_day),
        )
        .route(Object::AnalyticsSummary.path(), get(routes::analytics::summary))
        .route(Object::ExerciseHistory.path(), get(routes::analytics::exercise_history))
        .route(
            Object::Exercises.path(),
            get(routes::catalog::list_exercises).post(routes::catalog::create_exercise),
        )
        .route(
            Object::CardioTypes.path(),
            get(routes::catalog::list_cardio_types).post(routes::catalog::create_cardio_type),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    Ok(router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state))
}
