use rusqlite::Connection;
use shared::{
    api::{
        error::ServerError,
        payloads::{CardioTypeItem, ExerciseItem, NewCardioTypeRequest, NewExerciseRequest},
        response_errors::CatalogError,
    },
    model::{CardioType, Exercise, NewCardioType, NewExercise, UserId},
};
use tracing::{info, instrument};

/// The user's exercises plus the shared catalog, by name
#[instrument(skip(conn))]
pub fn list_exercises(conn: &Connection, user: &UserId) -> Result<Vec<ExerciseItem>, rusqlite::Error> {
    Ok(Exercise::fetch_all_visible(conn, user)?
        .into_iter()
        .map(ExerciseItem::from)
        .collect())
}

#[instrument(skip(conn))]
pub fn create_exercise(
    conn: &Connection,
    user: &UserId,
    request: &NewExerciseRequest,
) -> Result<ExerciseItem, ServerError<CatalogError>> {
    let (name, muscle_group) = request.trimmed();

    if Exercise::name_taken(conn, user, name)? {
        Err(CatalogError::DuplicateExercise { name: name.to_owned() })?;
    }

    let exercise = Exercise::create(conn, NewExercise::owned_by(*user, name, muscle_group))?;
    info!(id = exercise.id, "exercise created");
    Ok(exercise.into())
}

#[instrument(skip(conn))]
pub fn list_cardio_types(conn: &Connection, user: &UserId) -> Result<Vec<CardioTypeItem>, rusqlite::Error> {
    Ok(CardioType::fetch_all_owned(conn, user)?
        .into_iter()
        .map(CardioTypeItem::from)
        .collect())
}

#[instrument(skip(conn))]
pub fn create_cardio_type(
    conn: &Connection,
    user: &UserId,
    request: &NewCardioTypeRequest,
) -> Result<CardioTypeItem, ServerError<CatalogError>> {
    let name = request.trimmed();

    if CardioType::name_taken(conn, user, name)? {
        Err(CatalogError::DuplicateCardioType { name: name.to_owned() })?;
    }

    let cardio_type = CardioType::create(conn, NewCardioType::new(*user, name))?;
    info!(id = cardio_type.id, "cardio type created");
    Ok(cardio_type.into())
}
