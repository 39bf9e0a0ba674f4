use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ServerError;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($($message:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($message)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl $name {
            pub fn code(&self) -> StatusCode {
                match self {
                    $( $name::$variant { .. } => $variant_code, )*
                }
            }
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = inner.code();
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(DayWorkoutError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Date parameter is required")]
    DateRequired,
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate { value: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Exercise with id {exercise_id} does not exist or is not accessible")]
    ExerciseNotAccessible { exercise_id: i64 },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Cardio type with id {cardio_type_id} does not exist or is not accessible")]
    CardioTypeNotAccessible { cardio_type_id: i64 },
});

response_error!(MonthError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Invalid year or month parameter")]
    Unparseable,
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Year must be {allowed}")]
    InvalidYear { year: i32, allowed: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("Month must be between 1 and 12")]
    InvalidMonth { month: u32 },
});

response_error!(ExerciseHistoryError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("exercise_id parameter is required")]
    ExerciseIdRequired,
    #[code(StatusCode::BAD_REQUEST)]
    #[error("exercise_id must be a valid integer")]
    InvalidExerciseId { value: String },
    #[code(StatusCode::NOT_FOUND)]
    #[error("Exercise not found or not accessible")]
    ExerciseNotFound { exercise_id: i64 },
});

response_error!(CatalogError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("You already have an exercise with this name")]
    DuplicateExercise { name: String },
    #[code(StatusCode::BAD_REQUEST)]
    #[error("You already have a cardio type with this name")]
    DuplicateCardioType { name: String },
});
