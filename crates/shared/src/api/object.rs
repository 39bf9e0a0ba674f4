use const_format::concatcp;

use crate::api::API_BASE_PATH;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Ping,
    WorkoutsMonth,
    WorkoutsDay,
    AnalyticsSummary,
    ExerciseHistory,
    Exercises,
    CardioTypes,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Ping => concatcp!(API_BASE_PATH, "ping"),
            WorkoutsMonth => concatcp!(API_BASE_PATH, "workouts/month"),
            WorkoutsDay => concatcp!(API_BASE_PATH, "workouts/day"),
            AnalyticsSummary => concatcp!(API_BASE_PATH, "analytics/summary"),
            ExerciseHistory => concatcp!(API_BASE_PATH, "analytics/exercise-history"),
            Exercises => concatcp!(API_BASE_PATH, "exercises"),
            CardioTypes => concatcp!(API_BASE_PATH, "cardio-types"),
        }
    }
}
