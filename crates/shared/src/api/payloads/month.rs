use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Fixed2;

/// Raw query values, parsed by the route so bad input maps to a typed error
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWithWorkout {
    pub date: NaiveDate,
    pub day_total_weight: Fixed2,
    pub day_total_reps: u128,
    pub day_total_cardio_minutes: u128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthWorkoutsResponse {
    pub year: i32,
    pub month: u32,
    pub days_with_workouts: Vec<DayWithWorkout>,
    pub month_total_weight: Fixed2,
    pub month_total_reps: u128,
    pub month_total_cardio_minutes: u128,
}
