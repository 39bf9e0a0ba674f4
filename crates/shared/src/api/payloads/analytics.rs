use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Fixed2;

use super::ExerciseItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupStats {
    pub muscle_group: String,
    pub total_sets: u128,
    pub total_weight: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioTypeStats {
    pub cardio_type: String,
    pub total_minutes: u128,
    /// `None` when no entry of this type recorded a distance
    pub total_distance: Option<Fixed2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_workouts: u64,
    pub total_weight: Fixed2,
    pub total_reps: u128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioOverall {
    pub total_minutes: u128,
    pub total_distance: Option<Fixed2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummaryResponse {
    pub by_muscle_group: Vec<MuscleGroupStats>,
    pub overall: OverallStats,
    pub cardio_overall: CardioOverall,
    pub by_cardio_type: Vec<CardioTypeStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseHistoryQuery {
    pub exercise_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryPoint {
    pub date: NaiveDate,
    pub total_volume: Fixed2,
    pub total_reps: u128,
    pub avg_weight_per_rep: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryResponse {
    pub exercise: ExerciseItem,
    pub points: Vec<ExerciseHistoryPoint>,
}
