use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::ValidateModel,
    types::Fixed2,
};

use super::CardioTypeItem;

/// Upper bound on sets, reps and minutes, matching a signed 32 bit column
pub const MAX_COUNT: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntryInput {
    pub exercise_id: i64,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioEntryInput {
    pub cardio_type_id: i64,
    pub minutes: u32,
    #[serde(default)]
    pub distance: Option<Fixed2>,
}

/// Full replacement of one day's entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkoutRequest {
    pub date: NaiveDate,
    /// Echoed back in the response, never stored
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub entries: Vec<WorkoutEntryInput>,
    #[serde(default)]
    pub cardio_entries: Vec<CardioEntryInput>,
}

fn check_count(errors: &mut Vec<String>, path: String, value: u32) {
    if value < 1 {
        errors.push(format!("{path}: Ensure this value is greater than or equal to 1"));
    } else if value > MAX_COUNT {
        errors.push(format!("{path}: Ensure this value is less than or equal to {MAX_COUNT}"));
    }
}

fn check_amount(errors: &mut Vec<String>, path: String, value: Fixed2) {
    if value.is_negative() {
        errors.push(format!("{path}: Ensure this value is greater than or equal to 0"));
    } else if value > Fixed2::INPUT_MAX {
        errors.push(format!("{path}: Ensure that there are no more than 7 digits in total"));
    }
}

impl ValidateModel for DayWorkoutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            check_count(&mut errors, format!("entries[{i}].sets"), entry.sets);
            check_count(&mut errors, format!("entries[{i}].reps"), entry.reps);
            check_amount(&mut errors, format!("entries[{i}].weight"), entry.weight);
        }

        for (i, entry) in self.cardio_entries.iter().enumerate() {
            check_count(&mut errors, format!("cardio_entries[{i}].minutes"), entry.minutes);
            if let Some(distance) = entry.distance {
                check_amount(&mut errors, format!("cardio_entries[{i}].distance"), distance);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { error_messages: errors })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntryView {
    pub id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
    /// sets * reps * weight
    pub total_weight: Fixed2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioEntryView {
    pub id: i64,
    pub cardio_type: CardioTypeItem,
    pub minutes: u32,
    pub distance: Option<Fixed2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkoutResponse {
    pub date: NaiveDate,
    pub notes: String,
    pub entries: Vec<WorkoutEntryView>,
    pub cardio_entries: Vec<CardioEntryView>,
    pub day_total_weight: Fixed2,
    pub day_total_reps: u128,
    pub day_total_cardio_minutes: u128,
}

impl DayWorkoutResponse {
    /// Shape returned for a date with no workout
    pub fn empty(date: NaiveDate, notes: String) -> Self {
        Self {
            date,
            notes,
            entries: Vec::new(),
            cardio_entries: Vec::new(),
            day_total_weight: Fixed2::ZERO,
            day_total_reps: 0,
            day_total_cardio_minutes: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: DayWorkoutRequest = serde_json::from_str(r#"{"date":"2025-03-01"}"#).unwrap();
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(req.notes, None);
        assert!(req.entries.is_empty());
        assert!(req.cardio_entries.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let req: DayWorkoutRequest = serde_json::from_value(serde_json::json!({
            "date": "2025-03-01",
            "entries": [
                {"exercise_id": 1, "sets": 0, "reps": 10, "weight": "-1.00"},
                {"exercise_id": 1, "sets": 3, "reps": 10, "weight": "100000.00"},
            ],
            "cardio_entries": [
                {"cardio_type_id": 1, "minutes": 0, "distance": null},
            ],
        }))
        .unwrap();

        let errors = req.validate().unwrap_err().error_messages;
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("entries[0].sets"));
        assert!(errors[1].starts_with("entries[0].weight"));
        assert!(errors[2].starts_with("entries[1].weight"));
        assert!(errors[3].starts_with("cardio_entries[0].minutes"));
    }

    #[test]
    fn test_empty_response_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let json = serde_json::to_value(DayWorkoutResponse::empty(date, String::new())).unwrap();
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["day_total_weight"], "0.00");
        assert_eq!(json["day_total_reps"], 0);
        assert_eq!(json["entries"].as_array().unwrap().len(), 0);
    }
}
