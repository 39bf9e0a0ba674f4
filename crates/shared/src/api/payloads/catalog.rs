use serde::{Deserialize, Serialize};

use crate::{api::error::ValidationError, model::ValidateModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseItem {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioTypeItem {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExerciseRequest {
    #[serde(default)]
    pub name: String,
    /// Free text, there is no fixed list of muscle groups
    #[serde(default)]
    pub muscle_group: String,
}

impl NewExerciseRequest {
    pub fn trimmed(&self) -> (&str, &str) {
        (self.name.trim(), self.muscle_group.trim())
    }
}

impl ValidateModel for NewExerciseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let (name, muscle_group) = self.trimmed();
        if name.is_empty() {
            Err(ValidationError::new("Exercise name is required"))
        } else if muscle_group.is_empty() {
            Err(ValidationError::new("Muscle group is required"))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCardioTypeRequest {
    #[serde(default)]
    pub name: String,
}

impl NewCardioTypeRequest {
    pub fn trimmed(&self) -> &str {
        self.name.trim()
    }
}

impl ValidateModel for NewCardioTypeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.trimmed().is_empty() {
            Err(ValidationError::new("Cardio type name is required"))
        } else {
            Ok(())
        }
    }
}
