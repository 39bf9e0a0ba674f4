mod user_id;
pub use user_id::*;

mod visibility;
pub use visibility::*;

mod exercise;
pub use exercise::*;

mod cardio_type;
pub use cardio_type::*;

mod workout;
pub use workout::*;

mod workout_entry;
pub use workout_entry::*;

mod cardio_entry;
pub use cardio_entry::*;

use crate::api::error::ValidationError;

pub trait ValidateModel {
    fn validate(&self) -> Result<(), ValidationError>;
}
