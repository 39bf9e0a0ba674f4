use std::ops::AddAssign;

use crate::{
    api::payloads::{CardioEntryView, WorkoutEntryView},
    types::Fixed2,
};

/// sets * reps * weight for one strength entry
pub fn entry_total(sets: u32, reps: u32, weight: Fixed2) -> Fixed2 {
    weight.mul_int(sets as u64 * reps as u64)
}

/// sets * reps for one strength entry
pub fn entry_reps(sets: u32, reps: u32) -> u128 {
    sets as u128 * reps as u128
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub total_weight: Fixed2,
    pub total_reps: u128,
    pub total_cardio_minutes: u128,
}

impl DayTotals {
    pub fn add_strength(&mut self, sets: u32, reps: u32, weight: Fixed2) {
        self.total_weight += entry_total(sets, reps, weight);
        self.total_reps += entry_reps(sets, reps);
    }

    pub fn add_cardio(&mut self, minutes: u32) {
        self.total_cardio_minutes += minutes as u128;
    }

    pub fn from_views(entries: &[WorkoutEntryView], cardio_entries: &[CardioEntryView]) -> Self {
        let mut totals = DayTotals::default();
        for entry in entries {
            totals.add_strength(entry.sets, entry.reps, entry.weight);
        }
        for entry in cardio_entries {
            totals.add_cardio(entry.minutes);
        }
        totals
    }
}

impl AddAssign for DayTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.total_weight += rhs.total_weight;
        self.total_reps += rhs.total_reps;
        self.total_cardio_minutes += rhs.total_cardio_minutes;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::payloads::CardioTypeItem;

    fn strength(sets: u32, reps: u32, weight: &str) -> WorkoutEntryView {
        let weight = weight.parse().unwrap();
        WorkoutEntryView {
            id: 1,
            exercise_id: 1,
            exercise_name: "Bench".into(),
            muscle_group: "chest".into(),
            sets,
            reps,
            weight,
            total_weight: entry_total(sets, reps, weight),
        }
    }

    fn cardio(minutes: u32) -> CardioEntryView {
        CardioEntryView {
            id: 1,
            cardio_type: CardioTypeItem { id: 1, name: "Run".into() },
            minutes,
            distance: None,
        }
    }

    #[test]
    fn test_single_entry_day() {
        let totals = DayTotals::from_views(&[strength(3, 10, "50.00")], &[]);
        assert_eq!(totals.total_weight.to_string(), "1500.00");
        assert_eq!(totals.total_reps, 30);
        assert_eq!(totals.total_cardio_minutes, 0);
    }

    #[test]
    fn test_mixed_day() {
        let totals = DayTotals::from_views(
            &[strength(3, 10, "50.00"), strength(2, 5, "12.25"), strength(1, 1, "0")],
            &[cardio(30), cardio(15)],
        );
        assert_eq!(totals.total_weight.to_string(), "1622.50");
        assert_eq!(totals.total_reps, 41);
        assert_eq!(totals.total_cardio_minutes, 45);
    }

    #[test]
    fn test_empty_day_is_zero() {
        let totals = DayTotals::from_views(&[], &[]);
        assert_eq!(totals, DayTotals::default());
        assert_eq!(totals.total_weight.to_string(), "0.00");
    }

    #[test]
    fn test_totals_past_u64_stay_exact() {
        let max = i32::MAX as u32;
        let entries: Vec<_> = (0..5).map(|_| strength(max, max, "1")).collect();
        let totals = DayTotals::from_views(&entries, &[cardio(max), cardio(max)]);
        assert_eq!(totals.total_reps, 23_058_430_070_662_103_045);
        assert_eq!(totals.total_weight.to_string(), "23058430070662103045.00");
        assert_eq!(totals.total_cardio_minutes, 4_294_967_294);

        let mut month = totals;
        month += totals;
        assert_eq!(month.total_reps, 46_116_860_141_324_206_090);
    }
}
