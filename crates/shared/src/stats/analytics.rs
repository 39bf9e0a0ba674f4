use std::collections::BTreeMap;

use crate::{
    api::payloads::{
        AnalyticsSummaryResponse, CardioOverall, CardioTypeStats, MuscleGroupStats, OverallStats,
    },
    types::Fixed2,
};

use super::{entry_reps, entry_total};

/// One strength entry with the muscle group of its exercise
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthSample {
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
}

/// One cardio entry with the name of its type
#[derive(Debug, Clone, PartialEq)]
pub struct CardioSample {
    pub cardio_type: String,
    pub minutes: u32,
    pub distance: Option<Fixed2>,
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    sets: u128,
    weight: Fixed2,
}

#[derive(Debug, Default)]
struct CardioAccumulator {
    minutes: u128,
    distance: Fixed2,
}

/// Zero distance is reported as absent
fn distance_or_none(distance: Fixed2) -> Option<Fixed2> {
    if distance > Fixed2::ZERO {
        Some(distance)
    } else {
        None
    }
}

pub fn summarize<S, C>(total_workouts: u64, strength: S, cardio: C) -> AnalyticsSummaryResponse
where
    S: IntoIterator<Item = StrengthSample>,
    C: IntoIterator<Item = CardioSample>,
{
    let mut groups: BTreeMap<String, GroupAccumulator> = BTreeMap::new();
    let mut overall_weight = Fixed2::ZERO;
    let mut overall_reps: u128 = 0;

    for sample in strength {
        let total = entry_total(sample.sets, sample.reps, sample.weight);
        let group = groups.entry(sample.muscle_group).or_default();
        group.sets += sample.sets as u128;
        group.weight += total;

        overall_weight += total;
        overall_reps += entry_reps(sample.sets, sample.reps);
    }

    let mut types: BTreeMap<String, CardioAccumulator> = BTreeMap::new();
    let mut overall_minutes: u128 = 0;
    let mut overall_distance = Fixed2::ZERO;

    for sample in cardio {
        let acc = types.entry(sample.cardio_type).or_default();
        acc.minutes += sample.minutes as u128;
        overall_minutes += sample.minutes as u128;
        if let Some(distance) = sample.distance {
            acc.distance += distance;
            overall_distance += distance;
        }
    }

    let by_muscle_group = groups
        .into_iter()
        .filter(|(_, acc)| acc.sets > 0 || acc.weight > Fixed2::ZERO)
        .map(|(muscle_group, acc)| MuscleGroupStats {
            muscle_group,
            total_sets: acc.sets,
            total_weight: acc.weight,
        })
        .collect();

    let by_cardio_type = types
        .into_iter()
        .map(|(cardio_type, acc)| CardioTypeStats {
            cardio_type,
            total_minutes: acc.minutes,
            total_distance: distance_or_none(acc.distance),
        })
        .collect();

    AnalyticsSummaryResponse {
        by_muscle_group,
        overall: OverallStats {
            total_workouts,
            total_weight: overall_weight,
            total_reps: overall_reps,
        },
        cardio_overall: CardioOverall {
            total_minutes: overall_minutes,
            total_distance: distance_or_none(overall_distance),
        },
        by_cardio_type,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strength(group: &str, sets: u32, reps: u32, weight: &str) -> StrengthSample {
        StrengthSample {
            muscle_group: group.into(),
            sets,
            reps,
            weight: weight.parse().unwrap(),
        }
    }

    fn cardio(name: &str, minutes: u32, distance: Option<&str>) -> CardioSample {
        CardioSample {
            cardio_type: name.into(),
            minutes,
            distance: distance.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_groups_are_sorted_and_summed() {
        let summary = summarize(
            2,
            vec![
                strength("legs", 3, 5, "100.00"),
                strength("chest", 3, 10, "50.00"),
                strength("legs", 2, 5, "120.50"),
            ],
            vec![],
        );

        let names: Vec<_> = summary.by_muscle_group.iter().map(|g| g.muscle_group.as_str()).collect();
        assert_eq!(names, ["chest", "legs"]);
        assert_eq!(summary.by_muscle_group[1].total_sets, 5);
        assert_eq!(summary.by_muscle_group[1].total_weight.to_string(), "2705.00");

        assert_eq!(summary.overall.total_workouts, 2);
        assert_eq!(summary.overall.total_weight.to_string(), "4205.00");
        assert_eq!(summary.overall.total_reps, 55);
    }

    #[test]
    fn test_zero_groups_are_omitted() {
        // Only reachable if rows bypass input validation
        let summary = summarize(1, vec![strength("ghost", 0, 0, "0")], vec![]);
        assert!(summary.by_muscle_group.is_empty());
    }

    #[test]
    fn test_bodyweight_group_is_kept() {
        let summary = summarize(1, vec![strength("core", 3, 20, "0")], vec![]);
        assert_eq!(summary.by_muscle_group.len(), 1);
        assert_eq!(summary.by_muscle_group[0].total_weight.to_string(), "0.00");
    }

    #[test]
    fn test_cardio_distance_null_when_zero() {
        let summary = summarize(
            3,
            vec![],
            vec![
                cardio("Swim", 20, None),
                cardio("Run", 30, Some("5.25")),
                cardio("Run", 15, None),
                cardio("Run", 10, Some("2.00")),
            ],
        );

        assert_eq!(summary.by_cardio_type.len(), 2);
        assert_eq!(summary.by_cardio_type[0].cardio_type, "Run");
        assert_eq!(summary.by_cardio_type[0].total_minutes, 55);
        assert_eq!(summary.by_cardio_type[0].total_distance.map(|d| d.to_string()).as_deref(), Some("7.25"));
        assert_eq!(summary.by_cardio_type[1].cardio_type, "Swim");
        assert_eq!(summary.by_cardio_type[1].total_distance, None);

        assert_eq!(summary.cardio_overall.total_minutes, 75);
        assert_eq!(summary.cardio_overall.total_distance.map(|d| d.to_string()).as_deref(), Some("7.25"));
    }

    #[test]
    fn test_large_totals_are_exact() {
        let max = i32::MAX as u32;
        let summary = summarize(
            5,
            (0..5).map(|_| strength("chest", max, max, "1")),
            (0..3).map(|_| cardio("Row", max, None)),
        );

        assert_eq!(summary.overall.total_reps, 23_058_430_070_662_103_045);
        assert_eq!(summary.overall.total_weight.to_string(), "23058430070662103045.00");
        assert_eq!(summary.by_muscle_group[0].total_sets, 10_737_418_235);
        assert_eq!(summary.cardio_overall.total_minutes, 6_442_450_941);

        let json = serde_json::to_string(&summary.overall).unwrap();
        assert!(json.contains("\"total_reps\":23058430070662103045"));
    }

    #[test]
    fn test_no_history() {
        let summary = summarize(0, vec![], vec![]);
        assert!(summary.by_muscle_group.is_empty());
        assert!(summary.by_cardio_type.is_empty());
        assert_eq!(summary.overall.total_weight.to_string(), "0.00");
        assert_eq!(summary.cardio_overall.total_distance, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["cardio_overall"]["total_distance"].is_null());
    }
}
