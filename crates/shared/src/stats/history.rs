use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{api::payloads::ExerciseHistoryPoint, types::Fixed2};

use super::{entry_reps, entry_total};

/// One strength entry of the tracked exercise and the date of its workout
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySample {
    pub date: NaiveDate,
    pub sets: u32,
    pub reps: u32,
    pub weight: Fixed2,
}

/// Groups samples by date, oldest first. Dates without any reps are dropped
/// since they have no average.
pub fn history_points<I>(samples: I) -> Vec<ExerciseHistoryPoint>
where
    I: IntoIterator<Item = HistorySample>,
{
    let mut by_date: BTreeMap<NaiveDate, (Fixed2, u128)> = BTreeMap::new();
    for sample in samples {
        let (volume, reps) = by_date.entry(sample.date).or_default();
        *volume += entry_total(sample.sets, sample.reps, sample.weight);
        *reps += entry_reps(sample.sets, sample.reps);
    }

    by_date
        .into_iter()
        .filter_map(|(date, (total_volume, total_reps))| {
            let avg_weight_per_rep = total_volume.div_int(total_reps)?;
            Some(ExerciseHistoryPoint {
                date,
                total_volume,
                total_reps,
                avg_weight_per_rep,
            })
        })
        .collect()
}
