use chrono::{Datelike, NaiveDate};

use crate::api::{
    payloads::{DayWithWorkout, MonthQuery, MonthWorkoutsResponse},
    response_errors::MonthError,
};

use super::DayTotals;

/// A validated year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    pub year: i32,
    pub month: u32,
}

/// "2025", "2025 or 2026", "2024, 2025 or 2026"
fn list_years(years: &[i32]) -> String {
    match years {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let rest: Vec<_> = rest.iter().map(|y| y.to_string()).collect();
            format!("{} or {last}", rest.join(", "))
        }
    }
}

impl MonthSelection {
    /// Parses the month view query. Absent values fall back to `today`.
    pub fn parse(
        query: &MonthQuery,
        allowed_years: &[i32],
        today: NaiveDate,
    ) -> Result<Self, MonthError> {
        let year = match query.year.as_deref() {
            None => today.year(),
            Some(v) => v.trim().parse().map_err(|_| MonthError::Unparseable)?,
        };
        let month: i64 = match query.month.as_deref() {
            None => today.month() as i64,
            Some(v) => v.trim().parse().map_err(|_| MonthError::Unparseable)?,
        };

        if !allowed_years.contains(&year) {
            return Err(MonthError::InvalidYear { year, allowed: list_years(allowed_years) });
        }

        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth { month: month.clamp(0, u32::MAX as i64) as u32 });
        }

        Ok(Self { year, month: month as u32 })
    }

    /// First day of the month and first day of the following month
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let end = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?
        };
        Some((start, end))
    }
}

/// Sorts the days ascending and sums them into month totals
pub fn month_summary<I>(selection: MonthSelection, days: I) -> MonthWorkoutsResponse
where
    I: IntoIterator<Item = (NaiveDate, DayTotals)>,
{
    let mut days: Vec<_> = days.into_iter().collect();
    days.sort_by_key(|(date, _)| *date);

    let mut month = DayTotals::default();
    let days_with_workouts = days
        .into_iter()
        .map(|(date, totals)| {
            month += totals;
            DayWithWorkout {
                date,
                day_total_weight: totals.total_weight,
                day_total_reps: totals.total_reps,
                day_total_cardio_minutes: totals.total_cardio_minutes,
            }
        })
        .collect();

    MonthWorkoutsResponse {
        year: selection.year,
        month: selection.month,
        days_with_workouts,
        month_total_weight: month.total_weight,
        month_total_reps: month.total_reps,
        month_total_cardio_minutes: month.total_cardio_minutes,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALLOWED: [i32; 2] = [2025, 2026];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(year: Option<&str>, month: Option<&str>) -> MonthQuery {
        MonthQuery { year: year.map(Into::into), month: month.map(Into::into) }
    }

    #[test]
    fn test_parse_selection() {
        let today = date(2025, 6, 15);
        assert_eq!(
            MonthSelection::parse(&query(Some("2025"), Some("3")), &ALLOWED, today),
            Ok(MonthSelection { year: 2025, month: 3 })
        );
        assert_eq!(
            MonthSelection::parse(&query(None, None), &ALLOWED, today),
            Ok(MonthSelection { year: 2025, month: 6 })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let today = date(2025, 6, 15);
        assert_eq!(
            MonthSelection::parse(&query(Some("abc"), None), &ALLOWED, today),
            Err(MonthError::Unparseable)
        );
        assert!(matches!(
            MonthSelection::parse(&query(Some("2024"), Some("3")), &ALLOWED, today),
            Err(MonthError::InvalidYear { year: 2024, .. })
        ));
        assert_eq!(
            MonthSelection::parse(&query(Some("2025"), Some("13")), &ALLOWED, today),
            Err(MonthError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            MonthSelection::parse(&query(Some("2025"), Some("0")), &ALLOWED, today),
            Err(MonthError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn test_year_list_wording() {
        assert_eq!(list_years(&[2025]), "2025");
        assert_eq!(list_years(&[2025, 2026]), "2025 or 2026");
        assert_eq!(list_years(&[2024, 2025, 2026]), "2024, 2025 or 2026");

        let err = MonthSelection::parse(&query(Some("2023"), None), &ALLOWED, date(2025, 6, 15)).unwrap_err();
        assert_eq!(err.to_string(), "Year must be 2025 or 2026");
    }

    #[test]
    fn test_bounds_roll_over_december() {
        let sel = MonthSelection { year: 2025, month: 12 };
        assert_eq!(sel.bounds(), Some((date(2025, 12, 1), date(2026, 1, 1))));
        let sel = MonthSelection { year: 2026, month: 2 };
        assert_eq!(sel.bounds(), Some((date(2026, 2, 1), date(2026, 3, 1))));
    }

    #[test]
    fn test_month_totals_sum_sorted_days() {
        let mut late = DayTotals::default();
        late.add_strength(2, 10, "10.00".parse().unwrap());
        let mut early = DayTotals::default();
        early.add_strength(3, 10, "50.00".parse().unwrap());
        early.add_cardio(20);

        let summary = month_summary(
            MonthSelection { year: 2025, month: 3 },
            [(date(2025, 3, 15), late), (date(2025, 3, 1), early)],
        );

        assert_eq!(summary.days_with_workouts.len(), 2);
        assert_eq!(summary.days_with_workouts[0].date, date(2025, 3, 1));
        assert_eq!(summary.days_with_workouts[1].date, date(2025, 3, 15));
        assert_eq!(summary.month_total_weight.to_string(), "1700.00");
        assert_eq!(summary.month_total_reps, 50);
        assert_eq!(summary.month_total_cardio_minutes, 20);
    }

    #[test]
    fn test_empty_month() {
        let summary = month_summary(MonthSelection { year: 2026, month: 1 }, []);
        assert!(summary.days_with_workouts.is_empty());
        assert_eq!(summary.month_total_weight.to_string(), "0.00");
        assert_eq!(summary.month_total_reps, 0);
    }
}
