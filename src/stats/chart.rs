//! Volume-over-time series for the stats chart

use crate::history::cmp_dates_asc;

use super::FlatExercise;

/// One plotted point: total volume lifted on one date
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Group key, the date string exactly as stored
    pub date: String,
    pub total_weight: f64,
    pub workout_name: String,
}

/// Group entries by their exact date string and accumulate volume.
///
/// Two date strings that differ only in representation form distinct
/// groups. Groups are created in encounter order and every entry
/// overwrites the group's workout name, so the last entry on a date
/// names the point. The series comes back in calendar order with
/// unparsable dates last.
pub fn volume_series(entries: &[FlatExercise]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();

    for entry in entries {
        match points.iter_mut().find(|p| p.date == entry.date) {
            Some(point) => {
                point.total_weight += entry.volume();
                point.workout_name = entry.workout_name.clone();
            }
            None => points.push(ChartPoint {
                date: entry.date.clone(),
                total_weight: entry.volume(),
                workout_name: entry.workout_name.clone(),
            }),
        }
    }

    points.sort_by(|a, b| cmp_dates_asc(&a.date, &b.date));
    points
}
