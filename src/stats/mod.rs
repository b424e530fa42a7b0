//! Stats module - summary figures over the workout history
//!
//! The stats view shows four widgets and a volume chart. Two of the
//! widgets switch meaning with the exercise filter: without a filter
//! they cover the whole history (top exercise, workout count), with
//! one they cover the filtered entries (max weight, total sets).

pub mod chart;
pub mod flatten;

pub use chart::{ChartPoint, volume_series};
pub use flatten::{FlatExercise, filter_exercises, flatten};

/// Quick-stats figures for the stats view
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub top_label: &'static str,
    pub top_stat: String,
    pub count_label: &'static str,
    pub count_stat: f64,
    pub total_volume: f64,
    pub average_rpe: f64,
}

/// Compute the stats widgets for the current filter state.
///
/// Volume and average RPE always come from the filtered entries; with
/// no filter active those are simply all entries. Every figure has a
/// defined value on empty input: zero sums, zero average, "None" tops.
pub fn summarize(
    all: &[FlatExercise],
    filtered: &[FlatExercise],
    workout_count: usize,
    filter_active: bool,
) -> Summary {
    let total_volume: f64 = filtered.iter().map(FlatExercise::volume).sum();

    let average_rpe = if filtered.is_empty() {
        0.0
    } else {
        let sum: f64 = filtered.iter().map(|ex| ex.rpe).sum();
        round2(sum / filtered.len() as f64)
    };

    if filter_active {
        let max_weight = filtered.iter().fold(0.0_f64, |acc, ex| acc.max(ex.weight));
        let top_stat = if max_weight > 0.0 {
            format!("{} lbs", max_weight)
        } else {
            "None".to_string()
        };
        Summary {
            top_label: "Max Weight",
            top_stat,
            count_label: "Total Sets",
            count_stat: filtered.iter().map(|ex| ex.sets).sum(),
            total_volume,
            average_rpe,
        }
    } else {
        Summary {
            top_label: "Top Exercise",
            top_stat: top_exercise(all).unwrap_or_else(|| "None".to_string()),
            count_label: "Total Workouts",
            count_stat: workout_count as f64,
            total_volume,
            average_rpe,
        }
    }
}

/// Exercise name with the most sets summed across the whole history.
/// Grouping keeps first-seen order and the max scan is strict, so ties
/// go to the name encountered first.
fn top_exercise(entries: &[FlatExercise]) -> Option<String> {
    let mut sets_by_name: Vec<(&str, f64)> = Vec::new();
    for entry in entries {
        match sets_by_name.iter_mut().find(|(name, _)| *name == entry.exercise) {
            Some((_, total)) => *total += entry.sets,
            None => sets_by_name.push((&entry.exercise, entry.sets)),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (name, total) in sets_by_name {
        if best.is_none_or(|(_, max)| total > max) {
            best = Some((name, total));
        }
    }
    best.map(|(name, _)| name.to_string())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
