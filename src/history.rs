//! Workout history view - filtering, sorting, and view-index mapping
//!
//! Every call builds a fresh view over the store snapshot. Rows carry
//! the index of their workout in the underlying list so positions in a
//! filtered or sorted view can be mapped back before a delete.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::store::WorkoutRecord;

/// Ordering applied to the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
    ExercisesAsc,
    ExercisesDesc,
    Unsorted,
}

impl SortKey {
    /// Map a sort option token to a key. Unknown tokens leave the view
    /// unsorted; that fallback is deliberate, not an error.
    pub fn from_param(param: &str) -> Self {
        match param {
            "date-desc" => SortKey::DateDesc,
            "date-asc" => SortKey::DateAsc,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "exercises-asc" => SortKey::ExercisesAsc,
            "exercises-desc" => SortKey::ExercisesDesc,
            _ => SortKey::Unsorted,
        }
    }
}

/// One row of the history view
#[derive(Debug, Clone)]
pub struct HistoryRow {
    /// Position of this workout in the store snapshot
    pub source_index: usize,
    pub workout: WorkoutRecord,
}

/// Parse a calendar date string, `None` when it doesn't parse
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Calendar order over date strings. Strings that fail to parse sort
/// after every parsable date and compare equal to each other.
pub fn cmp_dates_asc(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Reverse calendar order; unparsable strings still sort last
pub fn cmp_dates_desc(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Build the history view: case-insensitive name filter, then the
/// requested order. An empty query matches everything. The underlying
/// list is untouched; equal sort keys carry no order guarantee.
pub fn filter_and_sort(workouts: &[WorkoutRecord], query: &str, key: SortKey) -> Vec<HistoryRow> {
    let needle = query.to_lowercase();
    let mut rows: Vec<HistoryRow> = workouts
        .iter()
        .enumerate()
        .filter(|(_, w)| w.name.to_lowercase().contains(&needle))
        .map(|(source_index, workout)| HistoryRow {
            source_index,
            workout: workout.clone(),
        })
        .collect();

    match key {
        SortKey::DateDesc => rows.sort_by(|a, b| cmp_dates_desc(&a.workout.date, &b.workout.date)),
        SortKey::DateAsc => rows.sort_by(|a, b| cmp_dates_asc(&a.workout.date, &b.workout.date)),
        SortKey::NameAsc => {
            rows.sort_by(|a, b| a.workout.name.to_lowercase().cmp(&b.workout.name.to_lowercase()));
        }
        SortKey::NameDesc => {
            rows.sort_by(|a, b| b.workout.name.to_lowercase().cmp(&a.workout.name.to_lowercase()));
        }
        SortKey::ExercisesAsc => rows.sort_by_key(|r| r.workout.exercises.len()),
        SortKey::ExercisesDesc => {
            rows.sort_by(|a, b| b.workout.exercises.len().cmp(&a.workout.exercises.len()));
        }
        SortKey::Unsorted => {}
    }

    rows
}

/// Remove the workout shown at a view position, resolving it back to
/// the store snapshot through the row's source index. Out-of-range
/// positions are a no-op returning `None`.
pub fn remove_workout(
    workouts: &mut Vec<WorkoutRecord>,
    rows: &[HistoryRow],
    view_index: usize,
) -> Option<WorkoutRecord> {
    let row = rows.get(view_index)?;
    if row.source_index >= workouts.len() {
        return None;
    }
    Some(workouts.remove(row.source_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_workout(name: &str, date: &str, exercise_count: usize) -> WorkoutRecord {
        use crate::store::ExerciseEntry;
        WorkoutRecord {
            name: name.to_string(),
            date: date.to_string(),
            notes: String::new(),
            exercises: (0..exercise_count)
                .map(|i| ExerciseEntry {
                    exercise: format!("exercise {}", i),
                    weight: 100.0,
                    sets: 3.0,
                    reps: 10.0,
                    rpe: 7.0,
                })
                .collect(),
        }
    }

    fn names(rows: &[HistoryRow]) -> Vec<&str> {
        rows.iter().map(|r| r.workout.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let workouts = vec![
            create_workout("Legs", "2024-01-01", 1),
            create_workout("Push", "2024-01-03", 2),
        ];
        let rows = filter_and_sort(&workouts, "", SortKey::Unsorted);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let workouts = vec![
            create_workout("Leg Day", "2024-01-01", 1),
            create_workout("Push", "2024-01-03", 2),
        ];
        let rows = filter_and_sort(&workouts, "LEG", SortKey::Unsorted);
        assert_eq!(names(&rows), vec!["Leg Day"]);
    }

    #[test]
    fn test_filter_idempotent() {
        let workouts = vec![
            create_workout("Leg Day", "2024-01-01", 1),
            create_workout("Push", "2024-01-03", 2),
            create_workout("Legs again", "2024-01-05", 1),
        ];
        let once = filter_and_sort(&workouts, "leg", SortKey::Unsorted);
        let filtered: Vec<WorkoutRecord> = once.iter().map(|r| r.workout.clone()).collect();
        let twice = filter_and_sort(&filtered, "leg", SortKey::Unsorted);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_date_desc_newest_first() {
        let workouts = vec![
            create_workout("old", "2024-01-01", 1),
            create_workout("new", "2024-03-01", 1),
            create_workout("mid", "2024-02-01", 1),
        ];
        let rows = filter_and_sort(&workouts, "", SortKey::DateDesc);
        assert_eq!(names(&rows), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_date_asc_reverses_pairwise_order() {
        let workouts = vec![
            create_workout("old", "2024-01-01", 1),
            create_workout("new", "2024-03-01", 1),
        ];
        let desc = filter_and_sort(&workouts, "", SortKey::DateDesc);
        let asc = filter_and_sort(&workouts, "", SortKey::DateAsc);
        assert_eq!(names(&desc), vec!["new", "old"]);
        assert_eq!(names(&asc), vec!["old", "new"]);
    }

    #[test]
    fn test_unparsable_dates_sort_last() {
        let workouts = vec![
            create_workout("broken", "someday", 1),
            create_workout("old", "2024-01-01", 1),
            create_workout("new", "2024-03-01", 1),
        ];
        let desc = filter_and_sort(&workouts, "", SortKey::DateDesc);
        assert_eq!(names(&desc), vec!["new", "old", "broken"]);
        let asc = filter_and_sort(&workouts, "", SortKey::DateAsc);
        assert_eq!(names(&asc), vec!["old", "new", "broken"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let workouts = vec![
            create_workout("push", "2024-01-01", 1),
            create_workout("Arms", "2024-01-02", 1),
            create_workout("legs", "2024-01-03", 1),
        ];
        let rows = filter_and_sort(&workouts, "", SortKey::NameAsc);
        assert_eq!(names(&rows), vec!["Arms", "legs", "push"]);
        let rows = filter_and_sort(&workouts, "", SortKey::NameDesc);
        assert_eq!(names(&rows), vec!["push", "legs", "Arms"]);
    }

    #[test]
    fn test_exercise_count_sort() {
        let workouts = vec![
            create_workout("three", "2024-01-01", 3),
            create_workout("one", "2024-01-02", 1),
            create_workout("five", "2024-01-03", 5),
        ];
        let rows = filter_and_sort(&workouts, "", SortKey::ExercisesAsc);
        assert_eq!(names(&rows), vec!["one", "three", "five"]);
        let rows = filter_and_sort(&workouts, "", SortKey::ExercisesDesc);
        assert_eq!(names(&rows), vec!["five", "three", "one"]);
    }

    #[test]
    fn test_unknown_sort_param_is_passthrough() {
        assert_eq!(SortKey::from_param("volume-desc"), SortKey::Unsorted);
        assert_eq!(SortKey::from_param(""), SortKey::Unsorted);
        assert_eq!(SortKey::from_param("date-desc"), SortKey::DateDesc);

        let workouts = vec![
            create_workout("b", "2024-01-02", 1),
            create_workout("a", "2024-01-01", 1),
        ];
        let rows = filter_and_sort(&workouts, "", SortKey::Unsorted);
        // store order, untouched
        assert_eq!(names(&rows), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_maps_view_index_to_source() {
        let mut workouts = vec![
            create_workout("old", "2024-01-01", 1),
            create_workout("new", "2024-03-01", 1),
            create_workout("mid", "2024-02-01", 1),
        ];
        // view row 0 under date-desc is "new", stored at index 1
        let rows = filter_and_sort(&workouts, "", SortKey::DateDesc);
        let removed = remove_workout(&mut workouts, &rows, 0).unwrap();
        assert_eq!(removed.name, "new");
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].name, "old");
        assert_eq!(workouts[1].name, "mid");
    }

    #[test]
    fn test_remove_respects_filter() {
        let mut workouts = vec![
            create_workout("Push", "2024-01-01", 1),
            create_workout("Legs", "2024-01-02", 1),
        ];
        let rows = filter_and_sort(&workouts, "legs", SortKey::DateDesc);
        let removed = remove_workout(&mut workouts, &rows, 0).unwrap();
        assert_eq!(removed.name, "Legs");
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].name, "Push");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut workouts = vec![create_workout("Push", "2024-01-01", 1)];
        let rows = filter_and_sort(&workouts, "", SortKey::DateDesc);
        assert!(remove_workout(&mut workouts, &rows, 5).is_none());
        assert_eq!(workouts.len(), 1);
    }
}
