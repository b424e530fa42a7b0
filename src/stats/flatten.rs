//! Flattening workouts into per-exercise entries for cross-workout stats

use crate::store::{ExerciseEntry, WorkoutRecord};

/// An exercise annotated with its parent workout's date and name
#[derive(Debug, Clone, PartialEq)]
pub struct FlatExercise {
    pub exercise: String,
    pub weight: f64,
    pub sets: f64,
    pub reps: f64,
    pub rpe: f64,
    pub date: String,
    pub workout_name: String,
}

impl FlatExercise {
    fn new(workout: &WorkoutRecord, entry: &ExerciseEntry) -> Self {
        Self {
            exercise: entry.exercise.clone(),
            weight: entry.weight,
            sets: entry.sets,
            reps: entry.reps,
            rpe: entry.rpe,
            date: workout.date.clone(),
            workout_name: workout.name.clone(),
        }
    }

    /// Training volume: weight x reps x sets
    pub fn volume(&self) -> f64 {
        self.weight * self.reps * self.sets
    }
}

/// Project every workout's exercises into one flat list, keeping the
/// stored order of workouts and of exercises within each workout.
pub fn flatten(workouts: &[WorkoutRecord]) -> Vec<FlatExercise> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter().map(|ex| FlatExercise::new(w, ex)))
        .collect()
}

/// Keep only entries whose exercise name contains the given fragment,
/// case-insensitively. An empty fragment keeps everything; that is the
/// all-exercises mode of the stats view.
pub fn filter_exercises(entries: &[FlatExercise], name_part: &str) -> Vec<FlatExercise> {
    let needle = name_part.to_lowercase();
    entries
        .iter()
        .filter(|ex| ex.exercise.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
