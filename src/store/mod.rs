//! Storage module - JSON snapshot store for workout data
//!
//! Workouts and the weekly schedule are persisted as whole-document
//! snapshots under separate keys. Callers rebuild the full collection
//! and hand it back; nothing is updated in place.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::schedule::WeekSchedule;

const WORKOUTS_KEY: &str = "workouts.json";
const SCHEDULE_KEY: &str = "schedule.json";

/// One exercise performed within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub exercise: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sets: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reps: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rpe: f64,
}

impl ExerciseEntry {
    /// Training volume: weight x reps x sets
    pub fn volume(&self) -> f64 {
        self.weight * self.reps * self.sets
    }
}

/// One logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub name: String,
    /// Calendar date as entered, "YYYY-MM-DD"
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

/// Form input may land in the store as numeric strings. Accept numbers
/// or parseable strings; everything else (and non-finite values) reads
/// as zero so downstream arithmetic stays total.
fn lenient_number<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    let n = match &value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if n.is_finite() { n } else { 0.0 })
}

/// Snapshot store rooted at a data directory
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store, creating the data directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load the full workout list; a missing or unreadable snapshot is empty
    pub fn load_workouts(&self) -> Vec<WorkoutRecord> {
        self.load_or_default(WORKOUTS_KEY)
    }

    /// Replace the stored workout list
    pub fn save_workouts(&self, workouts: &[WorkoutRecord]) -> Result<()> {
        self.save(WORKOUTS_KEY, &workouts)
    }

    /// Load the weekly schedule, falling back to the empty seven-day week
    pub fn load_schedule(&self) -> WeekSchedule {
        self.load_or_default(SCHEDULE_KEY)
    }

    /// Replace the stored schedule
    pub fn save_schedule(&self, schedule: &WeekSchedule) -> Result<()> {
        self.save(SCHEDULE_KEY, schedule)
    }

    fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(key);
        let Ok(raw) = fs::read_to_string(&path) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("ignoring unreadable snapshot {}: {}", path.display(), err);
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.dir.join(key);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        info!("saved {}", path.display());
        Ok(())
    }
}
