//! Weekly schedule - one planned workout per day of the week
//!
//! The schedule is a fixed Monday-through-Sunday structure, persisted
//! whole. Edits are structural: the caller mutates a copy and saves
//! the entire week back through the store.

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

/// Planned workout for a single day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(rename = "workoutName", default)]
    pub workout_name: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// The full week, Monday through Sunday
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSchedule {
    #[serde(rename = "Monday")]
    pub monday: DayPlan,
    #[serde(rename = "Tuesday")]
    pub tuesday: DayPlan,
    #[serde(rename = "Wednesday")]
    pub wednesday: DayPlan,
    #[serde(rename = "Thursday")]
    pub thursday: DayPlan,
    #[serde(rename = "Friday")]
    pub friday: DayPlan,
    #[serde(rename = "Saturday")]
    pub saturday: DayPlan,
    #[serde(rename = "Sunday")]
    pub sunday: DayPlan,
}

impl WeekSchedule {
    pub fn day(&self, day: Weekday) -> &DayPlan {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    pub fn set_workout_name(&mut self, day: Weekday, name: impl Into<String>) {
        self.day_mut(day).workout_name = name.into();
    }

    /// Append an exercise to a day's plan
    pub fn add_exercise(&mut self, day: Weekday, exercise: impl Into<String>) {
        self.day_mut(day).exercises.push(exercise.into());
    }

    /// Rename one exercise slot; indices past the end are left alone
    pub fn update_exercise(&mut self, day: Weekday, index: usize, exercise: impl Into<String>) {
        if let Some(slot) = self.day_mut(day).exercises.get_mut(index) {
            *slot = exercise.into();
        }
    }

    /// Drop one exercise slot; indices past the end are left alone
    pub fn remove_exercise(&mut self, day: Weekday, index: usize) {
        let exercises = &mut self.day_mut(day).exercises;
        if index < exercises.len() {
            exercises.remove(index);
        }
    }

    /// Days without a workout name read as rest days
    pub fn is_rest_day(&self, day: Weekday) -> bool {
        self.day(day).workout_name.is_empty()
    }
}

/// All days in calendar order
pub fn week_days() -> [Weekday; 7] {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
}

/// Display name for a day, matching the stored keys
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a day name ("monday", "Mon") into a weekday
pub fn parse_day(raw: &str) -> Option<Weekday> {
    raw.parse::<Weekday>().ok()
}

/// Whether the given day is today on the local clock
pub fn is_today(day: Weekday) -> bool {
    Local::now().weekday() == day
}
