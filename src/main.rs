//! strengthlog - Personal strength training log

use anyhow::{bail, Result};
use chrono::Weekday;
use clap::{Parser, Subcommand};

use strengthlog::history::{self, SortKey};
use strengthlog::schedule;
use strengthlog::stats;
use strengthlog::store::{ExerciseEntry, Store, WorkoutRecord};
use strengthlog::tui::App;

const DATA_DIR: &str = "strengthlog-data";

#[derive(Parser)]
#[command(name = "strengthlog")]
#[command(version, about = "Personal strength training log")]
struct Cli {
    /// Data directory for stored workouts and schedule
    #[arg(long, env = "STRENGTHLOG_DATA", default_value = DATA_DIR)]
    data_dir: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI dashboard
    Tui,

    /// Log one exercise for a workout session
    Log {
        /// Workout name (e.g., "Legs")
        name: String,

        /// Workout date, YYYY-MM-DD
        date: String,

        /// Exercise name (e.g., "Squat")
        exercise: String,

        /// Weight in lbs
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Number of sets
        #[arg(short, long, default_value = "1")]
        sets: f64,

        /// Reps per set
        #[arg(short, long, default_value = "1")]
        reps: f64,

        /// Rate of perceived exertion, 1-10
        #[arg(long, default_value = "5")]
        rpe: f64,

        /// Session notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Show workout history
    History {
        /// Filter by workout name
        #[arg(short = 'q', long, default_value = "")]
        search: String,

        /// Sort option: date-desc, date-asc, name-asc, name-desc,
        /// exercises-asc, exercises-desc
        #[arg(long, default_value = "date-desc")]
        sort: String,

        /// Show each workout's exercises and notes
        #[arg(short, long)]
        details: bool,
    },

    /// Delete a workout by its row number in the history view
    Delete {
        /// Row number as printed by `history`
        index: usize,

        #[arg(short = 'q', long, default_value = "")]
        search: String,

        #[arg(long, default_value = "date-desc")]
        sort: String,
    },

    /// Show workout statistics
    Stats {
        /// Filter by exercise name (leave out for all exercises)
        exercise: Option<String>,
    },

    /// View or edit the weekly schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    /// Print the current schedule
    Show,

    /// Set the workout name for a day
    SetName { day: String, name: String },

    /// Append an exercise to a day
    AddExercise { day: String, exercise: String },

    /// Rename an exercise slot on a day
    UpdateExercise {
        day: String,
        index: usize,
        exercise: String,
    },

    /// Remove an exercise slot from a day
    RemoveExercise { day: String, index: usize },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = Store::open(&cli.data_dir)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            let mut app = App::new(store);
            app.run()?;
        }

        Some(Commands::Log {
            name,
            date,
            exercise,
            weight,
            sets,
            reps,
            rpe,
            notes,
        }) => {
            let mut workouts = store.load_workouts();
            let entry = ExerciseEntry {
                exercise: exercise.clone(),
                weight,
                sets,
                reps,
                rpe,
            };

            // Same session name and date: the exercise joins that record
            match workouts.last_mut().filter(|w| w.name == name && w.date == date) {
                Some(workout) => workout.exercises.push(entry),
                None => workouts.push(WorkoutRecord {
                    name: name.clone(),
                    date: date.clone(),
                    notes: notes.unwrap_or_default(),
                    exercises: vec![entry],
                }),
            }

            store.save_workouts(&workouts)?;
            println!("Logged: {} - {}x{} @ {} lbs ({}, {})", exercise, sets, reps, weight, name, date);
        }

        Some(Commands::History { search, sort, details }) => {
            let workouts = store.load_workouts();
            if workouts.is_empty() {
                println!("No workouts saved yet.");
                return Ok(());
            }

            let rows = history::filter_and_sort(&workouts, &search, SortKey::from_param(&sort));
            println!("{:>3}  {:10}  {:20}  {}", "#", "Date", "Name", "Exercises");
            println!("{:-<60}", "");
            for (idx, row) in rows.iter().enumerate() {
                println!(
                    "{:>3}  {:10}  {:20}  {}",
                    idx,
                    row.workout.date,
                    row.workout.name,
                    row.workout.exercises.len()
                );
                if details {
                    for ex in &row.workout.exercises {
                        println!(
                            "       {} ~ {} reps x {} sets @ {} lbs (RPE: {})",
                            ex.exercise, ex.reps, ex.sets, ex.weight, ex.rpe
                        );
                    }
                    if !row.workout.notes.is_empty() {
                        println!("       Notes: {}", row.workout.notes);
                    }
                }
            }
        }

        Some(Commands::Delete { index, search, sort }) => {
            let mut workouts = store.load_workouts();
            let rows = history::filter_and_sort(&workouts, &search, SortKey::from_param(&sort));
            match history::remove_workout(&mut workouts, &rows, index) {
                Some(removed) => {
                    store.save_workouts(&workouts)?;
                    println!("Deleted workout {} on {}", removed.name, removed.date);
                }
                None => bail!("no workout at row {}", index),
            }
        }

        Some(Commands::Stats { exercise }) => {
            let workouts = store.load_workouts();
            let all = stats::flatten(&workouts);
            let filter = exercise.unwrap_or_default();
            let filter_active = !filter.is_empty();
            let filtered = stats::filter_exercises(&all, &filter);
            let summary = stats::summarize(&all, &filtered, workouts.len(), filter_active);

            println!("Workout Statistics");
            println!("{:-<40}", "");
            println!("{}: {}", summary.count_label, summary.count_stat);
            println!("Total Volume: {} lbs", summary.total_volume);
            println!("Average RPE: {}", summary.average_rpe);
            println!("{}: {}", summary.top_label, summary.top_stat);

            let series = stats::volume_series(&filtered);
            if !series.is_empty() {
                println!();
                println!("Weight Lifted Over Time");
                println!("{:-<40}", "");
                for point in &series {
                    println!(
                        "{:10}  {:>10} lbs  {}",
                        point.date, point.total_weight, point.workout_name
                    );
                }
            }
        }

        Some(Commands::Schedule { command }) => run_schedule(&store, command)?,
    }

    Ok(())
}

fn run_schedule(store: &Store, command: ScheduleCommands) -> Result<()> {
    match command {
        ScheduleCommands::Show => {
            let sched = store.load_schedule();
            for day in schedule::week_days() {
                let plan = sched.day(day);
                let marker = if schedule::is_today(day) { " (today)" } else { "" };
                if sched.is_rest_day(day) {
                    println!("{}{}: Rest Day", schedule::day_name(day), marker);
                } else {
                    println!("{}{}: {}", schedule::day_name(day), marker, plan.workout_name);
                    for exercise in &plan.exercises {
                        println!("    {}", exercise);
                    }
                }
            }
        }

        ScheduleCommands::SetName { day, name } => {
            let day = parse_day(&day)?;
            let mut sched = store.load_schedule();
            sched.set_workout_name(day, name);
            store.save_schedule(&sched)?;
            println!("Updated {}", schedule::day_name(day));
        }

        ScheduleCommands::AddExercise { day, exercise } => {
            let day = parse_day(&day)?;
            let mut sched = store.load_schedule();
            sched.add_exercise(day, exercise);
            store.save_schedule(&sched)?;
            println!("Updated {}", schedule::day_name(day));
        }

        ScheduleCommands::UpdateExercise { day, index, exercise } => {
            let day = parse_day(&day)?;
            let mut sched = store.load_schedule();
            sched.update_exercise(day, index, exercise);
            store.save_schedule(&sched)?;
            println!("Updated {}", schedule::day_name(day));
        }

        ScheduleCommands::RemoveExercise { day, index } => {
            let day = parse_day(&day)?;
            let mut sched = store.load_schedule();
            sched.remove_exercise(day, index);
            store.save_schedule(&sched)?;
            println!("Updated {}", schedule::day_name(day));
        }
    }

    Ok(())
}

fn parse_day(raw: &str) -> Result<Weekday> {
    match schedule::parse_day(raw) {
        Some(day) => Ok(day),
        None => bail!("unknown day: {}", raw),
    }
}
