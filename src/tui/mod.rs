//! TUI module - Terminal dashboard with ratatui

use anyhow::Result;
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};

use crate::history::{self, SortKey};
use crate::stats;
use crate::store::{Store, WorkoutRecord};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const SORT_CYCLE: [SortKey; 6] = [
    SortKey::DateDesc,
    SortKey::DateAsc,
    SortKey::NameAsc,
    SortKey::NameDesc,
    SortKey::ExercisesAsc,
    SortKey::ExercisesDesc,
];

/// App state for the dashboard
pub struct App {
    store: Store,
    workouts: Vec<WorkoutRecord>,
    sort_index: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store) -> Self {
        let workouts = store.load_workouts();
        Self {
            store,
            workouts,
            sort_index: 0,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn sort_key(&self) -> SortKey {
        SORT_CYCLE[self.sort_index]
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(12),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new("strengthlog - Workout Tracker")
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        self.render_stats(frame, chunks[1]);
        self.render_history(frame, chunks[2]);
        self.render_chart(frame, chunks[3]);

        // Footer
        let footer = Paragraph::new("q: quit | r: reload | s: change sort")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[4]);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let all = stats::flatten(&self.workouts);
        let summary = stats::summarize(&all, &all, self.workouts.len(), false);

        let widgets = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let cells = [
            (summary.count_label, format!("{}", summary.count_stat)),
            ("Total Volume", format!("{} lbs", summary.total_volume)),
            ("Average RPE", format!("{}", summary.average_rpe)),
            (summary.top_label, summary.top_stat.clone()),
        ];
        for (i, (label, value)) in cells.iter().enumerate() {
            let widget = Paragraph::new(value.as_str())
                .style(Style::default().bold())
                .block(Block::default().borders(Borders::ALL).title(*label));
            frame.render_widget(widget, widgets[i]);
        }
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let view = history::filter_and_sort(&self.workouts, "", self.sort_key());

        let rows: Vec<Row> = view
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.workout.date.clone()),
                    Cell::from(r.workout.name.clone()),
                    Cell::from(r.workout.exercises.len().to_string()),
                    Cell::from(r.workout.notes.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(20),
                Constraint::Length(10),
                Constraint::Min(20),
            ],
        )
        .header(Row::new(vec!["Date", "Name", "Exercises", "Notes"]).style(Style::default().bold()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("History ({})", sort_label(self.sort_key()))),
        );

        frame.render_widget(table, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let flat = stats::flatten(&self.workouts);
        let series = stats::volume_series(&flat);

        // Only dated points can be placed on the x axis
        let dated: Vec<(f64, f64, &str)> = series
            .iter()
            .filter_map(|p| {
                history::parse_date(&p.date)
                    .map(|d| (d.num_days_from_ce() as f64, p.total_weight, p.date.as_str()))
            })
            .collect();

        let title = "Weight Lifted Over Time";
        if dated.is_empty() {
            let empty = Paragraph::new("No dated workouts to chart yet")
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(empty, area);
            return;
        }

        let points: Vec<(f64, f64)> = dated.iter().map(|(x, y, _)| (*x, *y)).collect();
        let x_min = dated.first().map(|(x, ..)| *x).unwrap_or(0.0);
        let x_max = dated.last().map(|(x, ..)| *x).unwrap_or(0.0).max(x_min + 1.0);
        let y_max = dated.iter().fold(1.0_f64, |acc, (_, y, _)| acc.max(*y));

        let datasets = vec![
            Dataset::default()
                .name("volume")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&points),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(title))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([x_min, x_max])
                    .labels([
                        dated.first().map(|(.., d)| *d).unwrap_or_default().to_string(),
                        dated.last().map(|(.., d)| *d).unwrap_or_default().to_string(),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("lbs")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, y_max])
                    .labels(["0".to_string(), format!("{}", y_max)]),
            );

        frame.render_widget(chart, area);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Char('r') => {
                            self.workouts = self.store.load_workouts();
                        }
                        KeyCode::Char('s') => {
                            self.sort_index = (self.sort_index + 1) % SORT_CYCLE.len();
                        }
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::DateDesc => "newest first",
        SortKey::DateAsc => "oldest first",
        SortKey::NameAsc => "name A-Z",
        SortKey::NameDesc => "name Z-A",
        SortKey::ExercisesAsc => "fewest exercises",
        SortKey::ExercisesDesc => "most exercises",
        SortKey::Unsorted => "unsorted",
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
