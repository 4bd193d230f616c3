use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trainer_api::Session;
use training::{exercise_outcome, ExerciseOutcome};

/// One exercise of the active session at a time, with its position in the
/// plan and its current outcome.
pub struct TaskCard<'a> {
    pub session: &'a Session,
    pub index: usize,
}

impl Widget for TaskCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let training_name = self
            .session
            .training
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("Training");
        let started = self
            .session
            .started_at
            .with_timezone(&Local)
            .format("%H:%M");
        let title = format!(" {} [started at {}] ", training_name, started);

        let exercises = self.session.exercises.as_deref().unwrap_or(&[]);

        let mut lines = vec![Line::from("")];

        match exercises.get(self.index) {
            Some(exercise) => {
                let name = exercise
                    .exercise
                    .as_ref()
                    .map(|e| e.name.as_str())
                    .unwrap_or("Exercise");
                let xp = exercise
                    .exercise
                    .as_ref()
                    .map(|e| e.xp_amount)
                    .unwrap_or(0);

                lines.push(Line::from(vec![
                    Span::styled(
                        name.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" ({}xp)", xp), Style::default().fg(Color::Gray)),
                    Span::raw("   "),
                    Span::styled(
                        format!("{} / {}", self.index + 1, exercises.len()),
                        Style::default().fg(Color::Gray),
                    ),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "{} series of {} repetitions",
                    exercise.series, exercise.times
                )));

                let outcome = match exercise_outcome(exercise) {
                    ExerciseOutcome::Pending => {
                        Span::styled("pending", Style::default().fg(Color::Gray))
                    }
                    ExerciseOutcome::Completed => Span::styled(
                        "completed",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    ExerciseOutcome::Skipped => Span::styled(
                        "skipped",
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                };
                lines.push(Line::from(""));
                lines.push(Line::from(outcome));
            }
            None => lines.push(Line::from("This training has no exercises")),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←/→ exercise · f finish · s skip · r restore · x stop training",
            Style::default().fg(Color::Gray),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
