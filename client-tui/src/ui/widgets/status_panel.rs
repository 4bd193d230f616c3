use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use training::Phase;

/// The three-way availability view: start prompt, or the cooldown notice
/// with the live countdown. The active-session case renders a [`TaskCard`]
/// instead.
///
/// [`TaskCard`]: super::TaskCard
pub struct StatusPanel<'a> {
    pub phase: Phase,
    pub countdown: Option<&'a str>,
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.phase {
            Phase::Active => vec![Line::from("Training in progress")],
            Phase::Ready => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "A training is ready for you!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to start",
                    Style::default().fg(Color::Gray),
                )),
            ],
            Phase::Cooldown => {
                let mut lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "No training available right now!",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Try coming back later...",
                        Style::default().fg(Color::Gray),
                    )),
                ];
                if let Some(countdown) = self.countdown {
                    lines.push(Line::from(""));
                    lines.push(Line::from(vec![
                        Span::raw("Next training available in: "),
                        Span::styled(
                            countdown.to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]));
                }
                lines
            }
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Training "))
            .render(area, buf);
    }
}
