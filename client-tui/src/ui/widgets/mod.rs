mod confirm;
mod login;
mod status_panel;
mod task_card;

pub use confirm::ConfirmDialog;
pub use login::{SignInCard, SignInForm, SignUpCard, SignUpField, SignUpForm};
pub use status_panel::StatusPanel;
pub use task_card::TaskCard;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A rect centered in `area` with the given percentage size, for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
