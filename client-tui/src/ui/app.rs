use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use trainer_api::SignUpRequest;
use trainer_client::TrainerService;
use training::Phase;

use crate::state::AppSession;
use crate::ui::widgets::{
    centered_rect, ConfirmDialog, SignInCard, SignInForm, SignUpCard, SignUpField, SignUpForm,
    StatusPanel, TaskCard,
};

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    Training,
}

/// Actions that need a yes/no confirmation before the request goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingConfirm {
    Start,
    Stop,
}

impl PendingConfirm {
    fn prompt(self) -> &'static str {
        match self {
            Self::Start => "Start a new training?",
            Self::Stop => "Stop the training? This action is irreversible!",
        }
    }
}

/// Top-level UI state over an [`AppSession`].
pub struct App<S: TrainerService> {
    pub session: AppSession<S>,
    pub screen: Screen,
    sign_in: SignInForm,
    sign_up: SignUpForm,
    exercise_index: usize,
    confirm: Option<PendingConfirm>,
    should_quit: bool,
}

impl<S: TrainerService> App<S> {
    pub fn new(session: AppSession<S>) -> Self {
        Self {
            session,
            screen: Screen::SignIn,
            sign_in: SignInForm::default(),
            sign_up: SignUpForm::default(),
            exercise_index: 0,
            confirm: None,
            should_quit: false,
        }
    }

    fn exercise_count(&self) -> usize {
        self.session
            .status
            .active()
            .and_then(|s| s.exercises.as_ref())
            .map(|e| e.len())
            .unwrap_or(0)
    }

    fn clamp_exercise_index(&mut self) {
        let count = self.exercise_count();
        if count == 0 {
            self.exercise_index = 0;
        } else if self.exercise_index >= count {
            self.exercise_index = count - 1;
        }
    }

    async fn submit_sign_in(&mut self) {
        let phone = self.sign_in.phone.clone();
        if self.session.sign_in(&phone).await {
            self.screen = Screen::Training;
            self.exercise_index = 0;
        } else if self.session.auth.needs_sign_up {
            self.sign_up = SignUpForm {
                phone: self.session.auth.phone_number.clone(),
                ..SignUpForm::default()
            };
            if let Some(experiences) = self.session.load_experiences().await {
                self.sign_up.experiences = experiences;
            }
            self.screen = Screen::SignUp;
        }
    }

    async fn submit_sign_up(&mut self) {
        if self.sign_up.first_name.trim().is_empty() || self.sign_up.last_name.trim().is_empty() {
            self.session.status_message = Some("Fill in your first and last name".to_string());
            return;
        }
        let Some(experience) = self.sign_up.selected_experience() else {
            self.session.status_message = Some("Select an experience level".to_string());
            return;
        };

        let data = SignUpRequest {
            first_name: self.sign_up.first_name.trim().to_string(),
            last_name: self.sign_up.last_name.trim().to_string(),
            phone_number: self.sign_up.phone.clone(),
            experience_id: experience.id,
            is_trainer: self.sign_up.is_trainer.then_some(true),
            invite_code: if self.sign_up.is_trainer {
                self.sign_up.invite_code.parse().ok()
            } else {
                None
            },
        };

        if self.session.sign_up(data).await {
            self.screen = Screen::SignIn;
        }
    }

    async fn run_confirmed(&mut self, action: PendingConfirm) {
        match action {
            PendingConfirm::Start => {
                self.session.start_training().await;
                self.exercise_index = 0;
            }
            PendingConfirm::Stop => {
                self.session.stop_training().await;
                // The finished session granted xp; re-sign-in refreshes the
                // profile the same way the web client did.
                if self.session.status.phase() != Phase::Active {
                    let phone = self.session.auth.phone_number.clone();
                    if !phone.is_empty() {
                        self.session.sign_in(&phone).await;
                    }
                }
            }
        }
    }

    pub async fn handle_key(&mut self, code: KeyCode) {
        // A confirmation overlay swallows every key.
        if let Some(action) = self.confirm {
            match code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.confirm = None;
                    self.run_confirmed(action).await;
                    self.clamp_exercise_index();
                }
                KeyCode::Char('n') | KeyCode::Esc => self.confirm = None,
                _ => {}
            }
            return;
        }

        // Notices live until the next keystroke, like a dismissed alert.
        self.session.status_message = None;

        match self.screen {
            Screen::SignIn => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.sign_in.push_digit(c),
                KeyCode::Backspace => self.sign_in.backspace(),
                KeyCode::Enter => self.submit_sign_in().await,
                _ => {}
            },
            Screen::SignUp => match code {
                KeyCode::Esc => {
                    self.session.sign_out();
                    self.sign_in = SignInForm::default();
                    self.screen = Screen::SignIn;
                }
                KeyCode::Tab | KeyCode::Down => self.sign_up.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.sign_up.focus_previous(),
                KeyCode::Left => match self.sign_up.focus {
                    SignUpField::Experience => self.sign_up.cycle_experience(-1),
                    SignUpField::IsTrainer => self.sign_up.is_trainer = !self.sign_up.is_trainer,
                    _ => {}
                },
                KeyCode::Right => match self.sign_up.focus {
                    SignUpField::Experience => self.sign_up.cycle_experience(1),
                    SignUpField::IsTrainer => self.sign_up.is_trainer = !self.sign_up.is_trainer,
                    _ => {}
                },
                KeyCode::Char(c) => self.sign_up.input(c),
                KeyCode::Backspace => self.sign_up.backspace(),
                KeyCode::Enter => self.submit_sign_up().await,
                _ => {}
            },
            Screen::Training => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('o') => {
                    self.session.sign_out();
                    self.sign_in = SignInForm::default();
                    self.screen = Screen::SignIn;
                }
                KeyCode::Char('i') if self.session.auth.is_trainer() => {
                    self.session.request_invite_code().await;
                }
                KeyCode::Enter if self.session.status.phase() == Phase::Ready => {
                    self.confirm = Some(PendingConfirm::Start);
                }
                KeyCode::Char('x') if self.session.status.phase() == Phase::Active => {
                    self.confirm = Some(PendingConfirm::Stop);
                }
                KeyCode::Left => {
                    if self.exercise_index > 0 {
                        self.exercise_index -= 1;
                    }
                }
                KeyCode::Right => {
                    if self.exercise_index + 1 < self.exercise_count() {
                        self.exercise_index += 1;
                    }
                }
                KeyCode::Char('f') => self.exercise_action(ExerciseAction::Finish).await,
                KeyCode::Char('s') => self.exercise_action(ExerciseAction::Skip).await,
                KeyCode::Char('r') => self.exercise_action(ExerciseAction::Restore).await,
                _ => {}
            },
        }
    }

    async fn exercise_action(&mut self, action: ExerciseAction) {
        let exercise_id = self
            .session
            .status
            .active()
            .and_then(|s| s.exercises.as_ref())
            .and_then(|e| e.get(self.exercise_index))
            .map(|e| e.id);

        if let Some(id) = exercise_id {
            match action {
                ExerciseAction::Finish => self.session.finish_exercise(id).await,
                ExerciseAction::Skip => self.session.skip_exercise(id).await,
                ExerciseAction::Restore => self.session.restore_exercise(id).await,
            }
            self.clamp_exercise_index();
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        match self.screen {
            Screen::SignIn => f.render_widget(SignInCard { form: &self.sign_in }, chunks[1]),
            Screen::SignUp => f.render_widget(SignUpCard { form: &self.sign_up }, chunks[1]),
            Screen::Training => match self.session.status.active() {
                Some(session) => f.render_widget(
                    TaskCard {
                        session,
                        index: self.exercise_index,
                    },
                    chunks[1],
                ),
                None => f.render_widget(
                    StatusPanel {
                        phase: self.session.status.phase(),
                        countdown: self.session.countdown.as_deref(),
                    },
                    chunks[1],
                ),
            },
        }

        self.render_footer(f, chunks[2]);

        if let Some(action) = self.confirm {
            let area = centered_rect(50, 30, f.area());
            f.render_widget(
                ConfirmDialog {
                    prompt: action.prompt(),
                },
                area,
            );
        }
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let line = match &self.session.auth.user {
            Some(user) => {
                let mut spans = vec![
                    Span::styled(
                        format!("{} {}", user.first_name, user.last_name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "  ·  Level {}  ·  {}/{} xp",
                        user.level, user.current_xp, user.xp_to_next_level
                    )),
                ];
                if user.is_trainer {
                    spans.push(Span::styled(
                        "  ·  Instructor",
                        Style::default().fg(Color::Cyan),
                    ));
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled(
                "traintty",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        };

        f.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_footer(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let line = match &self.session.status_message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            None => match self.screen {
                Screen::Training if self.session.auth.is_trainer() => Line::from(Span::styled(
                    "o sign out · i invite code · q quit",
                    Style::default().fg(Color::Gray),
                )),
                Screen::Training => Line::from(Span::styled(
                    "o sign out · q quit",
                    Style::default().fg(Color::Gray),
                )),
                _ => Line::from(""),
            },
        };

        f.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

/// Run the TUI until the user quits.
pub async fn run_app<S: TrainerService>(session: AppSession<S>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    app.session.resume().await;
    if app.session.auth.authenticated {
        app.screen = Screen::Training;
    }

    let result = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend, S: TrainerService>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> anyhow::Result<()> {
    loop {
        // The countdown rides on the draw cadence; when the window is
        // reached the server decides what comes next.
        if app.session.tick(Utc::now()) {
            app.session.refresh_status().await;
        }

        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code).await;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

enum ExerciseAction {
    Finish,
    Skip,
    Restore,
}
