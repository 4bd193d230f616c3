use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trainer_api::Experience;
use training::phone;

/// Sign-in form state: a digits-only phone number under entry.
#[derive(Debug, Default)]
pub struct SignInForm {
    pub phone: String,
}

impl SignInForm {
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.phone.len() < 11 {
            self.phone.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.phone.pop();
    }
}

/// Fields of the sign-up form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    FirstName,
    LastName,
    Phone,
    Experience,
    IsTrainer,
    InviteCode,
}

impl SignUpField {
    pub fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Phone,
            Self::Phone => Self::Experience,
            Self::Experience => Self::IsTrainer,
            Self::IsTrainer => Self::InviteCode,
            Self::InviteCode => Self::FirstName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::FirstName => Self::InviteCode,
            Self::LastName => Self::FirstName,
            Self::Phone => Self::LastName,
            Self::Experience => Self::Phone,
            Self::IsTrainer => Self::Experience,
            Self::InviteCode => Self::IsTrainer,
        }
    }
}

/// Sign-up form state. The phone number arrives pre-filled from the failed
/// sign-in attempt; the experience list comes from the server.
#[derive(Debug)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub invite_code: String,
    pub is_trainer: bool,
    pub experiences: Vec<Experience>,
    pub experience_index: usize,
    pub focus: SignUpField,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            invite_code: String::new(),
            is_trainer: false,
            experiences: Vec::new(),
            experience_index: 0,
            focus: SignUpField::FirstName,
        }
    }
}

impl SignUpForm {
    pub fn selected_experience(&self) -> Option<&Experience> {
        self.experiences.get(self.experience_index)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        if self.focus == SignUpField::InviteCode && !self.is_trainer {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        if self.focus == SignUpField::InviteCode && !self.is_trainer {
            self.focus = self.focus.previous();
        }
    }

    pub fn cycle_experience(&mut self, delta: i32) {
        if self.experiences.is_empty() {
            return;
        }
        let len = self.experiences.len() as i32;
        let index = (self.experience_index as i32 + delta).rem_euclid(len);
        self.experience_index = index as usize;
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            SignUpField::FirstName => self.first_name.push(c),
            SignUpField::LastName => self.last_name.push(c),
            SignUpField::Phone => {
                if c.is_ascii_digit() && self.phone.len() < 11 {
                    self.phone.push(c);
                }
            }
            SignUpField::InviteCode => {
                if c.is_ascii_digit() && self.invite_code.len() < 9 {
                    self.invite_code.push(c);
                }
            }
            SignUpField::Experience | SignUpField::IsTrainer => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            SignUpField::FirstName => {
                self.first_name.pop();
            }
            SignUpField::LastName => {
                self.last_name.pop();
            }
            SignUpField::Phone => {
                self.phone.pop();
            }
            SignUpField::InviteCode => {
                self.invite_code.pop();
            }
            SignUpField::Experience | SignUpField::IsTrainer => {}
        }
    }
}

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

/// The sign-in card: one masked phone field.
pub struct SignInCard<'a> {
    pub form: &'a SignInForm,
}

impl Widget for SignInCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let masked = if self.form.phone.is_empty() {
            "(00) 00000-0000".to_string()
        } else {
            phone::mask(&self.form.phone)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Sign in with your phone number",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                masked,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to sign in · q to quit",
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" traintty "))
            .render(area, buf);
    }
}

/// The sign-up card, shown when the server does not know the phone number.
pub struct SignUpCard<'a> {
    pub form: &'a SignUpForm,
}

impl Widget for SignUpCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.form;

        let experience = form
            .selected_experience()
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "<none loaded>".to_string());

        let mut lines = vec![
            Line::from(Span::styled(
                "Register",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line(
                "First name",
                form.first_name.clone(),
                form.focus == SignUpField::FirstName,
            ),
            field_line(
                "Last name",
                form.last_name.clone(),
                form.focus == SignUpField::LastName,
            ),
            field_line(
                "Phone number",
                phone::mask(&form.phone),
                form.focus == SignUpField::Phone,
            ),
            field_line(
                "Experience level",
                format!("< {} >", experience),
                form.focus == SignUpField::Experience,
            ),
            field_line(
                "Instructor",
                if form.is_trainer { "yes" } else { "no" }.to_string(),
                form.focus == SignUpField::IsTrainer,
            ),
        ];

        if form.is_trainer {
            lines.push(field_line(
                "Invite code",
                form.invite_code.clone(),
                form.focus == SignUpField::InviteCode,
            ));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tab next field · arrows change value · Enter register · Esc back",
            Style::default().fg(Color::Gray),
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Sign up "))
            .render(area, buf);
    }
}
