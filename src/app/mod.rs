//! The application shell.
//!
//! [`App`] composes the [`ConfigForm`] and the [`SimulationRunner`] with
//! header and help chrome. Every state change goes through
//! [`App::update`], one [`Message`] at a time, and the side effects it
//! wants are returned as a [`Command`] for the runtime to carry out.
//! [`App::view`] is a pure read of the current state.

mod keymap;

pub use keymap::{Action, Binding, Keymap, Phase};

use crate::actor::{KeyCode, KeyModifiers};
use crate::config::AppConfig;
use crate::form::{Confirm, ConfigForm, Direction};
use crate::render::{Frame, Line, Rect, Span, Theme};
use crate::sim::{
    log_lines, statistics_lines, DrawSource, RunPhase, SimulationConfig, SimulationRunner,
    TickOutcome,
};
use crate::widget::Edit;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Rows taken by the header: title and rule.
const HEADER_ROWS: u16 = 2;
/// Width of the statistics column in the simulation view.
const STATS_WIDTH: u16 = 36;

/// Everything [`App::update`] reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during the press.
        modifiers: KeyModifiers,
    },
    /// Pasted text, typed into the focused field.
    Paste(String),
    /// The terminal changed size.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// The draw timer fired.
    Tick,
    /// The form produced a valid configuration.
    ConfigAccepted(SimulationConfig),
}

impl Message {
    /// Shorthand for a key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Side effects requested by [`App::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Nothing to do.
    #[default]
    None,
    /// Leave the application.
    Quit,
    /// Deliver [`Message::Tick`] once after the delay.
    ScheduleTick(Duration),
    /// Feed a message straight back into `update`.
    Msg(Message),
    /// Several commands, carried out in order.
    Batch(Vec<Command>),
}

/// The application shell.
#[derive(Debug)]
pub struct App<D> {
    form: Option<ConfigForm>,
    runner: SimulationRunner<D>,
    keymap: Keymap,
    full_help: bool,
    width: u16,
    height: u16,
    title: String,
    theme: Theme,
}

impl<D: DrawSource> App<D> {
    /// Create the shell showing an empty form.
    pub fn new(draws: D, config: AppConfig, width: u16, height: u16) -> Self {
        Self {
            form: Some(ConfigForm::new()),
            runner: SimulationRunner::new(draws, config.log_capacity),
            keymap: Keymap,
            full_help: false,
            width,
            height,
            title: config.title,
            theme: config.theme,
        }
    }

    /// Which machine currently receives input.
    pub const fn phase(&self) -> Phase {
        if self.form.is_some() {
            Phase::Form
        } else {
            Phase::Simulation
        }
    }

    /// The form, while it is active.
    pub const fn form(&self) -> Option<&ConfigForm> {
        self.form.as_ref()
    }

    /// The simulation runner.
    pub const fn runner(&self) -> &SimulationRunner<D> {
        &self.runner
    }

    /// Whether the full help is shown.
    pub const fn full_help(&self) -> bool {
        self.full_help
    }

    /// Terminal size the app lays out for.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Handle one message.
    pub fn update(&mut self, msg: Message, now: Instant) -> Command {
        match msg {
            Message::Key { code, modifiers } => {
                let phase = self.phase();
                match self.keymap.resolve(phase, code, modifiers) {
                    Some(action) => self.perform(action),
                    None => Command::None,
                }
            }
            Message::Paste(text) => {
                if let Some(form) = self.form.as_mut() {
                    for c in text.chars().filter(|c| !c.is_control()) {
                        form.edit(Edit::Insert(c));
                    }
                }
                Command::None
            }
            Message::Resize { width, height } => {
                debug!(width, height, "resize");
                self.width = width;
                self.height = height;
                Command::None
            }
            Message::Tick => match self.runner.tick(now) {
                TickOutcome::Drawn { next } => Command::ScheduleTick(next),
                TickOutcome::Won | TickOutcome::Ignored => Command::None,
            },
            Message::ConfigAccepted(config) => {
                info!(chances = config.chances(), "configuration accepted");
                self.form = None;
                let delay = self.runner.start(config, now);
                Command::ScheduleTick(delay)
            }
        }
    }

    fn perform(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => return Command::Quit,
            Action::ToggleHelp => self.full_help = !self.full_help,
            Action::NextField | Action::PrevField | Action::Confirm | Action::Edit(_) => {
                return self.perform_form(action);
            }
            Action::Restart => {
                if self.runner.phase() == RunPhase::Finished {
                    if let Some(config) = self.runner.config() {
                        return Command::Msg(Message::ConfigAccepted(*config));
                    }
                }
            }
            Action::ScrollUp
            | Action::ScrollDown
            | Action::PageUp
            | Action::PageDown
            | Action::ScrollToBottom => self.scroll(action),
        }
        Command::None
    }

    fn perform_form(&mut self, action: Action) -> Command {
        let Some(form) = self.form.as_mut() else {
            return Command::None;
        };
        match action {
            Action::NextField => form.advance_focus(Direction::Forward),
            Action::PrevField => form.advance_focus(Direction::Backward),
            Action::Edit(edit) => form.edit(edit),
            Action::Confirm => {
                if let Confirm::Accepted(config) = form.confirm() {
                    return Command::Msg(Message::ConfigAccepted(config));
                }
            }
            _ => {}
        }
        Command::None
    }

    fn scroll(&mut self, action: Action) {
        let page = usize::from(self.layout().1.height.max(1));
        let Some(log) = self.runner.log_mut() else {
            return;
        };
        match action {
            Action::ScrollUp => log.scroll_up(1),
            Action::ScrollDown => log.scroll_down(1),
            Action::PageUp => log.scroll_up(page),
            Action::PageDown => log.scroll_down(page),
            Action::ScrollToBottom => log.scroll_to_bottom(),
            _ => {}
        }
    }

    fn help_rows(&self) -> u16 {
        if self.full_help {
            let entries = self.keymap.help(self.phase()).len();
            u16::try_from(entries).unwrap_or(u16::MAX)
        } else {
            1
        }
    }

    /// Header, body and help bar areas.
    fn layout(&self) -> (Rect, Rect, Rect) {
        let screen = Rect::from_size(self.width, self.height);
        let (header, rest) = screen.split_vertical(HEADER_ROWS);
        let (body, footer) = rest.split_bottom(self.help_rows());
        (header, body.inset(1, 0), footer.inset(1, 0))
    }

    /// Render the whole screen at time `now`.
    pub fn view(&self, now: Instant) -> Frame {
        let mut frame = Frame::new(self.width, self.height);
        let (header, body, footer) = self.layout();

        frame.push(header, self.header_lines());

        match &self.form {
            Some(form) => frame.push(body, form.view(&self.theme, usize::from(body.width))),
            None => self.view_simulation(&mut frame, body, now),
        }

        frame.push(footer, self.help_lines());
        frame
    }

    fn header_lines(&self) -> Vec<Line> {
        let width = usize::from(self.width);
        vec![
            Line::styled(self.title.clone(), self.theme.title).centered(width),
            Line::styled("─".repeat(width), self.theme.rule),
        ]
    }

    fn view_simulation(&self, frame: &mut Frame, body: Rect, now: Instant) {
        let Some(stats) = self.runner.statistics(now) else {
            return;
        };
        let (stats_area, rest) = body.split_horizontal(STATS_WIDTH.min(body.width / 2));
        let (border, log_area) = rest.split_horizontal(2);

        frame.push(stats_area, statistics_lines(&stats, &self.theme));

        let border_line = Line::styled("│", self.theme.log_border);
        frame.push(border, vec![border_line; usize::from(border.height)]);

        if let Some(state) = self.runner.state() {
            let height = usize::from(log_area.height);
            frame.push(log_area, log_lines(state.log(), height, &self.theme));
        }
    }

    fn help_lines(&self) -> Vec<Line> {
        let phase = self.phase();
        if self.full_help {
            return self
                .keymap
                .help(phase)
                .iter()
                .map(|b| {
                    Line::from_spans(vec![
                        Span::styled(format!("{:<12}", b.keys), self.theme.help_key),
                        Span::styled(b.description, self.theme.help_desc),
                    ])
                })
                .collect();
        }

        let mut spans = Vec::new();
        for (i, b) in self.keymap.short_help(phase).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.help_desc));
            }
            spans.push(Span::styled(b.keys, self.theme.help_key));
            spans.push(Span::styled(format!(" {}", b.description), self.theme.help_desc));
        }
        vec![Line::from_spans(spans)]
    }
}
