//! Key bindings per phase, and the help text generated from them.

use crate::actor::{KeyCode, KeyModifiers};
use crate::widget::Edit;

/// Which machine is receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The configuration form.
    Form,
    /// The running or finished simulation.
    Simulation,
}

/// What a key press means in the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Switch between short and full help.
    ToggleHelp,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Enter: advance or submit.
    Confirm,
    /// Edit the focused field.
    Edit(Edit),
    /// Start a fresh run with the same configuration.
    Restart,
    /// Scroll the log one line towards older entries.
    ScrollUp,
    /// Scroll the log one line towards newer entries.
    ScrollDown,
    /// Scroll the log a page towards older entries.
    PageUp,
    /// Scroll the log a page towards newer entries.
    PageDown,
    /// Jump to the newest log entry.
    ScrollToBottom,
}

/// A help entry: the keys and what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Key names as shown to the user.
    pub keys: &'static str,
    /// Short description.
    pub description: &'static str,
}

const fn binding(keys: &'static str, description: &'static str) -> Binding {
    Binding { keys, description }
}

const FORM_HELP: &[Binding] = &[
    binding("tab/↓", "next field"),
    binding("shift+tab/↑", "previous field"),
    binding("enter", "continue"),
    binding("?", "toggle help"),
    binding("esc", "quit"),
];

const SIMULATION_HELP: &[Binding] = &[
    binding("↑/k", "scroll up"),
    binding("↓/j", "scroll down"),
    binding("pgup/pgdn", "page"),
    binding("end/G", "newest"),
    binding("s", "restart when finished"),
    binding("?", "toggle help"),
    binding("q", "quit"),
];

/// Maps physical keys to [`Action`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keymap;

impl Keymap {
    /// Resolve a key press for `phase`. Unbound keys yield `None`.
    pub fn resolve(self, phase: Phase, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if modifiers.control {
            return match code {
                KeyCode::Char('c') => Some(Action::Quit),
                KeyCode::Char('n') if phase == Phase::Form => Some(Action::NextField),
                KeyCode::Char('p') if phase == Phase::Form => Some(Action::PrevField),
                _ => None,
            };
        }

        match phase {
            Phase::Form => Self::resolve_form(code),
            Phase::Simulation => Self::resolve_simulation(code),
        }
    }

    const fn resolve_form(code: KeyCode) -> Option<Action> {
        Some(match code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Tab | KeyCode::Down => Action::NextField,
            KeyCode::BackTab | KeyCode::Up => Action::PrevField,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Char(c) => Action::Edit(Edit::Insert(c)),
            KeyCode::Backspace => Action::Edit(Edit::Backspace),
            KeyCode::Delete => Action::Edit(Edit::Delete),
            KeyCode::Left => Action::Edit(Edit::Left),
            KeyCode::Right => Action::Edit(Edit::Right),
            KeyCode::Home => Action::Edit(Edit::Home),
            KeyCode::End => Action::Edit(Edit::End),
            KeyCode::PageUp | KeyCode::PageDown => return None,
        })
    }

    const fn resolve_simulation(code: KeyCode) -> Option<Action> {
        Some(match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('s') => Action::Restart,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::End | KeyCode::Char('G') => Action::ScrollToBottom,
            _ => return None,
        })
    }

    /// Every binding for `phase`, in display order.
    pub const fn help(self, phase: Phase) -> &'static [Binding] {
        match phase {
            Phase::Form => FORM_HELP,
            Phase::Simulation => SIMULATION_HELP,
        }
    }

    /// The bindings shown in the one-line help bar.
    pub fn short_help(self, phase: Phase) -> Vec<Binding> {
        let help = self.help(phase);
        let keep: &[&str] = match phase {
            Phase::Form => &["enter", "?", "esc"],
            Phase::Simulation => &["s", "?", "q"],
        };
        help.iter().filter(|b| keep.contains(&b.keys)).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(phase: Phase, code: KeyCode) -> Option<Action> {
        Keymap.resolve(phase, code, KeyModifiers::NONE)
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(press(Phase::Form, KeyCode::Tab), Some(Action::NextField));
        assert_eq!(press(Phase::Form, KeyCode::BackTab), Some(Action::PrevField));
        assert_eq!(press(Phase::Form, KeyCode::Enter), Some(Action::Confirm));
        assert_eq!(press(Phase::Form, KeyCode::Char('5')), Some(Action::Edit(Edit::Insert('5'))));
        // In the form `q` is just text.
        assert_eq!(press(Phase::Form, KeyCode::Char('q')), Some(Action::Edit(Edit::Insert('q'))));
        assert_eq!(press(Phase::Form, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(press(Phase::Form, KeyCode::PageUp), None);
    }

    #[test]
    fn test_simulation_keys() {
        assert_eq!(press(Phase::Simulation, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(Phase::Simulation, KeyCode::Char('s')), Some(Action::Restart));
        assert_eq!(press(Phase::Simulation, KeyCode::Char('k')), Some(Action::ScrollUp));
        assert_eq!(press(Phase::Simulation, KeyCode::Char('G')), Some(Action::ScrollToBottom));
        assert_eq!(press(Phase::Simulation, KeyCode::Enter), None);
        assert_eq!(press(Phase::Simulation, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_keys() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(Keymap.resolve(Phase::Form, KeyCode::Char('c'), ctrl), Some(Action::Quit));
        assert_eq!(Keymap.resolve(Phase::Simulation, KeyCode::Char('c'), ctrl), Some(Action::Quit));
        assert_eq!(Keymap.resolve(Phase::Form, KeyCode::Char('n'), ctrl), Some(Action::NextField));
        assert_eq!(Keymap.resolve(Phase::Simulation, KeyCode::Char('n'), ctrl), None);
    }

    #[test]
    fn test_short_help_is_subset() {
        for phase in [Phase::Form, Phase::Simulation] {
            let short = Keymap.short_help(phase);
            assert_eq!(short.len(), 3);
            assert!(short.iter().all(|b| Keymap.help(phase).contains(b)));
        }
    }
}
