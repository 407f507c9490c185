use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::pager::PagerInput;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Blocks until the next key press or resize. Nothing else runs meanwhile.
pub fn next_event() -> anyhow::Result<AppEvent> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(AppEvent::Key(key)),
            Event::Resize(w, h) => return Ok(AppEvent::Resize(w, h)),
            _ => {}
        }
    }
}

impl From<&AppEvent> for PagerInput {
    fn from(event: &AppEvent) -> Self {
        match event {
            AppEvent::Key(key) => pager_input(*key),
            AppEvent::Resize(..) => PagerInput::Redraw,
        }
    }
}

/// Ctrl-C arrives as a key while the terminal is raw; it quits like `q`.
pub fn pager_input(key: KeyEvent) -> PagerInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PagerInput::Quit;
    }
    match key.code {
        KeyCode::Esc => PagerInput::Quit,
        KeyCode::Char(ch) => PagerInput::from_char(ch),
        _ => PagerInput::Other,
    }
}
