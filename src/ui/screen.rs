use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode};

use crate::event::next_event;
use crate::session::pager::PagerInput;
use crate::ui::table::Frame;

/// What the navigation loop needs from a terminal.
pub trait Screen {
    fn size(&self) -> io::Result<(u16, u16)>;
    fn draw(&mut self, frame: &Frame) -> Result<()>;
    fn message(&mut self, text: &str) -> Result<()>;
    /// One keystroke, no echo.
    fn read_input(&mut self) -> Result<PagerInput>;
    /// A full line in normal (cooked) mode.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// How the terminal enters and leaves raw mode.
#[derive(Clone, Copy)]
pub struct ModeSwitch {
    pub enter: fn() -> io::Result<()>,
    pub leave: fn() -> io::Result<()>,
}

impl ModeSwitch {
    pub const TERMINAL: Self = Self {
        enter: enable_raw_mode,
        leave: disable_raw_mode,
    };
}

/// Raw mode held for the guard's lifetime, restored on drop (including
/// unwinding).
pub struct RawMode {
    active: bool,
    switch: ModeSwitch,
}

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        Self::with_switch(ModeSwitch::TERMINAL)
    }

    pub fn with_switch(switch: ModeSwitch) -> io::Result<Self> {
        (switch.enter)()?;
        Ok(Self { active: true, switch })
    }

    /// Cooked mode until the returned guard drops.
    pub fn suspend(&mut self) -> io::Result<Suspended<'_>> {
        (self.switch.leave)()?;
        self.active = false;
        Ok(Suspended { raw: self })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if self.active {
            let _ = (self.switch.leave)();
        }
    }
}

pub struct Suspended<'a> {
    raw: &'a mut RawMode,
}

impl Drop for Suspended<'_> {
    fn drop(&mut self) {
        if (self.raw.switch.enter)().is_ok() {
            self.raw.active = true;
        }
    }
}

pub struct TerminalScreen {
    out: Stdout,
    raw: RawMode,
}

impl TerminalScreen {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            out: io::stdout(),
            raw: RawMode::enable()?,
        })
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for (row, line) in frame.lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        // raw mode: no implicit carriage return
        write!(self.out, "\r\n{text}\r\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn read_input(&mut self) -> Result<PagerInput> {
        let event = next_event()?;
        Ok(PagerInput::from(&event))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let _cooked = self.raw.suspend()?;
        write!(self.out, "\r\n{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }
}
