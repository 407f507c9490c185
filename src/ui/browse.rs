use anyhow::Result;
use tracing::{info, warn};

use crate::session::pager::{Pager, PagerInput, PagerState};
use crate::ui::screen::Screen;
use crate::ui::table::TableView;

pub const JUMP_PROMPT: &str = "Enter page number: ";

/// Drives the pager until it exits. Every rest in `Viewing` repaints the
/// table before blocking on the next key.
pub fn browse<S: Screen>(screen: &mut S, pager: &mut Pager, view: &TableView<'_>) -> Result<()> {
    info!(
        items = pager.total_items(),
        pages = pager.total_pages(),
        "browsing"
    );
    loop {
        match pager.state() {
            PagerState::Viewing(page) => {
                paint(screen, view, page)?;
                let input = screen.read_input()?;
                pager.handle(input);
            }
            PagerState::Jumping { .. } => {
                let answer = screen.read_line(JUMP_PROMPT)?;
                if let Err(err) = pager.submit_jump(&answer) {
                    screen.message(&format!("Invalid page number ({err}). Press any key to continue."))?;
                    if read_key(screen)? == PagerInput::Quit {
                        pager.cancel();
                    }
                }
            }
            PagerState::Exiting => return Ok(()),
        }
    }
}

/// Next real keystroke; resizes don't count.
fn read_key<S: Screen>(screen: &mut S) -> Result<PagerInput> {
    loop {
        match screen.read_input()? {
            PagerInput::Redraw => continue,
            input => return Ok(input),
        }
    }
}

/// A frame whose size can't be read is skipped, not fatal.
fn paint<S: Screen>(screen: &mut S, view: &TableView<'_>, page: usize) -> Result<()> {
    match screen.size() {
        Ok((width, height)) => screen.draw(&view.render(page, width, height)),
        Err(err) => {
            warn!(%err, "terminal size unavailable");
            screen.message(&format!("Error getting terminal size: {err}"))
        }
    }
}
