use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerInput {
    Next,
    Prev,
    Jump,
    Quit,
    /// Terminal resized; repaint without moving.
    Redraw,
    Other,
}

impl PagerInput {
    pub fn from_char(ch: char) -> Self {
        match ch {
            'n' => PagerInput::Next,
            'p' => PagerInput::Prev,
            'j' => PagerInput::Jump,
            'q' => PagerInput::Quit,
            _ => PagerInput::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    Viewing(usize),
    /// Waiting for a page number; `from` is where an invalid answer returns.
    Jumping { from: usize },
    Exiting,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JumpError {
    #[error("{0:?} is not a page number")]
    NotANumber(String),
    #[error("page {requested} is outside 1..={total}")]
    OutOfRange { requested: i64, total: usize },
    #[error("no page jump in progress")]
    NotJumping,
}

/// Page cursor over a list of `total_items`. Pages are 1-based. An empty
/// list still has a (blank) first page to rest on.
#[derive(Clone, Debug)]
pub struct Pager {
    state: PagerState,
    total_items: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            state: PagerState::Viewing(1),
            total_items,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Current page, or the page a pending jump started from.
    pub fn page(&self) -> Option<usize> {
        match self.state {
            PagerState::Viewing(page) | PagerState::Jumping { from: page } => Some(page),
            PagerState::Exiting => None,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.state == PagerState::Exiting
    }

    pub fn handle(&mut self, input: PagerInput) -> PagerState {
        if input == PagerInput::Quit {
            self.cancel();
            return self.state;
        }
        let PagerState::Viewing(page) = self.state else {
            return self.state;
        };
        self.state = match input {
            PagerInput::Next if page * self.page_size < self.total_items => {
                PagerState::Viewing(page + 1)
            }
            PagerInput::Prev if page > 1 => PagerState::Viewing(page - 1),
            PagerInput::Jump => PagerState::Jumping { from: page },
            _ => PagerState::Viewing(page),
        };
        debug!(?input, state = ?self.state, "pager transition");
        self.state
    }

    /// Resolves a pending jump. Whatever the outcome the pager is back to
    /// `Viewing`: the requested page on success, the original one otherwise.
    pub fn submit_jump(&mut self, answer: &str) -> Result<usize, JumpError> {
        let PagerState::Jumping { from } = self.state else {
            return Err(JumpError::NotJumping);
        };
        let result = self.parse_page(answer.trim());
        self.state = PagerState::Viewing(*result.as_ref().unwrap_or(&from));
        match &result {
            Ok(page) => debug!(page, "jumped"),
            Err(err) => warn!(%err, "rejected page jump"),
        }
        result
    }

    fn parse_page(&self, answer: &str) -> Result<usize, JumpError> {
        let requested: i64 = answer
            .parse()
            .map_err(|_| JumpError::NotANumber(answer.to_string()))?;
        let total = self.total_pages();
        if requested < 1 || requested as u64 > total as u64 {
            return Err(JumpError::OutOfRange { requested, total });
        }
        Ok(requested as usize)
    }

    /// Quit key or interrupt, from any state.
    pub fn cancel(&mut self) {
        self.state = PagerState::Exiting;
    }
}
