use std::ops::Range;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::session::problem::{Problem, SolvedSet};
use crate::ui::theme::{self, RatingBand};

const CONTEST_WIDTH: usize = 12;
const INDEX_WIDTH: usize = 10;
const SOLVED_COUNT_WIDTH: usize = 12;
const RATING_WIDTH: usize = 12;
const SOLVED_WIDTH: usize = 12;
const SEPARATORS: usize = 5;
const MIN_NAME_WIDTH: usize = 10;

/// Header, blank line, page footer, key hint.
pub const CHROME_LINES: usize = 4;

pub const KEY_HINT: &str =
    "Press 'n' for next page, 'p' for previous page, 'j' to jump to a page, or 'q' to quit:";

const ELLIPSIS: &str = "...";

/// One screenful of text, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub struct TableView<'a> {
    problems: &'a [Problem],
    solved: &'a SolvedSet,
    page_size: usize,
    base_url: &'a str,
}

impl<'a> TableView<'a> {
    pub fn new(problems: &'a [Problem], solved: &'a SolvedSet, page_size: usize, base_url: &'a str) -> Self {
        Self {
            problems,
            solved,
            page_size: page_size.max(1),
            base_url,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.problems.len().div_ceil(self.page_size)
    }

    /// Rows shown for `page`: they start at the page boundary and run for as
    /// many lines as the terminal has room for.
    pub fn visible_range(&self, page: usize, height: u16) -> Range<usize> {
        let total = self.problems.len();
        let available = (height as usize).saturating_sub(CHROME_LINES).max(1);
        let start = page.saturating_sub(1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(available).min(total);
        start..end
    }

    pub fn render(&self, page: usize, width: u16, height: u16) -> Frame {
        let name_width = name_width(width);
        let mut lines = Vec::new();

        lines.push(
            format!(
                "{:<CONTEST_WIDTH$} {:<INDEX_WIDTH$} {:<name_width$} {:<SOLVED_COUNT_WIDTH$} {:<RATING_WIDTH$} {:<SOLVED_WIDTH$}",
                "Contest ID", "Problem", "Name", "Solved Count", "Rating", "Solved"
            )
            .with(theme::HEADER)
            .bold()
            .to_string(),
        );

        for problem in &self.problems[self.visible_range(page, height)] {
            lines.push(self.render_row(problem, name_width));
        }

        lines.push(String::new());
        lines.push(format!("Page {page} of {}", self.total_pages()));
        lines.push(KEY_HINT.to_string());
        Frame { lines }
    }

    fn render_row(&self, problem: &Problem, name_width: usize) -> String {
        let contest = format!("{:<CONTEST_WIDTH$}", problem.contest_id)
            .with(theme::CONTEST_ID)
            .bold();
        let index = format!("{:<INDEX_WIDTH$}", problem.index)
            .with(theme::PROBLEM_INDEX)
            .bold();
        let name = pad(&truncate(&problem.name, name_width), name_width);
        let name = hyperlink(&problem.url(self.base_url), &name);

        let rating = format!("{:<RATING_WIDTH$}", problem.rating);
        let rating = match RatingBand::for_rating(problem.rating).color() {
            Some(color) => rating.with(color).bold().to_string(),
            None => rating,
        };

        let solved = if self.solved.is_solved(problem) {
            "Yes".with(theme::SOLVED_YES).bold()
        } else {
            "No".with(theme::SOLVED_NO).bold()
        };

        format!(
            "{contest} {index} {name} {:<SOLVED_COUNT_WIDTH$} {rating} {solved}",
            problem.solved_count
        )
    }
}

pub fn name_width(width: u16) -> usize {
    let fixed = CONTEST_WIDTH + INDEX_WIDTH + SOLVED_COUNT_WIDTH + RATING_WIDTH + SOLVED_WIDTH + SEPARATORS;
    (width as usize).saturating_sub(fixed).max(MIN_NAME_WIDTH)
}

/// Cuts `text` to at most `width` terminal columns, ending in `...` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return ELLIPSIS[..width].to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + ELLIPSIS.len() > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Left-aligns `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// OSC 8 terminal hyperlink.
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}
