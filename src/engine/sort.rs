use std::cmp::Ordering;

use crate::session::problem::Problem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// `d` means descending; every other token (including none) ascending.
    pub fn from_token(token: &str) -> Self {
        if token == "d" {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }

    fn compare(self, a: &Problem, b: &Problem) -> Ordering {
        let ord = a
            .rating
            .cmp(&b.rating)
            .then(a.solved_count.cmp(&b.solved_count));
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Rating first, solved count second, both in `order`'s direction. Full ties
/// keep their fetch order.
pub fn sort_problems(problems: &mut [Problem], order: SortOrder) {
    problems.sort_by(|a, b| order.compare(a, b));
}
