use crate::session::problem::Problem;

/// Inclusive rating window. Unrated problems carry rating 0, so any
/// positive lower bound drops them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingFilter {
    pub min: u32,
    pub max: u32,
}

impl RatingFilter {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_allowed(&self, problem: &Problem) -> bool {
        (self.min..=self.max).contains(&problem.rating)
    }

    pub fn filter(&self, problems: &[Problem]) -> Vec<Problem> {
        problems
            .iter()
            .filter(|p| self.is_allowed(p))
            .cloned()
            .collect()
    }
}
