pub mod client;
pub mod fetcher;
pub mod schema;

use thiserror::Error;

use crate::session::problem::{Problem, ProblemKey, SolvedSet};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} answered {status}")]
    Status { endpoint: &'static str, status: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("judge rejected the request: {comment}")]
    Api { comment: String },
    #[error("response has no result")]
    MissingResult,
    #[error("{problems} problems but {statistics} statistics entries")]
    StatisticsLength { problems: usize, statistics: usize },
    #[error("statistics entry {position} is for {statistics}, expected {problem}")]
    StatisticsOrder {
        position: usize,
        problem: ProblemKey,
        statistics: ProblemKey,
    },
}

/// The two reads the browser needs from the judge. Implementations are
/// shared between the fetch threads, hence `Sync`.
pub trait JudgeApi: Sync {
    fn problems_by_tags(&self, tags: &[&str]) -> Result<Vec<Problem>, FetchError>;
    fn solved_problems(&self, handle: &str) -> Result<SolvedSet, FetchError>;
}
