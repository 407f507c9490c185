use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::remote::FetchError;
use crate::session::problem::{Problem, ProblemKey, SolvedSet};

pub const ACCEPTED_VERDICT: &str = "OK";

/// Envelope every Codeforces API call answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemsetResult {
    pub problems: Vec<Problem>,
    #[serde(rename = "problemStatistics")]
    pub problem_statistics: Vec<ProblemStatistics>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemStatistics {
    #[serde(rename = "contestId", default)]
    pub contest_id: u32,
    pub index: String,
    #[serde(rename = "solvedCount", default)]
    pub solved_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct Submission {
    pub problem: SubmissionProblem,
    #[serde(default)]
    pub verdict: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionProblem {
    #[serde(rename = "contestId", default)]
    pub contest_id: u32,
    pub index: String,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }
}

fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let response: ApiResponse<T> = serde_json::from_str(body)?;
    if response.status != "OK" {
        return Err(FetchError::Api {
            comment: response
                .comment
                .unwrap_or_else(|| format!("status {}", response.status)),
        });
    }
    response.result.ok_or(FetchError::MissingResult)
}

/// Decodes a problemset.problems body and zips solved counts onto the
/// problems. The two arrays must agree position by position.
pub fn parse_problemset(body: &str) -> Result<Vec<Problem>, FetchError> {
    let ProblemsetResult {
        mut problems,
        problem_statistics,
    } = unwrap_envelope(body)?;

    if problems.len() != problem_statistics.len() {
        return Err(FetchError::StatisticsLength {
            problems: problems.len(),
            statistics: problem_statistics.len(),
        });
    }
    for (position, (problem, stats)) in problems.iter_mut().zip(problem_statistics).enumerate() {
        if problem.contest_id != stats.contest_id || problem.index != stats.index {
            return Err(FetchError::StatisticsOrder {
                position,
                problem: problem.key(),
                statistics: ProblemKey::new(stats.contest_id, &stats.index),
            });
        }
        problem.solved_count = stats.solved_count;
    }
    Ok(problems)
}

/// Decodes a user.status body into the set of accepted problems.
pub fn parse_user_status(body: &str) -> Result<SolvedSet, FetchError> {
    let submissions: Vec<Submission> = unwrap_envelope(body)?;
    Ok(submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(|s| ProblemKey::new(s.problem.contest_id, &s.problem.index))
        .collect())
}
