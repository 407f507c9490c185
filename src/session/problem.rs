use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(rename = "contestId", default)]
    pub contest_id: u32,
    pub index: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub points: Option<f64>,
    /// 0 means unrated.
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Filled in from the problemStatistics payload.
    #[serde(rename = "solvedCount", default)]
    pub solved_count: u32,
}

impl Problem {
    pub fn key(&self) -> ProblemKey {
        ProblemKey::new(self.contest_id, &self.index)
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/contest/{}/problem/{}",
            base_url.trim_end_matches('/'),
            self.contest_id,
            self.index
        )
    }
}

/// `{contestId}_{index}`, the lookup key into a [`SolvedSet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKey(String);

impl ProblemKey {
    pub fn new(contest_id: u32, index: &str) -> Self {
        Self(format!("{contest_id}_{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolvedSet {
    keys: HashSet<ProblemKey>,
}

impl SolvedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ProblemKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &ProblemKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_solved(&self, problem: &Problem) -> bool {
        self.contains(&problem.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<ProblemKey> for SolvedSet {
    fn from_iter<I: IntoIterator<Item = ProblemKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
pub(crate) fn problem(contest_id: u32, index: &str, rating: u32, solved_count: u32) -> Problem {
    Problem {
        contest_id,
        index: index.to_string(),
        name: format!("Problem {contest_id}{index}"),
        kind: "PROGRAMMING".to_string(),
        points: None,
        rating,
        tags: Vec::new(),
        solved_count,
    }
}
