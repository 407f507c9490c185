use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::remote::schema::{parse_problemset, parse_user_status};
use crate::remote::{FetchError, JudgeApi};
use crate::session::problem::{Problem, SolvedSet};

pub struct CodeforcesClient {
    http: Client,
    base_url: String,
}

impl CodeforcesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, endpoint: &'static str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let url = format!("{}/api/{endpoint}", self.base_url);
        debug!(%url, ?query, "GET");
        let response = self.http.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.to_string(),
            });
        }
        let body = response.text()?;
        debug!(endpoint, bytes = body.len(), "response received");
        Ok(body)
    }
}

impl JudgeApi for CodeforcesClient {
    fn problems_by_tags(&self, tags: &[&str]) -> Result<Vec<Problem>, FetchError> {
        let joined = tags.join(";");
        let body = self.get("problemset.problems", &[("tags", joined.as_str())])?;
        let problems = parse_problemset(&body)?;
        info!(tags = %joined, count = problems.len(), "fetched problems");
        Ok(problems)
    }

    fn solved_problems(&self, handle: &str) -> Result<SolvedSet, FetchError> {
        let body = self.get("user.status", &[("handle", handle)])?;
        let solved = parse_user_status(&body)?;
        info!(handle, count = solved.len(), "fetched solved problems");
        Ok(solved)
    }
}
