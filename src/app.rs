use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::info;

use crate::config::Config;
use crate::engine::sort::sort_problems;
use crate::engine::tags::{TagResolver, Vocabulary};
use crate::remote::JudgeApi;
use crate::remote::fetcher::fetch_all;
use crate::session::pager::Pager;
use crate::session::problem::{Problem, SolvedSet};
use crate::session::query::RatingQuery;
use crate::ui::browse::browse;
use crate::ui::prompt::{print_resolution, read_rating_query, read_topics};
use crate::ui::screen::Screen;
use crate::ui::table::TableView;

/// Filtered, sorted problems plus what the user already solved.
#[derive(Clone, Debug)]
pub struct Results {
    pub problems: Vec<Problem>,
    pub solved: SolvedSet,
    pub query: RatingQuery,
}

pub struct App {
    pub config: Config,
    resolver: TagResolver,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_vocabulary(config, Vocabulary::codeforces())
    }

    pub fn with_vocabulary(config: Config, vocabulary: Vocabulary) -> Self {
        Self {
            config,
            resolver: TagResolver::new(vocabulary),
        }
    }

    /// Topics -> tags -> (fetch || rating prompt) -> filter -> sort.
    pub fn collect<A, R, W>(&self, api: &A, input: &mut R, out: &mut W) -> Result<Results>
    where
        A: JudgeApi + ?Sized,
        R: BufRead,
        W: Write,
    {
        let topics = read_topics(input, out)?;
        let resolution = self.resolver.resolve(&topics);
        print_resolution(out, &resolution)?;
        info!(?topics, tags = ?resolution.tags(), "resolved topics");

        // An empty tag list would ask the judge for its whole problemset.
        let tags = resolution.tags();
        if tags.is_empty() {
            bail!("no topics given; enter at least one topic");
        }

        let (data, query) = fetch_all(api, &tags, &self.config.handle, || {
            read_rating_query(input, out)
        })?;
        let query = query?;

        let mut problems = query.filter.filter(&data.problems);
        sort_problems(&mut problems, query.order);
        info!(
            fetched = data.problems.len(),
            kept = problems.len(),
            min = query.filter.min,
            max = query.filter.max,
            order = query.order.as_str(),
            "filtered problems"
        );

        Ok(Results {
            problems,
            solved: data.solved,
            query,
        })
    }

    pub fn browse<S: Screen>(&self, screen: &mut S, results: &Results) -> Result<()> {
        let view = TableView::new(
            &results.problems,
            &results.solved,
            self.config.page_size,
            &self.config.api_base_url,
        );
        let mut pager = Pager::new(results.problems.len(), self.config.page_size);
        browse(screen, &mut pager, &view)
    }
}
