use std::thread;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use crate::remote::JudgeApi;
use crate::session::problem::{Problem, SolvedSet};

#[derive(Clone, Debug, Default)]
pub struct FetchedData {
    pub problems: Vec<Problem>,
    pub solved: SolvedSet,
}

/// Runs both judge reads on their own threads while `alongside` runs on the
/// calling thread, then waits for all three. Each worker owns its result
/// until the join; nothing is shared while they run. Any fetch failure fails
/// the whole call, even if the other read succeeded.
pub fn fetch_all<A, T, F>(api: &A, tags: &[&str], handle: &str, alongside: F) -> Result<(FetchedData, T)>
where
    A: JudgeApi + ?Sized,
    F: FnOnce() -> T,
{
    info!(?tags, handle, "starting concurrent fetch");
    let (problems, solved, extra) = thread::scope(|scope| {
        let problems = scope.spawn(|| api.problems_by_tags(tags));
        let solved = scope.spawn(|| api.solved_problems(handle));
        let extra = alongside();
        (problems.join(), solved.join(), extra)
    });

    let problems = problems
        .map_err(|_| anyhow!("problem fetch thread panicked"))?
        .context("failed to fetch problems")?;
    let solved = solved
        .map_err(|_| anyhow!("solved fetch thread panicked"))?
        .context("failed to fetch solved problems")?;
    info!(problems = problems.len(), solved = solved.len(), "fetch complete");

    Ok((FetchedData { problems, solved }, extra))
}
