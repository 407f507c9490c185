use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::warn;

use crate::engine::tags::TagResolution;
use crate::session::query::RatingQuery;

pub const TOPICS_PROMPT: &str = "Enter the topics (comma-separated):";
pub const QUERY_PROMPT: &str = "Enter min and max rating | Sort Order (a/d):";

/// Comma separated, trimmed, blanks dropped.
pub fn split_topics(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line)
}

pub fn read_topics<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    writeln!(out, "{TOPICS_PROMPT}")?;
    out.flush()?;
    Ok(split_topics(&read_line(input)?))
}

pub fn print_resolution<W: Write>(out: &mut W, resolution: &TagResolution) -> Result<()> {
    writeln!(out, "Fuzzy Matches:")?;
    for (topic, tag) in resolution.iter() {
        writeln!(out, "{topic} -> {tag}")?;
    }
    Ok(())
}

/// Asks until a well-formed `min max [order]` line arrives.
pub fn read_rating_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<RatingQuery> {
    writeln!(out, "{QUERY_PROMPT}")?;
    out.flush()?;
    loop {
        let line = read_line(input)?;
        match RatingQuery::parse(&line) {
            Ok(query) => return Ok(query),
            Err(err) => {
                warn!(%err, "rejected rating query");
                writeln!(out, "Invalid input: {err}. Try again:")?;
                out.flush()?;
            }
        }
    }
}
