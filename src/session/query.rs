use thiserror::Error;

use crate::engine::filter::RatingFilter;
use crate::engine::sort::SortOrder;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("expected `min max [order]`, got {0:?}")]
    MissingRating(String),
    #[error("{0:?} is not a valid rating")]
    InvalidRating(String),
    #[error("min rating {min} is above max rating {max}")]
    InvertedRange { min: u32, max: u32 },
}

/// The `minRating maxRating order` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingQuery {
    pub filter: RatingFilter,
    pub order: SortOrder,
}

impl RatingQuery {
    pub fn parse(line: &str) -> Result<Self, QueryError> {
        let mut tokens = line.split_whitespace();
        let (Some(min), Some(max)) = (tokens.next(), tokens.next()) else {
            return Err(QueryError::MissingRating(line.trim().to_string()));
        };
        let min = parse_rating(min)?;
        let max = parse_rating(max)?;
        if min > max {
            return Err(QueryError::InvertedRange { min, max });
        }
        let order = SortOrder::from_token(tokens.next().unwrap_or(""));
        Ok(Self {
            filter: RatingFilter::new(min, max),
            order,
        })
    }
}

fn parse_rating(token: &str) -> Result<u32, QueryError> {
    token
        .parse()
        .map_err(|_| QueryError::InvalidRating(token.to_string()))
}
