pub mod pager;
pub mod problem;
pub mod query;
