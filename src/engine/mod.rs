pub mod filter;
pub mod fuzzy;
pub mod sort;
pub mod tags;
