pub mod browse;
pub mod prompt;
pub mod screen;
pub mod table;
pub mod theme;
