// Library target shared by the binary, the integration tests and the
// criterion benchmarks.

pub mod app;
pub mod config;
pub mod engine;
pub mod event;
pub mod logging;
pub mod remote;
pub mod session;
pub mod ui;
