pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;

// Re-export commonly used items
pub use cli::Cli;
pub use config::{Environment, LogConfig, LogSink, Verbosity};
