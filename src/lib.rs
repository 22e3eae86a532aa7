pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod output;
pub mod platform;
pub mod segment;
pub mod state;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ansi,
    Bash,
    Zsh,
}
