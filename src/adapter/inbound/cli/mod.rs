//! CLI module graph.

pub mod command;
pub mod import;
pub mod inventory;
pub mod output;
pub mod paths;
pub mod run;
pub mod shell;
