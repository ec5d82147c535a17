//! One module per subcommand, each exposing `execute`.

pub mod add;
pub mod backup;
pub mod clear;
pub mod completions;
pub mod export;
pub mod list;
pub mod overwrite;
pub mod show;
