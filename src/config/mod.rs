//! Configuration — `config.toml` settings and data directory resolution.

pub mod settings;

pub use settings::{default_data_dir, Settings};
