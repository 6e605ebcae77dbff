//! Configuration management for linebench
//!
//! Settings are layered with figment: embedded defaults, then user and repo
//! TOML files (or a single custom file), then `LINEBENCH_` environment
//! variables. CLI flags are applied on top by the command layer.

mod core;

pub use self::core::{BenchConfig, BenchSection, ENV_PREFIX, FixtureSection, REPO_CONFIG_FILE};
