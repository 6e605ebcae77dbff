//! Command implementations for the linebench CLI
//!
//! Each command is organized into its own module and receives the already
//! merged configuration plus the shared output handler.

pub mod compare;
pub mod config;
pub mod generate;
