//! Command-line interface module.

mod args;
pub mod batch;
pub mod common;
pub mod render;

pub use args::{BatchArgs, Cli, Commands, DotsArgs, GridArgs};
