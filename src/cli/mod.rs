//! Command-line interface module.

mod args;
pub mod batch;
pub mod check;
mod common;
pub mod render;

pub use args::{Cli, Commands};
