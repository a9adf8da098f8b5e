//! Command-line explorer for per-country health indicator workbooks.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
