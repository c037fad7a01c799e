//! Command-line front end for the `wd` WebDriver client.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod styles;
