//! sprout - scaffold React components from the command line.

pub mod cli;
pub mod logging;
