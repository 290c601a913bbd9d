//! Interactive helper that finds Git repositories beneath one or more
//! search roots and opens a shell in the chosen one.

pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod scan;
pub mod select;
pub mod shell;
pub mod status;
pub mod ui;

pub use error::{Error, Result};
