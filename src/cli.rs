use clap::Parser;
use std::path::PathBuf;

use crate::ui::PickerChoice;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "repohop")]
#[command(version)]
#[command(about = "Find Git repositories under your search roots and open a shell in the one you pick")]
pub struct CliArgs {
    /// Directories to search for Git repositories (default: REPOHOP_PATH, then configured roots, then the current directory)
    pub dirs: Vec<String>,

    /// Recursion depth when scanning for Git repositories
    #[arg(long)]
    pub maxdepth: Option<u32>,

    /// Prompt style
    #[arg(long, value_enum, default_value_t = PickerChoice::Auto)]
    pub picker: PickerChoice,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
