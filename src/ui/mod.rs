use clap::ValueEnum;
use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::debug;

mod fuzzy;
mod plain;

pub use fuzzy::FuzzyPicker;
pub use plain::PlainPicker;

/// Why a prompt produced no selection.
#[derive(Error, Debug)]
pub enum PickError {
    #[error("selection cancelled")]
    Cancelled,

    #[error("invalid selection")]
    InvalidSelection,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Interactive list selection. Implementations present a label and an
/// ordered option list and come back with the zero-based index of the
/// user's choice.
pub trait Picker {
    fn pick(&self, label: &str, options: &[String]) -> Result<usize, PickError>;
}

/// Prompt style requested on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerChoice {
    /// Fuzzy list on a terminal, numbered list otherwise
    Auto,
    /// Full-screen fuzzy-filtered list
    Fuzzy,
    /// Numbered list read from standard input
    Plain,
}

/// Resolves the prompt style. The fuzzy list takes over the whole screen,
/// so it needs both stdin and stdout to be terminals; anything else gets
/// the numbered fallback.
pub fn picker_for(choice: PickerChoice) -> Box<dyn Picker> {
    match choice {
        PickerChoice::Fuzzy => Box::new(FuzzyPicker),
        PickerChoice::Plain => Box::new(PlainPicker),
        PickerChoice::Auto => {
            if io::stdin().is_terminal() && io::stdout().is_terminal() {
                debug!("Using fuzzy picker");
                Box::new(FuzzyPicker)
            } else {
                debug!("Not a terminal, using plain picker");
                Box::new(PlainPicker)
            }
        }
    }
}
