use thiserror::Error;

use crate::ui::PickError;

/// Fatal conditions; any of these aborts the run with exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no directories to search for Git repositories within them")]
    NoSearchRoots,

    #[error("no Git repositories found")]
    NoRepositoriesFound,

    #[error("executing {shell:?}: {source}")]
    ShellLaunch {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pick(#[from] PickError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
