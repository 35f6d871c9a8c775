use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal preconditions. Any of these makes the build meaningless.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Source code directory {} does not exist", .0.display())]
    MissingSourceDir(PathBuf),
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No source .c files found in directory {}", .0.display())]
    NoSources(PathBuf),
}

/// Failure to launch an external process, as opposed to a non-zero exit.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
