//! Data model for a single build.
//!
//! Everything here lives for one invocation only:
//! - Source and object file identities
//! - Per-file compile outcomes and their aggregate
//! - Link and run outcomes, and the overall report

use std::path::{Path, PathBuf};

/// A `.c` file discovered under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A compiled artifact under the object directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectFile {
    pub path: PathBuf,
}

impl ObjectFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of compiling one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Compiler launched and the object appeared at the derived path.
    Compiled(ObjectFile),
    /// Compiler could not be launched.
    LaunchFailed { source: SourceFile, reason: String },
    /// Compiler ran but no object exists at the derived path.
    MissingObject { source: SourceFile, object: PathBuf, output: String },
}

impl CompileOutcome {
    pub fn object(&self) -> Option<&ObjectFile> {
        match self {
            CompileOutcome::Compiled(object) => Some(object),
            _ => None,
        }
    }
}

/// Aggregate of the compile phase.
///
/// `objects` holds exactly the files whose compile succeeded, in compile
/// order, so `objects.len() <= requested` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildResult {
    pub requested: usize,
    pub objects: Vec<ObjectFile>,
    pub failed: Vec<SourceFile>,
}

impl BuildResult {
    pub fn new(requested: usize) -> Self {
        Self { requested, objects: Vec::with_capacity(requested), failed: Vec::new() }
    }

    /// Fold one compile outcome into the aggregate.
    pub fn record(&mut self, outcome: CompileOutcome) {
        match outcome {
            CompileOutcome::Compiled(object) => self.objects.push(object),
            CompileOutcome::LaunchFailed { source, .. }
            | CompileOutcome::MissingObject { source, .. } => self.failed.push(source),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.objects.len()
    }

    pub fn all_compiled(&self) -> bool {
        self.succeeded() == self.requested
    }
}

/// Result of the link phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Exit code 0 and the artifact exists.
    Linked(PathBuf),
    /// No object files; the linker was never invoked.
    NoObjects,
    /// Linker could not be launched.
    LaunchFailed(String),
    /// Linker exited non-zero (`None` when killed by a signal).
    Failed(Option<i32>),
    /// Linker reported success but the artifact is absent.
    MissingArtifact(PathBuf),
}

impl LinkOutcome {
    pub fn artifact(&self) -> Option<&Path> {
        match self {
            LinkOutcome::Linked(path) => Some(path),
            _ => None,
        }
    }
}

/// Result of the optional run phase. Never affects build success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Artifact does not exist.
    Missing(PathBuf),
    /// Artifact exists but has no execute bit.
    NotExecutable(PathBuf),
    /// Artifact could not be launched.
    LaunchFailed(String),
    /// Artifact ran; exit code is `None` when killed by a signal.
    Exited(Option<i32>),
}

/// Everything a completed (non-fatal) build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub sources: Vec<SourceFile>,
    pub build: BuildResult,
    pub link: LinkOutcome,
    /// `Some` only if the run phase was entered.
    pub run: Option<RunOutcome>,
}

impl BuildReport {
    /// The build contract: an artifact was linked. Run results do not count.
    pub fn succeeded(&self) -> bool {
        self.link.artifact().is_some()
    }
}
