//! The build pipeline: prepare, discover, compile, link, finalize, run.
//!
//! Phases run strictly in order and never loop back. Only the preconditions
//! in [`BuildError`] abort a build; every later failure is recorded in the
//! returned [`BuildReport`] and logged.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::config::{BuildConfig, COMPILE_FLAGS, DIR_MODE, EXECUTABLE_MODE, SOURCE_EXTENSION};
use crate::error::BuildError;
use crate::filesystem::FileSystem;
use crate::model::{
    BuildReport, BuildResult, CompileOutcome, LinkOutcome, ObjectFile, RunOutcome, SourceFile,
};
use crate::process::ProcessRunner;

/// Coordinator that ties a configuration to the gateways it drives.
pub struct BuildPipeline<'a> {
    pub config: &'a BuildConfig,
    pub fs: &'a dyn FileSystem,
    pub runner: &'a dyn ProcessRunner,
}

impl<'a> BuildPipeline<'a> {
    pub fn new(
        config: &'a BuildConfig,
        fs: &'a dyn FileSystem,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self { config, fs, runner }
    }

    /// Run every phase. `Err` only for fatal preconditions.
    pub fn execute(&self) -> Result<BuildReport, BuildError> {
        self.prepare()?;
        let sources = self.discover()?;
        let build = self.compile_all(&sources);

        let link = self.link(&build.objects, &self.config.output_path());
        let mut run = None;
        match link.artifact() {
            Some(artifact) => {
                info!("Program successfully built: {}", artifact.display());
                self.finalize(artifact);
                if self.config.should_run {
                    run = Some(self.run_artifact(artifact));
                }
            }
            None => error!("Error linking program"),
        }

        Ok(BuildReport { sources, build, link, run })
    }

    /// Check the source directory and create the object and bin directories.
    pub fn prepare(&self) -> Result<(), BuildError> {
        if !self.fs.is_dir(&self.config.source_dir) {
            return Err(BuildError::MissingSourceDir(self.config.source_dir.clone()));
        }
        self.ensure_dir(&self.config.object_dir, "object files")?;
        self.ensure_dir(&self.config.bin_dir, "executable files")?;
        Ok(())
    }

    fn ensure_dir(&self, path: &Path, label: &str) -> Result<(), BuildError> {
        if self.fs.is_dir(path) {
            return Ok(());
        }
        info!("Creating directory for {label} {}", path.display());
        self.fs
            .create_dir(path, DIR_MODE)
            .map_err(|source| BuildError::CreateDir { path: path.to_path_buf(), source })
    }

    /// Find every source file. Finding none is fatal.
    pub fn discover(&self) -> Result<Vec<SourceFile>, BuildError> {
        let source_dir = &self.config.source_dir;
        info!("Searching for source files in {}", source_dir.display());

        let sources: Vec<SourceFile> = self
            .fs
            .list_files_by_extension(source_dir, SOURCE_EXTENSION)
            .into_iter()
            .map(SourceFile::new)
            .collect();
        if sources.is_empty() {
            return Err(BuildError::NoSources(source_dir.clone()));
        }

        info!("Found {} source files", sources.len());
        Ok(sources)
    }

    /// Compile each source in order. A failure never stops the loop.
    pub fn compile_all(&self, sources: &[SourceFile]) -> BuildResult {
        let mut result = BuildResult::new(sources.len());
        for source in sources {
            let outcome = self.compile_file(source);
            if outcome.object().is_none() {
                error!("Error compiling {}", source.path.display());
            }
            result.record(outcome);
        }

        if result.all_compiled() {
            info!("All files successfully compiled");
        } else {
            error!("Only {} out of {} files compiled", result.succeeded(), result.requested);
        }
        result
    }

    /// Compile one source into its derived object path.
    ///
    /// Success means the compiler launched and the object exists afterwards.
    /// The exit code is not consulted.
    pub fn compile_file(&self, source: &SourceFile) -> CompileOutcome {
        let object = self.config.object_path_for(&source.path);
        info!("Compiling {} to {}", source.path.display(), object.display());

        let mut args: Vec<&OsStr> =
            vec![OsStr::new("-c"), OsStr::new("-o"), object.as_os_str(), source.path.as_os_str()];
        for flag in COMPILE_FLAGS {
            args.push(OsStr::new(flag));
        }

        let output = match self.runner.run_capturing(OsStr::new(&self.config.compiler), &args) {
            Ok(output) => output,
            Err(e) => {
                error!("{e}");
                return CompileOutcome::LaunchFailed {
                    source: source.clone(),
                    reason: e.to_string(),
                };
            }
        };

        let diagnostics = output.text.trim_end();
        if self.fs.exists(&object) {
            if !diagnostics.is_empty() {
                debug!("{diagnostics}");
            }
            CompileOutcome::Compiled(ObjectFile::new(object))
        } else {
            if !diagnostics.is_empty() {
                error!("{diagnostics}");
            }
            CompileOutcome::MissingObject { source: source.clone(), object, output: output.text }
        }
    }

    /// Link `objects` (in the given order) into `output`.
    pub fn link(&self, objects: &[ObjectFile], output: &Path) -> LinkOutcome {
        if objects.is_empty() {
            error!("No object files for linking");
            return LinkOutcome::NoObjects;
        }
        info!("Linking files into {}", output.display());

        let mut args: Vec<&OsStr> = vec![OsStr::new("-o"), output.as_os_str()];
        args.extend(objects.iter().map(|object| object.path.as_os_str()));
        debug!(
            "Executing command: {} {}",
            self.config.compiler,
            args.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ")
        );

        match self.runner.run_status(OsStr::new(&self.config.compiler), &args) {
            Err(e) => {
                error!("{e}");
                LinkOutcome::LaunchFailed(e.to_string())
            }
            Ok(exit) if !exit.success() => {
                match exit.code {
                    Some(code) => error!("Linker exited with code {code}"),
                    None => error!("Linker was terminated by a signal"),
                }
                LinkOutcome::Failed(exit.code)
            }
            Ok(_) if !self.fs.exists(output) => {
                error!("Linker did not produce {}", output.display());
                LinkOutcome::MissingArtifact(output.to_path_buf())
            }
            Ok(_) => LinkOutcome::Linked(output.to_path_buf()),
        }
    }

    /// Mark the artifact executable. Best-effort: returns whether it worked.
    pub fn finalize(&self, artifact: &Path) -> bool {
        match self.fs.set_permissions(artifact, EXECUTABLE_MODE) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to set permissions on {}: {e}", artifact.display());
                false
            }
        }
    }

    /// Run the artifact after checking it exists and is executable.
    pub fn run_artifact(&self, artifact: &Path) -> RunOutcome {
        info!("Running program {}", artifact.display());

        if !self.fs.exists(artifact) {
            error!("Program {} does not exist", artifact.display());
            return RunOutcome::Missing(artifact.to_path_buf());
        }
        if !self.fs.is_executable(artifact) {
            error!("File {} is not executable", artifact.display());
            return RunOutcome::NotExecutable(artifact.to_path_buf());
        }

        let program = invocation_path(artifact);
        match self.runner.run_status(program.as_os_str(), &[]) {
            Err(e) => {
                error!("{e}");
                RunOutcome::LaunchFailed(e.to_string())
            }
            Ok(exit) => {
                match exit.code {
                    Some(code) => info!("Program exited with code {code}"),
                    None => error!("Program was terminated by a signal"),
                }
                RunOutcome::Exited(exit.code)
            }
        }
    }
}

/// Relative artifacts are invoked as `./<path>` so they are never looked up on PATH.
pub fn invocation_path(artifact: &Path) -> PathBuf {
    if artifact.is_relative() {
        Path::new(".").join(artifact)
    } else {
        artifact.to_path_buf()
    }
}
