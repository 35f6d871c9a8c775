use std::env;

use anyhow::{Context, Result};
use ccdrive_core::filesystem::OsFileSystem;
use ccdrive_core::model::{BuildReport, LinkOutcome, RunOutcome};
use ccdrive_core::process::SystemProcessRunner;
use ccdrive_core::{BuildConfig, BuildError, BuildPipeline};
use log::debug;

use crate::Cli;

/// Translate parsed arguments into a build configuration.
///
/// Directories keep their fixed names relative to the working directory; the
/// compiler comes from `CC` when set.
pub fn config_from_cli(cli: &Cli) -> BuildConfig {
    BuildConfig::from_env().with_output_name(&cli.out).with_run(cli.run)
}

/// Run a full build with the real filesystem and process gateways.
pub fn build_command(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    let fs = OsFileSystem;
    let runner = SystemProcessRunner;
    BuildPipeline::new(config, &fs, &runner).execute()
}

/// Log where the build runs and with which settings.
pub fn log_build_context(config: &BuildConfig) -> Result<()> {
    debug!("ccdrive v{}", ccdrive_core::version());
    let cwd = env::current_dir().context("Failed to get current directory")?;
    debug!("Working directory: {}", cwd.display());
    debug!("Compiler: {}", config.compiler);
    debug!("Output: {}", config.output_path().display());
    Ok(())
}

/// One-line description of a finished build, for the final log line.
pub fn summary_line(report: &BuildReport) -> String {
    let link = match &report.link {
        LinkOutcome::Linked(path) => format!("linked {}", path.display()),
        LinkOutcome::NoObjects => "not linked (no objects)".to_string(),
        LinkOutcome::LaunchFailed(_) => "not linked (linker did not start)".to_string(),
        LinkOutcome::Failed(Some(code)) => format!("link failed (exit code {code})"),
        LinkOutcome::Failed(None) => "link failed (signal)".to_string(),
        LinkOutcome::MissingArtifact(path) => format!("link produced no {}", path.display()),
    };
    let run = match &report.run {
        None => String::new(),
        Some(RunOutcome::Exited(Some(code))) => format!(", program exited with code {code}"),
        Some(RunOutcome::Exited(None)) => ", program terminated by a signal".to_string(),
        Some(RunOutcome::Missing(_)) | Some(RunOutcome::NotExecutable(_)) => {
            ", program not runnable".to_string()
        }
        Some(RunOutcome::LaunchFailed(_)) => ", program did not start".to_string(),
    };
    format!(
        "Build finished: {} of {} compiled, {}{}",
        report.build.succeeded(),
        report.build.requested,
        link,
        run
    )
}
