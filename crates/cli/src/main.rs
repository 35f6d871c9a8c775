use std::env;

use ccdrive::commands::{build_command, config_from_cli, log_build_context, summary_line};
use ccdrive::{logger, Cli};
use log::{debug, info};

fn main() {
    logger::init(logger::level_from_env());

    let cli = Cli::parse_lenient(env::args_os().map(|arg| arg.to_string_lossy().into_owned()));
    let config = config_from_cli(&cli);
    if let Err(e) = log_build_context(&config) {
        debug!("{e:#}");
    }

    // Compile and link failures are reported through the log; the exit
    // status stays zero unless a precondition is fatal.
    match build_command(&config) {
        Ok(report) => info!("{}", summary_line(&report)),
        Err(e) => logger::fatal(e),
    }
}
