//! strassen: parallel Strassen multiplication of power-of-two integer matrices.

use std::process::ExitCode;

use strassen_cli::presenter::CLIResultPresenter;
use strassen_lib::{app, config, errors, version};
use strassen_orchestration::interfaces::ResultPresenter;
use tracing::{debug, Level};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let level = if config.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
    debug!(version = %version::full_version(), "starting");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CLIResultPresenter::new(config.verbose, config.quiet).present_error(&format!("{e:#}"));
            let code = errors::exit_code(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
