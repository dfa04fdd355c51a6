//! Application entry point and dispatch.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use strassen_cli::output::write_to_file;
use strassen_cli::presenter::CLIResultPresenter;
use strassen_core::progress::CancellationToken;
use strassen_core::registry::DefaultFactory;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};
use strassen_orchestration::multiplier_selection::get_multipliers_to_run;
use strassen_orchestration::orchestrator::{
    analyze_comparison_results, execute_multiplications,
};

use crate::config::AppConfig;
use crate::payload::{self, Response};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let body = read_input(&config.input)?;
    let cancel = CancellationToken::with_timeout(config.timeout_duration()?);
    ctrlc_handler(cancel.clone());

    run_with(config, &body, &cancel)
}

/// Multiply the operands in `body` and report the outcome.
///
/// Errors are also reported as a JSON `error` response when `--json` or
/// `--output` is set.
pub fn run_with(config: &AppConfig, body: &[u8], cancel: &CancellationToken) -> Result<()> {
    let results = match run_multipliers(config, body, cancel) {
        Ok(results) => results,
        Err(e) => {
            emit_response(config, &Response::error(e.to_string()))?;
            return Err(e);
        }
    };

    let verdict = analyze_comparison_results(&results);

    if !config.json {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        // Quiet mode prints the bare product once, however many multipliers ran.
        let shown = if config.quiet { 1 } else { results.len() };
        for result in results.iter().filter(|r| r.outcome.is_ok()).take(shown) {
            if let Some(product) = result.product() {
                presenter.present_result(&result.algorithm, product, result.duration, config.details);
            }
        }
        if results.len() > 1 {
            presenter.present_comparison(&results);
        }
    }

    let response = match &verdict {
        Ok(()) => results
            .iter()
            .find_map(MultiplicationResult::product)
            .map_or_else(|| Response::error("no product"), |p| Response::product(p.clone())),
        Err(e) => Response::error(e.to_string()),
    };
    emit_response(config, &response)?;

    verdict.map_err(Into::into)
}

fn run_multipliers(
    config: &AppConfig,
    body: &[u8],
    cancel: &CancellationToken,
) -> Result<Vec<MultiplicationResult>> {
    let opts = config.options()?;
    let (a, b) = payload::decode(body)?;

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    debug!(
        algo = %config.algo,
        multipliers = multipliers.len(),
        left = a.order(),
        right = b.order(),
        remaining = ?cancel.remaining(),
        "decoded operands"
    );

    Ok(execute_multiplications(&multipliers, &a, &b, &opts, cancel))
}

fn emit_response(config: &AppConfig, response: &Response) -> Result<()> {
    if !config.json && config.output.is_none() {
        return Ok(());
    }
    let json = response.to_json()?;
    if config.json {
        println!("{json}");
    }
    if let Some(path) = &config.output {
        write_to_file(path, &json).with_context(|| format!("writing {path}"))?;
    }
    Ok(())
}

fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("reading payload from stdin")?;
        return Ok(body);
    }
    std::fs::read(path).with_context(|| format!("reading payload from {path}"))
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
}
