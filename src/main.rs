use anyhow::Context;
use std::process::ExitCode;
use token_generator::{telemetry, Config, TokenGenerator};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Tracing may not be initialized yet when configuration fails.
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<String> {
    let config = Config::from_env().context("failed to load configuration")?;
    telemetry::init_tracing(&config.tracing)?;

    info!(alg = config.algorithm.as_str(), ttl = config.ttl_seconds, "Starting token generator");

    let generator = TokenGenerator::from_config(&config)?;
    let token = generator.generate_token().context("failed to sign token")?;
    Ok(token)
}
