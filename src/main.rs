use std::{env, process};

use anyhow::Context;
use gdvscd::{Session, config::RunConfig, dataset::load_dataset};
use log::info;

/// Builds the run configuration out of the command line arguments.
///
/// `gdvscd [config.json] [learning_rate] [iterations]`, the positional overrides take
/// precedence over the values in the config file.
fn parse_args(args: &[String]) -> anyhow::Result<RunConfig> {
    let mut config = match args.get(1) {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };

    if let Some(eta) = args.get(2) {
        config.learning_rate = eta
            .parse()
            .with_context(|| format!("invalid learning rate: {eta}"))?;
    }

    if let Some(iters) = args.get(3) {
        config.iterations = iters
            .parse()
            .with_context(|| format!("invalid iteration count: {iters}"))?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        eprintln!(
            "Usage: {} [config.json] [learning_rate] [iterations]",
            args[0]
        );
        process::exit(1);
    }

    let config = parse_args(&args)?;

    info!(
        "loading dataset from {} and {}",
        config.features.display(),
        config.targets.display()
    );

    let dataset = load_dataset(&config.features, &config.targets)
        .context("failed to load the dataset")?;
    let session = Session::new(config, dataset)?;
    let report = session.run().await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
