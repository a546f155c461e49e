use anyhow::Context;
use clap::Parser;
use ged_reader::ConverterConfig;
use ged_reader::async_io::convert_directory_async;
use ged_reader::cli::Cli;
use ged_reader::utils::print_conversion_summary;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConverterConfig::from(Cli::parse());

    info!(
        "Converting GEDCOM files in {} with up to {} documents open",
        config.input_dir.display(),
        config.concurrency()
    );

    let input_dir = config.input_dir.clone();
    let summary = convert_directory_async(config)
        .await
        .with_context(|| format!("Unable to read from folder {}", input_dir.display()))?;

    print_conversion_summary(&summary);
    Ok(())
}
