use clap::Parser;
use connpass_collector::cli::Args;
use connpass_collector::collector::Collector;
use connpass_collector::config::env_loader::load_config;
use connpass_collector::dataset::DATASET_FILE_NAME;
use connpass_collector::error::CollectError;
use connpass_collector::logging::setup_tracing;
use connpass_collector::month_range::YearMonth;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CollectError> {
    setup_tracing();

    let args = Args::parse();
    let start = YearMonth::new(args.start)?;
    let end = YearMonth::new(args.end)?;

    let config = load_config();
    tokio::fs::create_dir_all(&config.dataset_dir).await?;

    let collector = Collector::new(&config);
    let dataset = collector.collect(start, end).await?;

    let dataset_path = config.dataset_dir.join(DATASET_FILE_NAME);
    dataset.write_csv(&dataset_path)?;

    info!(
        "Wrote {} events to {}",
        dataset.len(),
        dataset_path.display()
    );

    Ok(())
}
