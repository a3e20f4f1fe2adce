use clap::Parser;
use sheet_sync::domain::ports::TokenProvider;
use sheet_sync::utils::{logger, validation::Validate};
use sheet_sync::{
    ApiRowFetcher, MetadataTokenProvider, SheetsClient, StaticTokenProvider, SyncConfig,
    SyncEngine,
};

#[derive(Debug, Parser)]
#[command(name = "sheet-sync")]
#[command(about = "Sync rows from a source API into a Google Sheets range")]
struct Cli {
    #[arg(long, help = "Fetch and map rows but skip the spreadsheet calls")]
    dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Starting sheet-sync");

    let config = match SyncConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if cli.verbose {
        tracing::debug!(
            "Config: sheet_id={} write_range={} clear_range={}",
            config.sheet_id,
            config.write_range,
            config.clear_range
        );
    }

    // A pre-issued token skips the metadata server for runs outside GCP.
    let tokens: Box<dyn TokenProvider> = match std::env::var("GOOGLE_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Box::new(StaticTokenProvider::new(token)),
        _ => Box::new(MetadataTokenProvider::new()),
    };

    let fetcher = ApiRowFetcher::new(config.clone());
    let sink = SheetsClient::new(tokens, config.sheet_id.clone(), config.clear_range.clone());
    let engine = SyncEngine::with_dry_run(fetcher, sink, cli.dry_run);

    match engine.run().await {
        Ok(count) => {
            tracing::info!("✅ Update Google Sheets Successfully! ({} rows)", count);
            println!("✅ Update Google Sheets Successfully!");
        }
        Err(e) => {
            tracing::error!("❌ ERROR: {}", e);
            eprintln!("❌ ERROR: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
