use clap::Parser;
use genre_cleaner::config::interactive;
use genre_cleaner::core::ingest;
use genre_cleaner::utils::error::ErrorSeverity;
use genre_cleaner::utils::{logger, validation::Validate};
use genre_cleaner::{
    CleanerError, CliConfig, Detector, EtlEngine, GenrePipeline, LocalStorage, ResolvedConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting genre-cleaner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    // Column bindings need the actual headers, so peek at the file first.
    let data = std::fs::read(&config.input_file)?;
    let headers = ingest::peek_headers(&data).unwrap_or_else(|e| fail(e));
    tracing::debug!("Input columns: {:?}", headers);

    let binding = interactive::resolve_binding(&config, &headers).unwrap_or_else(|e| fail(e));
    tracing::info!("Column binding: {:?}", binding);

    // The lookup table must be usable before any row is processed.
    let detector = Detector::with_lookup_files(&config.lookup_files).unwrap_or_else(|e| fail(e));
    tracing::debug!("Name lookup table holds {} entries", detector.len());

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let resolved = ResolvedConfig::new(config, binding);
    let pipeline = GenrePipeline::new(storage, resolved, detector);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Cleaning run completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: CleanerError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
