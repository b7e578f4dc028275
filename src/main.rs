use clap::Parser;
use tracing::Instrument;
use tcg_binder::core::ConfigProvider;
use tcg_binder::utils::{logger, validation::Validate};
use tcg_binder::{BinderConfig, BinderEngine, BinderPipeline, CliConfig, LocalStorage, TcgdexClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting tcg-binder");
    if let Some(path) = &args.config {
        tracing::info!("📁 Loading configuration from: {}", path);
    }

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched");
        return Ok(());
    }

    let span = tracing::info_span!("binder", set = %config.set_id());
    let source = TcgdexClient::new(config.endpoint(), config.language())
        .with_timeout(config.timeout_seconds());
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BinderPipeline::new(source, storage, config);
    let engine = BinderEngine::new(pipeline);

    match engine.run().instrument(span).await {
        Ok(summary) => {
            tracing::info!("✅ Binder built in {:?}", summary.elapsed);
            println!(
                "✅ {} cards -> {} pockets on {} pages ({} spreads)",
                summary.layout.cards,
                summary.layout.occupied_slots,
                summary.layout.pages,
                summary.layout.spreads
            );
            for file in &summary.written_files {
                println!("📁 Output saved to: {}", file);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Binder build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &BinderConfig, args: &CliConfig) {
    println!("📋 Configuration Summary:");
    println!("  Source: {} ({})", config.endpoint(), config.language());
    println!("  Set: {}", config.set_id());
    println!("  Concurrent Requests: {}", config.concurrent_requests());
    println!("  Pockets per page: {}", config.page_capacity());
    println!("  Doubled rarities: {}", config.doubled_rarities().join(", "));
    println!(
        "  Images: {} / {}",
        config.image_quality(),
        config.image_format()
    );
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
