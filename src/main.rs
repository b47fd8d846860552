use clap::Parser;
use folio::app::grid::ProjectGrid;
use folio::utils::error::ErrorSeverity;
use folio::utils::{logger, validation::Validate};
use folio::{CliConfig, LocalStorage, ProjectPipeline, RenderEngine, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init(cli.verbose, cli.json_logs);

    tracing::info!("Starting folio");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let site = match cli.load_site_config() {
        Ok(site) => site,
        Err(e) => {
            eprintln!("❌ Failed to load site configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = site.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&site, &cli);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests will be made");
        return Ok(());
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(site.output.path.clone());
    let pipeline = ProjectPipeline::new(storage, site)?;
    let engine = RenderEngine::new_with_monitoring(pipeline, cli.monitor);

    let outcome = run(&engine, &cli).await;

    // 不論渲染成功與否，都等背景回寫結束
    if let Some(report) = engine.pipeline().finish_patches().await {
        tracing::info!(
            "🔄 Description patches: {} attempted, {} succeeded, {} failed",
            report.attempted,
            report.succeeded,
            report.failures.len()
        );
        for failure in &report.failures {
            tracing::warn!("Patch failed for {}: {}", failure.repository, failure.error);
        }
    }

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(
    engine: &RenderEngine<ProjectPipeline<LocalStorage, SiteConfig>>,
    cli: &CliConfig,
) -> folio::Result<()> {
    let output_path = engine.run().await?;
    tracing::info!("✅ Render completed successfully!");
    println!("✅ Render completed successfully!");
    println!("📁 Output saved to: {}", output_path);

    let result = engine.pipeline().read_result().await?;
    let mut grid = ProjectGrid::new(result.cards);
    grid.apply(cli.category, &cli.query);

    println!(
        "📋 Showing {} of {} projects (category: {}, query: {:?})",
        grid.visible_indices().len(),
        result.total_displayed,
        grid.filter(),
        grid.query()
    );
    for card in grid.visible_cards() {
        println!("  [{}] {} - {}", card.category, card.title, card.description);
    }

    Ok(())
}

fn display_config_summary(site: &SiteConfig, cli: &CliConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Account: {}", site.site.account);
    tracing::info!("  API base: {}", site.github.api_base);
    tracing::info!("  External projects: {}", site.externals.len());
    tracing::info!("  Output path: {}", site.output.path);
    tracing::info!(
        "  Description patching: {}",
        if site.resolve_token().is_some() { "enabled" } else { "disabled" }
    );
    tracing::info!("  Listing filter: {} / {:?}", cli.category, cli.query);
}
