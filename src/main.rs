use clap::Parser;
use portfolio_gen::core::engine::BuildReport;
use portfolio_gen::utils::{logger, validation::Validate};
use portfolio_gen::{CliConfig, LocalStorage, PortfolioError, PortfolioPipeline, SiteBuilder};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting portfolio-gen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(config.output_dir.clone());
    let target = storage.resolve(&config.output_file);
    let pipeline = PortfolioPipeline::new(storage, config);
    let builder = SiteBuilder::new(pipeline);

    match builder.run() {
        Ok(report) if dry_run => display_summary(&report, &target),
        Ok(report) => {
            tracing::info!("Generated {} ({} bytes)", target, report.bytes);
            println!("✅ Generated {} from {} config", target, report.summary.name);
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &PortfolioError) -> ! {
    tracing::error!(
        "Build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn display_summary(report: &BuildReport, target: &str) {
    let summary = &report.summary;
    println!("🔍 Dry run, nothing written");
    println!("  Name: {}", summary.name);
    println!("  List items: {}", summary.list_items);
    println!("  Projects: {}", summary.projects);
    println!("  Experience panels: {}", summary.experience);
    println!("  Education panels: {}", summary.education);
    println!("  Carousel slides: {}", summary.carousel);
    println!("  Output: {} ({} bytes)", target, report.bytes);
}
