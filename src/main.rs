use clap::Parser;
use folio::utils::logger;
use folio::{BuildOutcome, CliConfig, SiteError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_logger(cli.json_logs, cli.verbose);

    tracing::info!("🚀 Starting folio");

    match cli.build_site().await {
        Ok(BuildOutcome::Written(output_path)) => {
            tracing::info!("✅ Site built successfully!");
            println!("✅ Site built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(BuildOutcome::DryRun(site)) => {
            for page in &site.pages {
                println!("{} ({} bytes)", page.path, page.body.len());
            }
        }
        Err(site_error) => {
            report(&site_error);
            let exit_code = site_error.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn report(site_error: &SiteError) {
    tracing::error!(
        "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
        site_error,
        site_error.category(),
        site_error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", site_error.recovery_suggestion());

    eprintln!("❌ {}", site_error.user_friendly_message());
    eprintln!("💡 {}", site_error.recovery_suggestion());
}
