//! Main entry point for the bike sharing dashboard.

use bikeshare_common::init_logging;
use bikeshare_dashboard::{load_config, run, Args, DashboardResult};
use clap::Parser;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> DashboardResult<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    init_logging(&config.logging.to_logging_config())?;

    info!("Starting bike sharing dashboard");

    match run(&args, &config).await {
        Ok(report) => {
            info!("Dashboard ready at {}", report.page.display());
            Ok(())
        }
        Err(e) => {
            error!("Dashboard generation failed: {}", e);
            Err(e)
        }
    }
}
