//! Parascan CLI - scan pages for words and write JSON/Markdown reports

use clap::Parser;
use parascan_cli::args::ScanArgs;
use parascan_cli::{exit_with_error, init_logging};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = ScanArgs::parse();
    init_logging();

    let config = args.into_config();
    match parascan::run(&config).await {
        Ok(report) => {
            info!(
                urls = report.len(),
                matches = report.match_count(),
                json = %config.json_output.display(),
                "Done"
            );
        }
        Err(e) => exit_with_error(&e),
    }
}
