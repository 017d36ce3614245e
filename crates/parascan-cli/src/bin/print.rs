//! Parascan print - show matching paragraphs of a single page on stdout

use clap::Parser;
use parascan::{ConfigError, Matcher, Scanner};
use parascan_cli::args::PrintArgs;
use parascan_cli::{exit_with_error, init_logging, writeln_safe};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = PrintArgs::parse();
    init_logging();

    let matcher = match Matcher::new(&args.words) {
        Ok(matcher) if matcher.is_empty() => exit_with_error(&ConfigError::NoUsableWords),
        Ok(matcher) => matcher,
        Err(e) => exit_with_error(&e),
    };

    let scanner = Scanner::new(&args.fetch_options()).unwrap_or_else(|e| exit_with_error(&e));

    match scanner.highlight_page(&args.url, &matcher).await {
        Ok(paragraphs) => {
            for paragraph in &paragraphs {
                writeln_safe(paragraph);
            }
        }
        Err(e) => exit_with_error(&e),
    }
}
