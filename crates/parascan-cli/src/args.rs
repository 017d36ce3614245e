//! Command line arguments

use clap::Parser;
use parascan::{FetchOptions, ScanConfig, DEFAULT_JSON_OUTPUT};
use std::path::PathBuf;
use std::time::Duration;

/// Parascan - find paragraphs containing the specified words
#[derive(Parser, Debug)]
#[command(name = "parascan")]
#[command(author, version, about, long_about = None)]
pub struct ScanArgs {
    /// One or more URLs of pages to scrape
    #[arg(long, required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Words to search for in the pages
    #[arg(long, required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Path of the JSON file to write results to
    #[arg(long, default_value = DEFAULT_JSON_OUTPUT)]
    pub json_output: PathBuf,

    /// Optional path of a Markdown file to write formatted results
    #[arg(long)]
    pub markdown_output: Option<PathBuf>,

    /// Custom User-Agent
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl ScanArgs {
    /// Build the immutable run configuration
    pub fn into_config(self) -> ScanConfig {
        let mut config = ScanConfig::new(self.urls, self.words).json_output(self.json_output);
        if let Some(path) = self.markdown_output {
            config = config.markdown_output(path);
        }
        if let Some(ua) = self.user_agent {
            config = config.user_agent(ua);
        }
        if let Some(secs) = self.timeout {
            config = config.timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Parascan print - show the paragraphs of one page that contain any of the words
#[derive(Parser, Debug)]
#[command(name = "parascan-print")]
#[command(author, version, about, long_about = None)]
pub struct PrintArgs {
    /// URL of the page to scrape
    pub url: String,

    /// Words to search for
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Custom User-Agent
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl PrintArgs {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
