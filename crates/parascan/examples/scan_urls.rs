//! Example: Scan a few live pages and show what matched
//!
//! Run with: cargo run -p parascan --example scan_urls
//!
//! Hits the network; each case states a word the page is expected to
//! contain as a whole word.

use parascan::{FetchOptions, Matcher, Scanner};
use tracing_subscriber::EnvFilter;

/// Test case definition
struct TestCase {
    url: &'static str,
    description: &'static str,
    words: &'static [&'static str],
    expect_word: Option<&'static str>,
}

const TEST_CASES: &[TestCase] = &[
    TestCase {
        url: "https://example.com",
        description: "Simple HTML page",
        words: &["domain", "examples"],
        expect_word: Some("domain"),
    },
    TestCase {
        url: "https://httpbin.org/html",
        description: "Long prose page",
        words: &["whale", "Melville"],
        expect_word: Some("whale"),
    },
    TestCase {
        url: "https://www.rust-lang.org",
        description: "Project homepage",
        words: &["Rust", "C++"],
        expect_word: Some("Rust"),
    },
];

#[tokio::main]
async fn main() {
    // Show per-page fetch logs; override with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parascan=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Parascan URL Examples");
    println!("=====================\n");

    let scanner = match Scanner::new(&FetchOptions::default()) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut passed = 0;
    let mut failed = 0;

    for (i, case) in TEST_CASES.iter().enumerate() {
        println!("{}. {}", i + 1, case.description);
        println!("   URL: {}", case.url);

        let matcher = match Matcher::new(case.words) {
            Ok(matcher) => matcher,
            Err(e) => {
                println!("   Error: {}", e);
                failed += 1;
                continue;
            }
        };

        match scanner.scan_page(case.url, &matcher).await {
            Ok(matches) => {
                for (word, paragraphs) in &matches {
                    println!("   {}: {} paragraph(s)", word, paragraphs.len());
                    if let Some(first) = paragraphs.first() {
                        let preview = first.chars().take(100).collect::<String>();
                        println!(
                            "     {}{}",
                            preview.replace('\n', " "),
                            if first.chars().count() > 100 { "..." } else { "" }
                        );
                    }
                }

                let ok = case
                    .expect_word
                    .map_or(true, |word| matches.contains_key(word));
                if ok {
                    println!("   ✓ PASS\n");
                    passed += 1;
                } else {
                    println!("   ✗ FAIL (expected word not found)\n");
                    failed += 1;
                }
            }
            Err(e) => {
                println!("   Error: {}", e);
                println!("   ✗ FAIL\n");
                failed += 1;
            }
        }
    }

    println!("=====================");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
