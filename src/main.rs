use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use youyaku::{ContentRecord, SummaryOptions, summarize};

/// Derive an excerpt for a Markdown file (or stdin) and print it.
///
/// Usage: `youyaku [FILE] [MAX_LENGTH]`
fn main() -> Result<()> {
    youyaku::setup_logging();

    let mut args = env::args().skip(1);
    let content = match args.next() {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    // A raw file carries no front-matter fields, so only the computed
    // path applies.
    let mut options = SummaryOptions {
        prefer_manual: false,
        ..SummaryOptions::default()
    };
    if let Some(raw_max) = args.next() {
        options.max_length = raw_max
            .parse()
            .with_context(|| format!("Invalid max length: {raw_max}"))?;
    }

    let record = ContentRecord::from_body(content);
    println!("{}", summarize(&record, &options));
    Ok(())
}
