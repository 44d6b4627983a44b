// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use dictcrawl::cli::args::{self, InputMode};
use dictcrawl::cli::{batch_cmd, lookup_cmd};
use dictcrawl::{CrawlConfig, Dictionary};

#[derive(Parser)]
#[command(
    name = "dictcrawl",
    about = "Dictcrawl — look up words in an online dictionary and save them as JSON",
    version,
    after_help = "Examples:\n  dictcrawl run\n  dictcrawl run run.json\n  dictcrawl --file words.txt [output.json]\n  dictcrawl words.txt [output.json]"
)]
struct Cli {
    /// Word to look up, or a .txt word list, optionally followed by the output file
    #[arg(value_name = "WORD_OR_FILE", num_args = 0..=2)]
    positional: Vec<String>,

    /// Word-list file (one word per line)
    #[arg(long, value_name = "PATH")]
    file: Option<String>,

    /// Dictionary URL prefix the word is appended to
    #[arg(long)]
    base_url: Option<String>,

    /// Pause between words in a batch, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Fetch attempts per word before giving up
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> CrawlConfig {
        let mut config = CrawlConfig::from_env();
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ms) = self.delay_ms {
            config.delay_ms = ms;
        }
        if let Some(n) = self.max_attempts {
            config.max_attempts = n;
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout_ms = ms;
        }
        config
    }

    fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            &self.log_level
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mode = match args::resolve(cli.file.as_deref(), &cli.positional) {
        Ok(mode) => mode,
        Err(msg) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, msg)
            .exit(),
    };

    let result = run(&cli, mode).await;

    // Consistent exit codes: 0=success, 1=error, 2=usage
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}

async fn run(cli: &Cli, mode: InputMode) -> Result<()> {
    let config = cli.config();
    tracing::debug!("config: {config:?}");
    let dict = Dictionary::new(config)?;

    match mode {
        InputMode::Word { word, output } => lookup_cmd::run(&dict, &word, &output, cli.quiet).await,
        InputMode::WordList { path, output } => {
            batch_cmd::run(&dict, &path, &output, cli.quiet).await
        }
    }
}
