// SPDX-License-Identifier: MIT
//
// Diceware: Word-List Passphrase Generator

//! Diceware passphrase generator
//!
//! Reads a diceware word list, validates it, and prints a passphrase built from
//! words drawn with the operating system's secure random source.
//!
//! Settings come from `DICEWARE_*` environment variables; command-line flags
//! override them.

use anyhow::{Context, Result};
use clap::Parser;
use diceware_core::{
    config::GeneratorConfig, metrics::DrawMetrics, passphrase::estimated_entropy_bits,
    Dictionary, Passphrase, Sampler,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "diceware")]
#[command(about = "Generate diceware passphrases from a numbered word list", long_about = None)]
struct Args {
    /// The word list to be used
    #[arg(long)]
    wordlist: PathBuf,

    /// The number of words to include in the passphrase
    #[arg(short, long)]
    count: Option<usize>,

    /// Separator placed between words
    #[arg(short, long)]
    separator: Option<String>,

    /// Rolls allowed per word before giving up on a sparse list
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Print the estimated passphrase entropy to stderr
    #[arg(long)]
    show_entropy: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Overlay command-line flags on the environment configuration
    fn apply(&self, mut config: GeneratorConfig) -> Result<GeneratorConfig> {
        if let Some(count) = self.count {
            config.word_count = count;
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_draw_attempts = max_attempts;
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Could not find word list file: {}", path.display()))?;

    let dictionary = Dictionary::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_validation() {
            anyhow::Error::new(e).context(format!("Invalid word list: {}", path.display()))
        } else {
            anyhow::Error::new(e).context(format!("Failed to read word list: {}", path.display()))
        }
    })?;

    info!(
        "Loaded {} words ({}-digit sequences) from {}",
        dictionary.len(),
        dictionary.sequence_length(),
        path.display()
    );
    if !dictionary.is_dense() {
        warn!(
            "Word list is sparse ({:.2}% of sequences map to a word); missed rolls will be retried",
            dictionary.density() * 100.0
        );
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = args
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Diceware v{}", diceware_core::VERSION);

    let config = GeneratorConfig::from_env().context("Failed to load configuration from environment")?;
    let config = args.apply(config).context("Invalid command-line options")?;

    let dictionary = load_dictionary(&args.wordlist)?;

    let metrics = DrawMetrics::new();
    let sampler = Sampler::new(&dictionary)
        .with_max_attempts(config.max_draw_attempts)
        .with_metrics(metrics.clone());

    let passphrase = Passphrase::generate(&sampler, config.word_count)
        .context("Failed to generate passphrase")?;

    debug!(
        "Drew {} words in {} rolls ({} misses)",
        metrics.draws_total(),
        metrics.attempts_total(),
        metrics.misses_total()
    );

    println!("{}", passphrase.join(&config.separator));

    if args.show_entropy {
        eprintln!(
            "Estimated entropy: {:.1} bits ({} words x {:.2} bits)",
            estimated_entropy_bits(&dictionary, passphrase.len()),
            passphrase.len(),
            dictionary.entropy_bits_per_word()
        );
    }

    Ok(())
}
