//! Fetch a page, pick an Urdu poem from it, and optionally render and recite it.
//!
//! Exit codes: 0 on success, 1 on fetch/speech/IO failure, 2 when the page
//! has no usable Urdu text.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use urdu_verse::encoding::DecodePolicy;
use urdu_verse::logging::init_logging;
use urdu_verse::render::render_page;
use urdu_verse::{
    crawl_poem, recite, Error, Extractor, FetchOptions, GoogleTts, Options, PageFetcher,
    SpeechOptions,
};

#[derive(Parser, Debug)]
#[command(name = "urdu-verse")]
#[command(about = "Crawl a web page for an Urdu poem and turn it into speech")]
#[command(version)]
struct Cli {
    /// Page to crawl (static HTML; JavaScript is not executed)
    url: String,

    /// Poet name shown above the poem in the rendered page
    #[arg(short, long, default_value = "Allama Iqbal")]
    poet: String,

    /// Write the recitation as MP3 to this file
    #[arg(short, long, value_name = "FILE")]
    audio: Option<PathBuf>,

    /// Write a standalone HTML page with the poem to this file
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Seed for choosing among candidate blocks (repeatable output)
    #[arg(long)]
    seed: Option<u64>,

    /// Blocks must be longer than this many characters
    #[arg(long, default_value_t = 20)]
    min_chars: usize,

    /// Honor the page's declared charset instead of forcing UTF-8
    #[arg(long)]
    sniff_charset: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Recite slowly
    #[arg(long)]
    slow: bool,

    /// Debug logging for this crate
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let fetch_options = FetchOptions {
        timeout: Duration::from_secs(cli.timeout),
        decode: if cli.sniff_charset {
            DecodePolicy::Sniff
        } else {
            DecodePolicy::ForceUtf8
        },
        ..FetchOptions::default()
    };
    let extractor = Extractor::new(Options {
        min_block_chars: cli.min_chars,
        ..Options::default()
    });

    let fetcher = PageFetcher::new(fetch_options)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let poem = match crawl_poem(&fetcher, &extractor, &cli.url, &mut rng) {
        Ok(poem) => poem,
        Err(Error::Extract(err)) => {
            eprintln!("{err}");
            eprintln!("The site might be dynamic (JavaScript) or contain no Urdu text.");
            return Ok(ExitCode::from(2));
        }
        Err(err) => {
            return Err(anyhow::Error::new(err).context(format!("could not crawl {}", cli.url)))
        }
    };

    println!("— {} —", cli.poet);
    println!("{poem}");

    if let Some(path) = &cli.html {
        std::fs::write(path, render_page(Some(&cli.poet), &poem))
            .with_context(|| format!("could not write {}", path.display()))?;
    }

    if let Some(path) = &cli.audio {
        let tts = GoogleTts::new(SpeechOptions {
            slow: cli.slow,
            timeout: Duration::from_secs(cli.timeout),
            ..SpeechOptions::default()
        })?;
        recite(&tts, &poem, path).context("audio generation failed")?;
    }

    Ok(ExitCode::SUCCESS)
}
