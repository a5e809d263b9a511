//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Output shape: `{"text": ..., "diagnostic": ..., "candidates": N}`.

use std::io::{self, Read};

use urdu_verse::logging::init_logging;
use urdu_verse::{extract_bytes, Extraction};

fn to_json(output: &Extraction) -> serde_json::Result<String> {
    serde_json::to_string(output)
}

fn main() {
    init_logging(false);

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output: Extraction = extract_bytes(&html);

    match to_json(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
