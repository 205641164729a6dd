use lemmafa::{load_dictionary, Lemmatizer, LemmatizerConfigBuilder};
use serde::Deserialize;
use serde_jsonlines::json_lines;
use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clap::Parser;

#[derive(Deserialize)]
struct Example {
    tokens: Vec<String>,
}

impl Example {
    fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
        let mut tokens = Vec::new();
        for example in json_lines::<Example, P>(path)? {
            tokens.extend(example?.tokens);
        }
        Ok(tokens)
    }
}

#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long, default_value_t = 1)]
    n_samples: u32,
    #[arg(short, long, default_value_t=String::from("small"))]
    dataset: String,
    #[arg(long, default_value = "./tests/lemma_dict.txt")]
    dictionary: PathBuf,
    #[arg(short, long, default_value_t = false)]
    parallel: bool,
    /// Prints the strategy report of the last sample.
    #[arg(short, long, default_value_t = false)]
    report: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let dictionary = load_dictionary(&args.dictionary)?;
    let config = LemmatizerConfigBuilder::new()
        .parallel(args.parallel)
        .build();
    let lemmatizer = Lemmatizer::with_config(dictionary, config);
    let path = format!("./profiling/data/{}_dataset.jsonl", args.dataset);
    let tokens = Example::read_tokens(&path)?;
    info!(tokens = tokens.len(), dataset = %path, "loaded dataset");

    let n_samples = args.n_samples;
    let iter = Range {
        start: 0,
        end: n_samples,
    };
    let mut total_duration = Duration::ZERO;
    for _ in iter {
        let now = Instant::now();
        {
            lemmatizer.lemmatize_tokens(&tokens);
        }
        let elapsed = now.elapsed();
        total_duration += elapsed;
    }
    println!(
        "Total duration: {} with {n_samples} samples",
        total_duration.as_secs_f64()
    );
    if args.report {
        print!("{}", lemmatizer.report(&tokens));
    }
    Ok(())
}
