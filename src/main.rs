use std::{env, path::PathBuf, time::Instant};

use anyhow::Context;
use tfidf_similarity::{load_config, Language, SimilarityAlgorithm, TFIDFVectorizer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_usage() {
    eprintln!("Usage: tfidf-similarity <text1> <text2> [--lang zh|en] [--min-count N] [--pearson]");
    eprintln!("                        [--config FILE] [--save FILE] [--load FILE]");
    eprintln!("Prints the similarity score of the two texts. RUST_LOG=debug shows the pipeline.");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = env::args().skip(1);
    let mut texts: Vec<String> = Vec::new();
    let mut language: Option<Language> = None;
    let mut min_count: Option<u64> = None;
    let mut pearson = false;
    let mut config_path: Option<PathBuf> = None;
    let mut save_path: Option<PathBuf> = None;
    let mut load_path: Option<PathBuf> = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--lang" => {
                let v = args.next().context("--lang requires zh or en")?;
                language = Some(v.parse().map_err(anyhow::Error::msg)?);
            }
            "--min-count" => {
                let v = args.next().context("--min-count requires a number")?;
                min_count = Some(v.parse().with_context(|| format!("invalid --min-count: {v}"))?);
            }
            "--pearson" => pearson = true,
            "--config" => config_path = Some(args.next().context("--config requires a path")?.into()),
            "--save" => save_path = Some(args.next().context("--save requires a path")?.into()),
            "--load" => load_path = Some(args.next().context("--load requires a path")?.into()),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ => texts.push(a),
        }
    }

    let [text1, text2] = <[String; 2]>::try_from(texts).map_err(|texts| {
        print_usage();
        anyhow::anyhow!("expected two texts, got {}", texts.len())
    })?;

    let mut config = load_config(config_path)?;
    if let Some(language) = language {
        config.language = language;
    }
    if let Some(min_count) = min_count {
        config.min_count = min_count;
    }
    if pearson {
        config.algorithm = SimilarityAlgorithm::Pearson;
    }
    if load_path.is_none() {
        load_path = config.vocabulary_path.clone().filter(|path| path.exists());
    }

    let start = Instant::now();
    let mut vectorizer = TFIDFVectorizer::from_config(&config);
    if let Some(path) = &load_path {
        vectorizer
            .load(path)
            .with_context(|| format!("failed to load idf table from {}", path.display()))?;
    }

    let matrix = vectorizer.transform(&[text1.as_str(), text2.as_str()])?.normalize();
    if matrix.dim() == 0 {
        warn!(min_count = config.min_count, "empty vocabulary, try a lower --min-count");
    }
    let score = matrix.similarity_with(config.algorithm, 0, 1)?;

    if let Some(path) = &save_path {
        vectorizer
            .save(path)
            .with_context(|| format!("failed to save idf table to {}", path.display()))?;
    }

    info!(
        language = %config.language,
        terms = matrix.dim(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "similarity computed"
    );
    println!("{score}");
    Ok(())
}
