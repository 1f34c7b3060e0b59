use anyhow::{Context, Result};
use book_similarity::constants::{BOOK_PATHS, TOP_N};
use book_similarity::corpus::Corpus;
use book_similarity::ranking::write_top_pairs;
use env_logger::Env;
use log::info;
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let corpus = Corpus::load(BOOK_PATHS);
    let num_tokens: usize = corpus.documents().iter().map(|d| d.total_tokens()).sum();
    info!("found {} total tokens in {} documents", num_tokens, corpus.len());

    let ranked = corpus.ranked_pairs();
    info!("scored {} pairs", ranked.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_top_pairs(&mut out, &ranked, &corpus.names(), TOP_N)
        .and_then(|_| out.flush())
        .context("failed to write similarity report")?;
    Ok(())
}
