use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkrank_core::{search, CorpusConfig, Index, PageRankConfig, ScoreWeights};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "linkrank-indexer")]
#[command(about = "Load a link corpus, rank it, and inspect or query the in-memory index")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Corpus root containing Words/ and Links/
    #[arg(long, default_value = "./data")]
    corpus: String,
    /// Category sub-directories to load, in order
    #[arg(long = "category", value_delimiter = ',', default_value = "Games,Programming")]
    categories: Vec<String>,
    /// PageRank rounds
    #[arg(long, default_value_t = 20)]
    iterations: usize,
    /// PageRank damping factor
    #[arg(long, default_value_t = 0.85)]
    damping: f64,
}

impl CorpusArgs {
    fn open(&self) -> Result<Index> {
        let corpus =
            CorpusConfig::new(&self.corpus).with_categories(self.categories.iter().cloned());
        Index::open(&corpus, &PageRankConfig { iterations: self.iterations, damping: self.damping })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print corpus statistics and the highest-authority documents
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// How many documents to list by authority
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Run a query and print the ranked results as JSON
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Whitespace-separated query words
        #[arg(long)]
        word: String,
        /// Maximum results to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value_t = 1.0)]
        content_weight: f64,
        #[arg(long, default_value_t = 0.8)]
        location_weight: f64,
        #[arg(long, default_value_t = 0.5)]
        authority_weight: f64,
    },
}

#[derive(Serialize)]
struct TopDoc<'a> {
    url: &'a str,
    category: &'a str,
    authority: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { corpus, top } => print_stats(&corpus.open()?, top),
        Commands::Query {
            corpus,
            word,
            limit,
            content_weight,
            location_weight,
            authority_weight,
        } => {
            let index = corpus.open()?;
            let weights = ScoreWeights {
                content: content_weight,
                location: location_weight,
                authority: authority_weight,
            };
            let mut results = search(&index, &word, &weights);
            tracing::info!(query = %word, hits = results.len(), "query done");
            results.truncate(limit);
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
    }
}

fn print_stats(index: &Index, top: usize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&index.stats())?);

    let mut docs: Vec<TopDoc> = index
        .documents()
        .iter()
        .map(|d| TopDoc { url: &d.source, category: &d.category, authority: d.authority })
        .collect();
    docs.sort_by(|a, b| b.authority.total_cmp(&a.authority));
    docs.truncate(top);
    println!("{}", serde_json::to_string_pretty(&docs)?);
    Ok(())
}
