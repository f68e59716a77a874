pub mod index;
pub mod inverted;
pub mod loader;
pub mod normalize;
pub mod pagerank;
pub mod scoring;
pub mod tokenizer;

pub use index::{Index, IndexStats};
pub use inverted::InvertedIndex;
pub use loader::{load_corpus, Corpus, CorpusConfig};
pub use pagerank::PageRankConfig;
pub use scoring::{search, ScoreWeights, SearchResult};
pub use tokenizer::Dictionary;

pub type TokenId = u32;
pub type DocId = u32;

/// Prefix every outbound link carries in the link files, e.g. `/wiki/Chess`.
pub const WIKI_LINK_PREFIX: &str = "/wiki/";

#[derive(Debug, Clone)]
pub struct Document {
    /// File base name; also the title other pages link to.
    pub source: String,
    pub category: String,
    /// Token ids in document order, repeats kept. Positions drive location scoring.
    pub tokens: Vec<TokenId>,
    pub out_links: Vec<String>,
    /// PageRank authority. `load_corpus` starts every document at `1/N`;
    /// `Index::build` replaces it with the rank scaled so the corpus maximum is 1.0.
    pub authority: f64,
}

impl Document {
    /// A document with no links yet. `authority` stays 0.0 until a loader or
    /// ranker assigns it.
    pub fn new(
        source: impl Into<String>,
        category: impl Into<String>,
        tokens: Vec<TokenId>,
    ) -> Self {
        Self {
            source: source.into(),
            category: category.into(),
            tokens,
            out_links: Vec::new(),
            authority: 0.0,
        }
    }

    /// The link string another document uses to point at this one.
    pub fn wiki_link(&self) -> String {
        format!("{WIKI_LINK_PREFIX}{}", self.source)
    }
}
