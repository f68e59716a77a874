use crate::inverted::InvertedIndex;
use crate::loader::{load_corpus, Corpus, CorpusConfig};
use crate::pagerank::{self, PageRankConfig};
use crate::tokenizer::Dictionary;
use crate::{DocId, Document};
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Everything a query needs, built once at startup and read-only afterwards.
#[derive(Debug)]
pub struct Index {
    dictionary: Dictionary,
    documents: Vec<Document>,
    inverted: InvertedIndex,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub num_tokens: usize,
    pub total_tokens: usize,
    pub num_links: usize,
    pub dangling_links: usize,
    pub docs_per_category: BTreeMap<String, usize>,
}

impl Index {
    /// Derive the inverted index and authority scores from a loaded corpus.
    pub fn build(corpus: Corpus, pagerank: &PageRankConfig) -> Self {
        let Corpus { dictionary, mut documents } = corpus;
        let inverted = InvertedIndex::build(&documents, dictionary.len());
        let ranks = pagerank::compute(&documents, pagerank);
        for (doc, rank) in documents.iter_mut().zip(ranks) {
            doc.authority = rank;
        }
        Self { dictionary, documents, inverted }
    }

    /// Load the corpus from disk and build the index in one step.
    pub fn open(corpus: &CorpusConfig, pagerank: &PageRankConfig) -> Result<Self> {
        let corpus = load_corpus(corpus)?;
        Ok(Self::build(corpus, pagerank))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id as usize)
    }

    pub fn stats(&self) -> IndexStats {
        let known: HashSet<String> = self.documents.iter().map(Document::wiki_link).collect();
        let mut docs_per_category = BTreeMap::new();
        let mut num_links = 0;
        let mut dangling_links = 0;
        for doc in &self.documents {
            *docs_per_category.entry(doc.category.clone()).or_insert(0) += 1;
            num_links += doc.out_links.len();
            dangling_links += doc.out_links.iter().filter(|l| !known.contains(*l)).count();
        }
        IndexStats {
            num_docs: self.documents.len(),
            num_tokens: self.dictionary.len(),
            total_tokens: self.documents.iter().map(|d| d.tokens.len()).sum(),
            num_links,
            dangling_links,
            docs_per_category,
        }
    }
}
