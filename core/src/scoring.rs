//! Query scoring: content frequency, first-occurrence location and PageRank
//! authority, each scaled to `[0, 1]` and combined with fixed weights.

use crate::index::Index;
use crate::normalize::{normalize, Scale};
use crate::tokenizer::tokenize;
use crate::{DocId, Document, TokenId};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub content: f64,
    pub location: f64,
    pub authority: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { content: 1.0, location: 0.8, authority: 0.5 }
    }
}

/// One ranked hit. Score fields hold the weighted contribution of each signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(skip)]
    pub doc_id: DocId,
    pub url: String,
    pub content_score: f64,
    pub location_score: f64,
    pub page_rank_score: f64,
    pub total_score: f64,
}

/// Distinct dictionary ids of the query words, in query order. Words the corpus
/// never contained are dropped.
pub fn query_ids(index: &Index, query: &str) -> Vec<TokenId> {
    let mut ids: Vec<TokenId> = Vec::new();
    for word in tokenize(query) {
        if let Some(id) = index.dictionary().get(word) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Number of tokens in `doc` equal to any query id.
pub fn content_score(doc: &Document, ids: &[TokenId]) -> f64 {
    doc.tokens.iter().filter(|t| ids.contains(t)).count() as f64
}

/// Sum of `first position + 1` over the query ids, or 0 when any id is absent
/// from the document. Lower non-zero values are better.
pub fn location_score(doc: &Document, ids: &[TokenId]) -> f64 {
    let mut sum = 0.0;
    for id in ids {
        match doc.tokens.iter().position(|t| t == id) {
            Some(pos) => sum += (pos + 1) as f64,
            None => return 0.0,
        }
    }
    sum
}

/// Rank every document matching at least one query word.
pub fn search(index: &Index, query: &str, weights: &ScoreWeights) -> Vec<SearchResult> {
    let ids = query_ids(index, query);
    if ids.is_empty() {
        tracing::debug!(query, "no known query words");
        return Vec::new();
    }

    let docs = index.documents();
    let mut candidate = vec![false; docs.len()];
    for &id in &ids {
        for &doc in index.inverted().postings(id) {
            candidate[doc as usize] = true;
        }
    }

    // one slot per document; collect() is the barrier before normalization
    let (mut content, mut location): (Vec<f64>, Vec<f64>) = docs
        .par_iter()
        .zip(candidate.par_iter())
        .map(|(doc, &hit)| {
            if hit {
                (content_score(doc, &ids), location_score(doc, &ids))
            } else {
                (0.0, 0.0)
            }
        })
        .unzip();

    normalize(&mut content, Scale::LargerIsBetter);
    normalize(&mut location, Scale::SmallerIsBetter);

    let mut results: Vec<SearchResult> = docs
        .iter()
        .enumerate()
        .filter(|(i, _)| content[*i] > 0.0)
        .map(|(i, doc)| {
            let content_score = content[i] * weights.content;
            let location_score = location[i] * weights.location;
            let page_rank_score = doc.authority * weights.authority;
            SearchResult {
                doc_id: i as DocId,
                url: doc.source.clone(),
                content_score,
                location_score,
                page_rank_score,
                total_score: content_score + location_score + page_rank_score,
            }
        })
        .collect();

    // stable: equal totals keep corpus order
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    tracing::debug!(query, hits = results.len(), "query scored");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[TokenId]) -> Document {
        Document::new("d", "c", tokens.to_vec())
    }

    #[test]
    fn content_counts_every_occurrence() {
        assert_eq!(content_score(&doc(&[1, 2, 1, 1, 3]), &[1]), 3.0);
        assert_eq!(content_score(&doc(&[1, 2, 3]), &[1, 3]), 2.0);
        assert_eq!(content_score(&doc(&[4]), &[1]), 0.0);
    }

    #[test]
    fn location_sums_first_positions() {
        assert_eq!(location_score(&doc(&[5, 1, 2, 1]), &[1, 2]), 2.0 + 3.0);
    }

    #[test]
    fn location_requires_every_word() {
        assert_eq!(location_score(&doc(&[1, 1, 1]), &[1, 2]), 0.0);
    }
}
