//! Authority scores from the outbound-link graph.
//!
//! A fixed number of synchronous rounds, no convergence check. Document `j`
//! feeds document `i` when one of `j`'s links is exactly `/wiki/<i.source>`;
//! `j` splits its rank over *all* of its links, so dangling links dilute what
//! it passes on. After the last round ranks are divided by the maximum: the
//! top document scores 1.0 and the values do not sum to one.

use crate::normalize::scale_to_max;
use crate::Document;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    pub iterations: usize,
    pub damping: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { iterations: 20, damping: 0.85 }
    }
}

/// Compute one authority value per document, in document order.
pub fn compute(documents: &[Document], config: &PageRankConfig) -> Vec<f64> {
    let mut rank = compute_raw(documents, config);
    scale_to_max(&mut rank);
    tracing::info!(
        documents = rank.len(),
        iterations = config.iterations,
        damping = config.damping,
        "pagerank finished"
    );
    rank
}

/// Ranks after the last round, before scaling to the maximum.
pub fn compute_raw(documents: &[Document], config: &PageRankConfig) -> Vec<f64> {
    let n = documents.len();
    if n == 0 {
        return Vec::new();
    }
    let inbound = inbound_edges(documents);
    let out_degree: Vec<f64> = documents
        .iter()
        .map(|d| d.out_links.len() as f64)
        .collect();

    let d = config.damping;
    let base = (1.0 - d) / n as f64;
    let mut rank = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for round in 0..config.iterations {
        for (i, sources) in inbound.iter().enumerate() {
            let sum: f64 = sources.iter().map(|&j| rank[j] / out_degree[j]).sum();
            next[i] = base + d * sum;
        }
        let delta: f64 = rank.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut rank, &mut next);
        tracing::debug!(round, delta, "pagerank round");
    }
    rank
}

/// For every document, the distinct documents linking to it.
///
/// Sources are listed once per target even if they repeat the link, and in
/// ascending order so the floating point sums are reproducible.
fn inbound_edges(documents: &[Document]) -> Vec<Vec<usize>> {
    let mut by_link: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, doc) in documents.iter().enumerate() {
        by_link.entry(doc.wiki_link()).or_default().push(i);
    }

    let mut inbound: Vec<Vec<usize>> = vec![Vec::new(); documents.len()];
    for (j, doc) in documents.iter().enumerate() {
        let mut targets: HashSet<usize> = HashSet::new();
        for link in &doc.out_links {
            if let Some(ids) = by_link.get(link) {
                targets.extend(ids.iter().copied());
            }
        }
        for i in targets {
            inbound[i].push(j);
        }
    }
    inbound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str, links: &[&str]) -> Document {
        let mut d = Document::new(name, "c", Vec::new());
        d.out_links = links.iter().map(|s| s.to_string()).collect();
        d
    }

    #[test]
    fn cycle_ranks_are_equal() {
        let docs = vec![
            page("A", &["/wiki/B"]),
            page("B", &["/wiki/C"]),
            page("C", &["/wiki/A"]),
        ];
        let ranks = compute(&docs, &PageRankConfig::default());
        for r in &ranks {
            assert!((r - 1.0).abs() < 1e-9, "{ranks:?}");
        }
    }

    #[test]
    fn hub_target_ranks_highest() {
        let docs = vec![
            page("Hub", &[]),
            page("A", &["/wiki/Hub"]),
            page("B", &["/wiki/Hub", "/wiki/A"]),
        ];
        let ranks = compute(&docs, &PageRankConfig::default());
        assert_eq!(ranks[0], 1.0);
        assert!(ranks[1] < 1.0 && ranks[1] > ranks[2]);
    }

    #[test]
    fn dangling_links_dilute_out_degree() {
        let clean = vec![page("T", &[]), page("S", &["/wiki/T"])];
        let diluted = vec![page("T", &[]), page("S", &["/wiki/T", "/wiki/Nowhere"])];
        let cfg = PageRankConfig { iterations: 1, damping: 0.85 };
        // S only holds the jump share; T gains half as much once S links elsewhere too
        let clean_s = compute(&clean, &cfg)[1];
        let diluted_s = compute(&diluted, &cfg)[1];
        assert!((clean_s - 0.15).abs() < 1e-12);
        assert!(diluted_s > clean_s);
    }

    #[test]
    fn repeated_link_counts_once_in_sum_but_twice_in_degree() {
        let docs = vec![page("T", &[]), page("S", &["/wiki/T", "/wiki/T"])];
        let inbound = inbound_edges(&docs);
        assert_eq!(inbound[0], vec![1]);
        assert!(inbound[1].is_empty());
    }

    #[test]
    fn zero_iterations_keeps_uniform() {
        let docs = vec![page("A", &["/wiki/B"]), page("B", &[])];
        let ranks = compute(&docs, &PageRankConfig { iterations: 0, damping: 0.85 });
        assert_eq!(ranks, vec![1.0, 1.0]);
    }

    #[test]
    fn rounds_read_only_the_previous_round() {
        let docs = vec![
            page("A", &["/wiki/B"]),
            page("B", &["/wiki/C"]),
            page("C", &["/wiki/A", "/wiki/B"]),
        ];
        let cfg = PageRankConfig { iterations: 2, damping: 0.85 };
        let (base, d) = (0.15 / 3.0, 0.85);

        let r0 = 1.0 / 3.0;
        let a1 = base + d * r0 / 2.0;
        let b1 = base + d * (r0 + r0 / 2.0);
        let c1 = base + d * r0;
        let a2 = base + d * c1 / 2.0;
        let b2 = base + d * (a1 + c1 / 2.0);
        let c2 = base + d * b1;

        let raw = compute_raw(&docs, &cfg);
        for (got, want) in raw.iter().zip([a2, b2, c2]) {
            assert!((got - want).abs() < 1e-12, "{raw:?}");
        }

        let scaled = compute(&docs, &cfg);
        assert_eq!(scaled[2], 1.0);
        assert!((scaled[0] - a2 / c2).abs() < 1e-12);
    }

    #[test]
    fn large_unlinked_corpus_still_tops_at_one() {
        let docs: Vec<Document> = (0..20_000).map(|i| page(&format!("P{i}"), &[])).collect();
        let ranks = compute(&docs, &PageRankConfig::default());
        let max = ranks.iter().copied().fold(f64::MIN, f64::max);
        assert!((max - 1.0).abs() < 1e-9, "max = {max}");
        assert!(ranks.iter().all(|r| (r - 1.0).abs() < 1e-9));
    }

    #[test]
    fn full_damping_without_links_stays_zero() {
        let docs = vec![page("A", &[]), page("B", &[])];
        let ranks = compute(&docs, &PageRankConfig { iterations: 3, damping: 1.0 });
        assert_eq!(ranks, vec![0.0, 0.0]);
    }

    #[test]
    fn empty_corpus() {
        assert!(compute(&[], &PageRankConfig::default()).is_empty());
    }
}
