use crate::{DocId, Document, TokenId};

/// Token id -> ids of the documents containing it.
///
/// Postings are indexed directly by token id (ids are dense), each list is
/// sorted ascending and holds a document at most once.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: Vec<Vec<DocId>>,
}

impl InvertedIndex {
    pub fn build(documents: &[Document], num_tokens: usize) -> Self {
        let mut postings: Vec<Vec<DocId>> = vec![Vec::new(); num_tokens];
        for (doc_id, doc) in documents.iter().enumerate() {
            let doc_id = doc_id as DocId;
            for &tid in &doc.tokens {
                let idx = tid as usize;
                if idx >= postings.len() {
                    postings.resize(idx + 1, Vec::new());
                }
                let list = &mut postings[idx];
                // documents are visited in order, so a repeat can only be the last entry
                if list.last() != Some(&doc_id) {
                    list.push(doc_id);
                }
            }
        }
        Self { postings }
    }

    pub fn postings(&self, token: TokenId) -> &[DocId] {
        self.postings.get(token as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, token: TokenId, doc: DocId) -> bool {
        self.postings(token).binary_search(&doc).is_ok()
    }

    pub fn num_tokens(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[TokenId]) -> Document {
        Document::new("d", "c", tokens.to_vec())
    }

    #[test]
    fn repeated_tokens_post_once() {
        let docs = vec![doc(&[0, 1, 0, 0]), doc(&[1, 2]), doc(&[])];
        let idx = InvertedIndex::build(&docs, 3);
        assert_eq!(idx.postings(0), &[0]);
        assert_eq!(idx.postings(1), &[0, 1]);
        assert_eq!(idx.postings(2), &[1]);
        assert!(idx.postings(99).is_empty());
        assert!(idx.contains(1, 1));
        assert!(!idx.contains(0, 1));
    }
}
