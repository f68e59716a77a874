use crate::TokenId;
use std::collections::HashMap;

/// Split text into raw whitespace-delimited tokens. No case folding, stemming or
/// stop-word removal: queries only hit when they match the corpus byte for byte.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Bijective token <-> id map. Ids are dense from 0 in first-occurrence order.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    ids: HashMap<String, TokenId>,
    terms: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `token`, allocating the next one on first sight.
    pub fn intern(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = self.terms.len() as TokenId;
        self.ids.insert(token.to_owned(), id);
        self.terms.push(token.to_owned());
        id
    }

    pub fn get(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    pub fn term(&self, id: TokenId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Tokenize `text` and intern every token, returning the id sequence.
    pub fn intern_text(&mut self, text: &str) -> Vec<TokenId> {
        tokenize(text).map(|t| self.intern(t)).collect()
    }
}
