// src/search/mod.rs
//! Autocomplete index over the prefetched sheet names.
//!
//! Greek hatt block names carry accents the user rarely types, so both the
//! stored names and incoming queries are folded to their unaccented
//! lowercase form before tokenizing. Matching is per-token prefix match:
//! every query token must prefix some name token.

use bevy::prelude::*;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::transform::definitions::{Sheet, SheetId};

/// Characters the sheet names are split on, besides whitespace.
const TOKEN_SEPARATORS: [char; 3] = ['-', '.', '+'];

/// Folds accented vowels to their base letter and lowercases.
pub fn fold_accents(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a folded string into non-empty search tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || TOKEN_SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
struct IndexEntry {
    id: SheetId,
    name: String,
    tokens: Vec<String>,
}

/// Searchable index over the loaded catalog. Empty (matches nothing) until
/// the sheet index arrives.
#[derive(Resource, Debug, Default)]
pub struct SheetSearchIndex {
    entries: Vec<IndexEntry>,
}

impl SheetSearchIndex {
    pub fn build(sheets: &[Sheet]) -> Self {
        let mut entries: Vec<IndexEntry> = sheets
            .iter()
            .map(|sheet| IndexEntry {
                id: sheet.id,
                name: sheet.name.clone(),
                tokens: tokenize(&fold_accents(&sheet.name)),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Returns up to `limit` (id, name) suggestions for `query`, in name
    /// order. A blank query matches nothing.
    pub fn query(&self, query: &str, limit: usize) -> Vec<(SheetId, &str)> {
        let query_tokens = tokenize(&fold_accents(query));
        if query_tokens.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| {
                query_tokens
                    .iter()
                    .all(|q| entry.tokens.iter().any(|t| t.starts_with(q.as_str())))
            })
            .take(limit)
            .map(|entry| (entry.id, entry.name.as_str()))
            .collect()
    }
}
