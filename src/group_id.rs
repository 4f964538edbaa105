//! Stable, human-legible group identifiers.
//!
//! A slug is derived from the base name alone plus, when present, an article
//! fragment from the first member's raw title, so repeated runs over the
//! same snapshot converge on the same ids. Uniqueness across unrelated base
//! names that transliterate identically is resolved by the reporter.

use crate::patterns;
use crate::vocab::Vocabulary;
use std::collections::HashMap;

/// Upper bound on the length of an emitted group id.
pub const MAX_LEN: usize = 50;

pub struct GroupIdGenerator {
    translit: HashMap<char, &'static str>,
}

impl GroupIdGenerator {
    pub fn new(vocab: &Vocabulary) -> Self {
        Self {
            translit: vocab.translit.iter().copied().collect(),
        }
    }

    /// Kebab slug from the first three words of the base name, with an
    /// article fragment appended when it adds information.
    pub fn generate(&self, base_name: &str, first_title: &str) -> String {
        let mut segments: Vec<String> = base_name
            .to_lowercase()
            .split_whitespace()
            .take(3)
            .map(|word| self.transliterate(word, false))
            .filter(|word| !word.is_empty())
            .collect();

        if let Some(found) = patterns::ARTICLE_FRAGMENT.find(first_title) {
            let article = self.transliterate(&found.as_str().to_lowercase(), true);
            if !article.is_empty() && !segments.join("-").contains(&article) {
                segments.push(article);
            }
        }

        segments.join("-").chars().take(MAX_LEN).collect()
    }

    /// Cyrillic goes through the fixed map, other alphanumerics pass as-is,
    /// the rest is dropped. Hyphens survive only inside article fragments.
    fn transliterate(&self, word: &str, keep_hyphens: bool) -> String {
        let mut out = String::new();
        for c in word.chars() {
            if let Some(mapped) = self.translit.get(&c) {
                out.push_str(mapped);
            } else if c.is_alphanumeric() || (keep_hyphens && c == '-') {
                out.push(c);
            }
        }
        out
    }
}
