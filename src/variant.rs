//! Variant tag extraction.
//!
//! The resolution order is a deliberate tie-break policy: a parenthesized
//! size code outranks a color word, which outranks an article code. It is
//! kept as an ordered rule table so the priority stays visible and testable
//! instead of being buried in branching.

use crate::patterns;
use crate::vocab::Vocabulary;
use anyhow::Context;
use regex::Regex;
use vg_types::VariantTag;

enum Produce {
    SizeCode,
    ColorName,
    ArticleCode,
}

struct Rule {
    pattern: Regex,
    produce: Produce,
}

impl Rule {
    fn apply(&self, title: &str, vocab: &Vocabulary) -> Option<VariantTag> {
        let captures = self.pattern.captures(title)?;
        match self.produce {
            Produce::SizeCode => Some(VariantTag::Size(captures.get(1)?.as_str().to_string())),
            Produce::ColorName => vocab
                .canonical_color(captures.get(1)?.as_str())
                .map(VariantTag::Color),
            Produce::ArticleCode => {
                Some(VariantTag::Article(captures.get(0)?.as_str().to_lowercase()))
            }
        }
    }
}

pub struct VariantExtractor {
    vocab: Vocabulary,
    rules: Vec<Rule>,
}

impl VariantExtractor {
    pub fn new(vocab: &Vocabulary) -> Result<Self, anyhow::Error> {
        let rules = vec![
            Rule {
                pattern: patterns::SIZE_CODE.clone(),
                produce: Produce::SizeCode,
            },
            Rule {
                pattern: Regex::new(&vocab.color_pattern())
                    .context("Unable to compile color vocabulary pattern")?,
                produce: Produce::ColorName,
            },
            Rule {
                pattern: patterns::ARTICLE_CODE.clone(),
                produce: Produce::ArticleCode,
            },
        ];
        Ok(Self {
            vocab: *vocab,
            rules,
        })
    }

    /// Tag describing how this title differs from its base name. Total: a
    /// title matching no rule gets the literal `default` tag.
    pub fn extract(&self, title: &str) -> VariantTag {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(title, &self.vocab))
            .unwrap_or(VariantTag::Default)
    }
}
