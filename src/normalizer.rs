//! Title normalization: strips variant noise from a product title down to
//! the base name used as the clustering key.

use crate::patterns;
use crate::vocab::Vocabulary;
use anyhow::Context;
use itertools::Itertools;
use regex::Regex;

pub struct Normalizer {
    colors: Regex,
}

impl Normalizer {
    pub fn new(vocab: &Vocabulary) -> Result<Self, anyhow::Error> {
        let colors = Regex::new(&vocab.color_pattern())
            .context("Unable to compile color vocabulary pattern")?;
        Ok(Self { colors })
    }

    /// Noise-stripped core of a product title.
    ///
    /// Ordered passes: parentheticals, article codes, dimension pairs, color
    /// words, whitespace collapse. Total and deterministic; a title made of
    /// nothing but noise comes back as an empty string, which callers treat
    /// as "no stable base name", not as an error.
    pub fn base_name(&self, title: &str) -> String {
        let title = patterns::PARENTHESIZED.replace_all(title, " ");
        let title = patterns::ARTICLE_CODE.replace_all(&title, " ");
        let title = patterns::DIMENSIONS.replace_all(&title, " ");
        let title = self.colors.replace_all(&title, " ");
        title.split_whitespace().join(" ")
    }

    /// Whether the title carries any word of the color vocabulary.
    pub fn has_color_word(&self, title: &str) -> bool {
        self.colors.is_match(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&Vocabulary::default()).expect("vocabulary pattern compiles")
    }

    #[test]
    fn strips_size_code_and_color() {
        assert_eq!(
            normalizer().base_name("Шкаф-купе Вега (1400) белый"),
            "Шкаф-купе Вега"
        );
    }

    #[test]
    fn strips_article_codes_and_dimensions() {
        assert_eq!(
            normalizer().base_name("Кровать Соната ВШ06-600 1400х2000"),
            "Кровать Соната"
        );
    }

    #[test]
    fn color_removal_is_case_insensitive() {
        assert_eq!(normalizer().base_name("Стол журнальный БЕЛЫЙ"), "Стол журнальный");
        assert_eq!(normalizer().base_name("Комод White"), "Комод");
    }

    #[test]
    fn color_words_are_only_removed_whole() {
        // «Дубрава» contains «дуб» but is a product name, not a finish.
        assert_eq!(normalizer().base_name("Гостиная Дубрава"), "Гостиная Дубрава");
    }

    #[test]
    fn base_name_is_a_fixed_point() {
        let n = normalizer();
        let base = n.base_name("Шкаф-купе Вега (1600) венге");
        assert_eq!(n.base_name(&base), base);
    }

    #[test]
    fn pure_noise_collapses_to_empty() {
        assert_eq!(normalizer().base_name("Белый (1400)"), "");
        assert_eq!(normalizer().base_name("Дуб сонома"), "");
    }

    #[test]
    fn detects_color_signal() {
        let n = normalizer();
        assert!(n.has_color_word("Шкаф венге"));
        assert!(!n.has_color_word("Шкаф (1400)"));
    }
}
