//! Vocabulary data for normalization, variant tagging and slug generation.
//!
//! All tables are immutable statics handed to the components at construction
//! time; nothing here is mutated at runtime.

use itertools::Itertools;

/// A color/finish word as it appears in titles, plus the canonical form used
/// as the variant tag.
#[derive(Clone, Copy, Debug)]
pub struct ColorEntry {
    pub word: &'static str,
    pub canonical: &'static str,
}

const fn color(word: &'static str, canonical: &'static str) -> ColorEntry {
    ColorEntry { word, canonical }
}

/// Furniture colors and finishes: the Russian forms first, then the English
/// forms that leak in from imported supplier feeds.
pub static COLORS: &[ColorEntry] = &[
    color("белый", "white"),
    color("черный", "black"),
    color("серый", "grey"),
    color("синий", "blue"),
    color("красный", "red"),
    color("зеленый", "green"),
    color("желтый", "yellow"),
    color("коричневый", "brown"),
    color("бежевый", "beige"),
    color("розовый", "pink"),
    color("фиолетовый", "purple"),
    color("оранжевый", "orange"),
    color("венге", "wenge"),
    color("дуб", "oak"),
    color("орех", "walnut"),
    color("вишня", "cherry"),
    color("ясень", "ash"),
    color("сонома", "sonoma"),
    color("white", "white"),
    color("black", "black"),
    color("gray", "gray"),
    color("grey", "grey"),
    color("blue", "blue"),
    color("red", "red"),
    color("green", "green"),
    color("yellow", "yellow"),
    color("brown", "brown"),
    color("beige", "beige"),
    color("pink", "pink"),
    color("purple", "purple"),
    color("orange", "orange"),
];

/// Fixed Cyrillic→Latin map for slug generation. Hard and soft signs are
/// dropped entirely.
pub static TRANSLIT: &[(char, &'static str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
];

#[derive(Clone, Copy, Debug)]
pub struct Vocabulary {
    pub colors: &'static [ColorEntry],
    pub translit: &'static [(char, &'static str)],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            colors: COLORS,
            translit: TRANSLIT,
        }
    }
}

impl Vocabulary {
    /// Whole-word, case-insensitive alternation over every vocabulary word.
    /// The single capture group is what the variant extractor reads back.
    pub fn color_pattern(&self) -> String {
        let words = self.colors.iter().map(|c| regex::escape(c.word)).join("|");
        format!(r"(?i)\b({words})\b")
    }

    /// Canonical tag form for a matched vocabulary word.
    pub fn canonical_color(&self, word: &str) -> Option<&'static str> {
        let word = word.to_lowercase();
        self.colors
            .iter()
            .find(|c| c.word == word)
            .map(|c| c.canonical)
    }
}
