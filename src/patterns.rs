//! Compiled patterns for the fixed noise shapes that show up in catalog
//! titles. Vocabulary-driven patterns are built at construction time from
//! [`crate::vocab::Vocabulary`] instead.

use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;

/// Any parenthesized fragment, e.g. `(1400)` or `(распродажа)`.
pub static PARENTHESIZED: Lazy<Regex> = lazy_regex!(r"\([^)]*\)");

/// Parenthesized size code of 3+ digits, e.g. `(1400)`.
pub static SIZE_CODE: Lazy<Regex> = lazy_regex!(r"\((\d{3,})\)");

/// Supplier article code embedded in a title, e.g. `ВШ06-600`.
pub static ARTICLE_CODE: Lazy<Regex> = lazy_regex!(r"\b[А-Я]{2,}\d{2,}-\d{3,}\b");

/// Article fragment used to disambiguate slugs; the numeric tail is optional
/// so a bare `КМ02` still counts.
pub static ARTICLE_FRAGMENT: Lazy<Regex> = lazy_regex!(r"\b[А-Я]{2,}\d{2,}(?:-\d{3,})?\b");

/// Bare dimension pair written with the Cyrillic «х», e.g. `1400х2000`.
pub static DIMENSIONS: Lazy<Regex> = lazy_regex!(r"\b\d{3,}х\d{3,}\b");
