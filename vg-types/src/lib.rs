use derive_more::Display;

pub mod group;
pub mod product;

/// The short label distinguishing one variant within a group: a size code
/// from the title, a canonical color name, a supplier article fragment, or
/// the `default` fall-through when the title carries no detectable signal.
///
/// Only `Default` may legitimately repeat within one group; consumers must
/// tolerate duplicate tags.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum VariantTag {
    #[display("{_0}")]
    Size(String),
    #[display("{_0}")]
    Color(&'static str),
    #[display("{_0}")]
    Article(String),
    #[display("default")]
    Default,
}

impl VariantTag {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl serde::Serialize for VariantTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn tags_display_as_short_strings() {
        assert_eq!(VariantTag::Size("1400".to_string()).to_string(), "1400");
        assert_eq!(VariantTag::Color("wenge").to_string(), "wenge");
        assert_eq!(
            VariantTag::Article("вш06-600".to_string()).to_string(),
            "вш06-600"
        );
        assert_eq!(VariantTag::Default.to_string(), "default");
    }

    #[test]
    fn only_the_fallthrough_tag_is_default() {
        assert!(VariantTag::Default.is_default());
        assert!(!VariantTag::Color("white").is_default());
    }
}
