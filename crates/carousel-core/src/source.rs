//! Derivation of full-size image sources from thumbnail sources.
//!
//! Thumbnails and their primary images usually differ only in a size token of
//! the URL (`.../120x80/...` vs `.../1024x680/...`). Rules are applied in
//! order, each replacing its first match.

use crate::config::SourceRewrite;
use crate::error::CarouselError;
use regex::Regex;

#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    rules: Vec<(Regex, String)>,
}

impl SourceResolver {
    pub fn new(rewrites: &[SourceRewrite]) -> Result<Self, CarouselError> {
        let rules = rewrites
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern)
                    .map(|regex| (regex, rule.replacement.clone()))
                    .map_err(|source| CarouselError::InvalidRewrite {
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Full-size source for a thumbnail source. Identity when no rules exist.
    pub fn resolve(&self, thumbnail: &str) -> String {
        self.rules
            .iter()
            .fold(thumbnail.to_string(), |current, (regex, replacement)| {
                regex.replace(&current, replacement.as_str()).into_owned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, replacement: &str) -> SourceRewrite {
        SourceRewrite {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn no_rules_is_identity() {
        let resolver = SourceResolver::default();
        assert_eq!(resolver.resolve("img/a.jpg"), "img/a.jpg");
    }

    #[test]
    fn size_tokens_are_rewritten_in_order() {
        let resolver =
            SourceResolver::new(&[rule("120", "1024"), rule("80", "680")]).expect("rules");
        assert_eq!(
            resolver.resolve("https://cdn.test/120x80/photo-7.jpg"),
            "https://cdn.test/1024x680/photo-7.jpg"
        );
    }

    #[test]
    fn only_first_match_is_replaced() {
        let resolver = SourceResolver::new(&[rule("thumb", "full")]).expect("rules");
        assert_eq!(resolver.resolve("thumb/thumb.png"), "full/thumb.png");
    }

    #[test]
    fn invalid_pattern_is_a_configuration_error() {
        let err = SourceResolver::new(&[rule("(", "x")]).expect_err("invalid regex");
        assert!(matches!(err, CarouselError::InvalidRewrite { .. }));
    }
}
