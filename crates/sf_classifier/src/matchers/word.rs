use regex::Regex;
use sf_core::{Error, Result};
use super::KeywordMatcher;

/// One alternation regex per topic, anchored on `\b` at both ends.
#[derive(Debug, Clone)]
pub struct WordBoundaryMatcher {
    pattern: Regex,
}

impl WordBoundaryMatcher {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let alternation = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation))
            .map_err(|e| Error::Config(format!("Invalid keyword pattern: {}", e)))?;
        Ok(Self { pattern })
    }
}

impl KeywordMatcher for WordBoundaryMatcher {
    fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(keywords: &[&str]) -> WordBoundaryMatcher {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        WordBoundaryMatcher::new(&keywords).unwrap()
    }

    #[test]
    fn test_word_boundaries() {
        let m = matcher(&["mars", "elon musk"]);
        assert!(m.is_match("rover lands on mars."));
        assert!(m.is_match("elon musk says"));
        assert!(!m.is_match("the marsh was quiet"));
        assert!(!m.is_match("elon muskrat"));
    }

    #[test]
    fn test_keywords_are_escaped() {
        let m = matcher(&["a.b"]);
        assert!(m.is_match("a.b rocket"));
        assert!(!m.is_match("axb rocket"));
    }
}
