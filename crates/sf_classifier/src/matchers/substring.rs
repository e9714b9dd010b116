use super::KeywordMatcher;

#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    keywords: Vec<String>,
}

impl SubstringMatcher {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }
}

impl KeywordMatcher for SubstringMatcher {
    fn is_match(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}
