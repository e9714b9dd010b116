use std::fmt;
use sf_core::{Classifier, Result, FALLBACK_TOPIC};
use crate::matchers::{KeywordMatcher, MatchMode, SubstringMatcher};
use crate::topics::TopicTable;

/// First-match-wins keyword classifier.
///
/// Topics are scanned in table order and the first one with any matching
/// trigger is returned, so earlier topics pre-empt later ones on overlap.
pub struct KeywordClassifier {
    rules: Vec<(String, Box<dyn KeywordMatcher>)>,
    mode: MatchMode,
}

impl fmt::Debug for KeywordClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordClassifier")
            .field("topics", &self.rules.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .field("mode", &self.mode)
            .finish()
    }
}

impl KeywordClassifier {
    pub fn new(table: &TopicTable, mode: MatchMode) -> Result<Self> {
        let rules = match mode {
            MatchMode::Substring => substring_rules(table),
            MatchMode::Word => table
                .topics()
                .iter()
                .map(|topic| Ok((topic.name.clone(), mode.build(&topic.keywords)?)))
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(Self { rules, mode })
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            rules: substring_rules(&TopicTable::default()),
            mode: MatchMode::Substring,
        }
    }
}

// Infallible: substring matchers never fail to build.
fn substring_rules(table: &TopicTable) -> Vec<(String, Box<dyn KeywordMatcher>)> {
    table
        .topics()
        .iter()
        .map(|topic| {
            let matcher: Box<dyn KeywordMatcher> = Box::new(SubstringMatcher::new(&topic.keywords));
            (topic.name.clone(), matcher)
        })
        .collect()
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, title: &str, summary: &str) -> &str {
        let text = format!("{} {}", title, summary).to_lowercase();
        self.rules
            .iter()
            .find(|(_, matcher)| matcher.is_match(&text))
            .map(|(name, _)| name.as_str())
            .unwrap_or(FALLBACK_TOPIC)
    }
}
