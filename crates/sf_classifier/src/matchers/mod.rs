use std::fmt;
use sf_core::Result;

pub mod substring;
pub mod word;

pub use substring::SubstringMatcher;
pub use word::WordBoundaryMatcher;

/// Decides whether one topic's triggers occur in already-lowercased text.
pub trait KeywordMatcher: Send + Sync + fmt::Debug {
    fn is_match(&self, text: &str) -> bool;
}

/// How triggers are matched against article text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchMode {
    /// Plain substring containment; "marsh" matches "mars".
    #[default]
    Substring,
    /// Triggers must start and end on word boundaries.
    Word,
}

impl MatchMode {
    pub fn build(&self, keywords: &[String]) -> Result<Box<dyn KeywordMatcher>> {
        match self {
            MatchMode::Substring => Ok(Box::new(SubstringMatcher::new(keywords))),
            MatchMode::Word => Ok(Box::new(WordBoundaryMatcher::new(keywords)?)),
        }
    }
}
