pub mod matchers;
pub mod models;
pub mod topics;

use matchers::MatchMode;
use topics::TopicTable;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub topics: TopicTable,
    pub match_mode: MatchMode,
}

pub mod prelude {
    pub use super::Config;
    pub use super::matchers::MatchMode;
    pub use super::models::{create_classifier, KeywordClassifier};
    pub use super::topics::{Topic, TopicTable};
    pub use sf_core::{Classifier, Result, Error};
}

pub use models::{create_classifier, KeywordClassifier};
