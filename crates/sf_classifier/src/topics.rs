use std::collections::HashSet;
use std::path::Path;
use serde::{Deserialize, Serialize};
use sf_core::{Error, Result};

/// A topic label and the lowercase triggers that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered topic list. Earlier topics win when several match the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicTable {
    topics: Vec<Topic>,
}

impl Default for TopicTable {
    fn default() -> Self {
        Self {
            topics: vec![
                Topic::new("Mars", &["mars", "perseverance", "rover"]),
                Topic::new("SpaceX", &["spacex", "elon musk", "falcon", "starship"]),
                Topic::new("NASA", &["nasa", "hubble", "artemis", "moon", "apollo"]),
                Topic::new("Astronomy", &["black hole", "galaxy", "telescope", "exoplanet"]),
            ],
        }
    }
}

impl TopicTable {
    /// Build a table, lowercasing triggers and rejecting tables that could
    /// not classify deterministically.
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalised = Vec::with_capacity(topics.len());

        for topic in topics {
            let name = topic.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::Config("Topic name must not be empty".to_string()));
            }
            if !seen.insert(name.clone()) {
                return Err(Error::Config(format!("Duplicate topic: {}", name)));
            }

            let mut keywords = Vec::with_capacity(topic.keywords.len());
            for keyword in topic.keywords {
                let keyword = keyword.trim().to_lowercase();
                // an empty trigger is a substring of everything
                if keyword.is_empty() {
                    return Err(Error::Config(format!("Topic {} has an empty keyword", name)));
                }
                keywords.push(keyword);
            }
            if keywords.is_empty() {
                return Err(Error::Config(format!("Topic {} has no keywords", name)));
            }

            normalised.push(Topic { name, keywords });
        }

        Ok(Self { topics: normalised })
    }

    /// Parse `[{"name": "...", "keywords": ["..."]}, ...]`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        Self::new(topics)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read topic table {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
