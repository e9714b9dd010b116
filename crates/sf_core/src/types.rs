use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use crate::Error;

/// Upstream identifier of an article. The Spaceflight News API uses integers,
/// but nothing in the pipeline depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        ArticleId::Number(id)
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        ArticleId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Everything else the upstream sent (url, news_site, published_at, ...),
    /// passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(id: impl Into<ArticleId>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            category: None,
            extra: Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Upstream collection being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Articles,
    Blogs,
    Reports,
    Info,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Articles,
        ResourceKind::Blogs,
        ResourceKind::Reports,
        ResourceKind::Info,
    ];

    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Articles => "articles",
            ResourceKind::Blogs => "blogs",
            ResourceKind::Reports => "reports",
            ResourceKind::Info => "info",
        }
    }

    /// `info` is a single metadata object; everything else is a page of articles.
    pub fn is_paginated(&self) -> bool {
        !matches!(self, ResourceKind::Info)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.path().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("Unknown resource kind: {}", s)))
    }
}

/// One page of a paginated upstream collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Article>,
}

impl Page {
    pub fn from_results(results: Vec<Article>) -> Self {
        Self {
            count: Some(results.len() as u64),
            next: None,
            previous: None,
            results,
        }
    }
}

/// What a successful upstream call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBatch {
    Page(Page),
    Info(Value),
}

/// What a successful ingest hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ingested {
    /// Newly processed articles, in upstream order
    Articles(Vec<Article>),
    /// The upstream `info` object, unmodified
    Info(Value),
}

impl Ingested {
    pub fn articles(&self) -> &[Article] {
        match self {
            Ingested::Articles(articles) => articles,
            Ingested::Info(_) => &[],
        }
    }

    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Ingested::Articles(articles) => articles,
            Ingested::Info(_) => Vec::new(),
        }
    }
}
