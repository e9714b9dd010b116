use std::fmt;

/// Label given to text that matches no topic.
pub const FALLBACK_TOPIC: &str = "Other";

pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Assign exactly one topic label to an article's text.
    ///
    /// Must be total: every input, including two empty strings, yields a
    /// label (falling back to [`FALLBACK_TOPIC`]).
    fn classify(&self, title: &str, summary: &str) -> &str;
}
