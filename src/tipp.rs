//! A short piece of advice tagged with topics, assembled through a builder.

use crate::error::{Result, TippError};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tipp {
    text: String,
    topics: Vec<String>,
}

impl Tipp {
    pub fn builder(text: impl Into<String>) -> TippBuilder {
        TippBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

impl fmt::Display for Tipp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.text, self.topics.join(", "))
    }
}

/// Consuming builder: each step takes `self` and hands it back.
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until build() is called"]
pub struct TippBuilder {
    text: String,
    topics: Vec<String>,
}

impl TippBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        TippBuilder {
            text: text.into(),
            topics: Vec::new(),
        }
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }

    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics.extend(topics.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Tipp> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(TippError::EmptyTipp);
        }
        Ok(Tipp {
            text: text.to_string(),
            topics: self
                .topics
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unique()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_topics_in_order() {
        let tipp = Tipp::builder("Prefer iterators over index loops")
            .topic("iterators")
            .topics(["style", "performance"])
            .build()
            .unwrap();
        assert_eq!(tipp.topics(), ["iterators", "style", "performance"]);
        assert!(tipp.has_topic("style"));
        assert_eq!(
            tipp.to_string(),
            "Prefer iterators over index loops [iterators, style, performance]"
        );
    }

    #[test]
    fn duplicate_and_blank_topics_collapse() {
        let tipp = TippBuilder::new("  x  ")
            .topics(vec!["a", " a", "", "b", "a"])
            .build()
            .unwrap();
        assert_eq!(tipp.text(), "x");
        assert_eq!(tipp.topics(), ["a", "b"]);
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            TippBuilder::new("   ").topic("t").build(),
            Err(TippError::EmptyTipp)
        ));
    }

    #[test]
    fn no_topics_renders_empty_brackets() {
        let tipp = TippBuilder::new("Read the docs").build().unwrap();
        assert_eq!(tipp.to_string(), "Read the docs []");
    }
}
