use std::collections::HashSet;

/// Case-insensitive set of words matched against whole words of a recipe name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// True if any whitespace-separated word of `name` is in the set.
    /// Punctuation stays attached, so `Korean-Style` is one word.
    pub fn matches(&self, name: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        name.split_whitespace()
            .any(|word| self.words.contains(&word.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
