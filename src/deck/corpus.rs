//! The fixed set of prompts a game draws from.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Validated, non-empty prompt corpus.
///
/// Loaded once at start-up from static data. Construction fails fast on an
/// empty corpus or a blank prompt so the deck can never hand out nothing.
///
/// Deserializes from a plain JSON array of strings:
///
/// ```
/// use aita_engine::deck::PromptCorpus;
///
/// let corpus: PromptCorpus = serde_json::from_str(r#"["one", "two"]"#).unwrap();
/// assert_eq!(corpus.len(), 2);
///
/// assert!(serde_json::from_str::<PromptCorpus>("[]").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PromptCorpus {
    prompts: Vec<String>,
}

impl PromptCorpus {
    /// Build a corpus from owned prompts.
    pub fn new(prompts: Vec<String>) -> Result<Self, ConfigError> {
        if prompts.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        if let Some(index) = prompts.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::BlankPrompt { index });
        }
        Ok(Self { prompts })
    }

    /// Build a corpus from string slices (handy for static tables).
    pub fn from_static(prompts: &[&str]) -> Result<Self, ConfigError> {
        Self::new(prompts.iter().map(|p| (*p).to_string()).collect())
    }

    /// Number of prompts. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Prompt at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    /// Iterate prompts in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for PromptCorpus {
    type Error = ConfigError;

    fn try_from(prompts: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(prompts)
    }
}

impl From<PromptCorpus> for Vec<String> {
    fn from(corpus: PromptCorpus) -> Self {
        corpus.prompts
    }
}
