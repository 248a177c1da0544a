//! Prompt corpora keyed by content mode.
//!
//! A game always has a normal corpus. A second, workplace-safe corpus is
//! optional; when present, setup can switch between the two.

use serde::{Deserialize, Serialize};

use super::corpus::PromptCorpus;

/// Which prompt set a game deals from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// The full prompt set.
    #[default]
    Normal,
    /// Safe-for-work prompts only.
    Sfw,
}

impl ContentMode {
    /// Every mode, in display order.
    pub const ALL: [ContentMode; 2] = [ContentMode::Normal, ContentMode::Sfw];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentMode::Normal => "normal",
            ContentMode::Sfw => "sfw",
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The corpora a game may deal from.
///
/// ```
/// use aita_engine::deck::{ContentMode, PromptCorpus, PromptLibrary};
///
/// let normal = PromptCorpus::from_static(&["%% keyed a car"]).unwrap();
/// let sfw = PromptCorpus::from_static(&["%% ate the last donut"]).unwrap();
/// let library = PromptLibrary::new(normal).with_sfw(sfw);
///
/// assert!(library.supports(ContentMode::Sfw));
/// assert_eq!(library.get(ContentMode::Sfw).map(|c| c.len()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptLibrary {
    normal: PromptCorpus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sfw: Option<PromptCorpus>,
}

impl PromptLibrary {
    /// Library with only the normal corpus.
    #[must_use]
    pub fn new(normal: PromptCorpus) -> Self {
        Self { normal, sfw: None }
    }

    /// Add the safe-for-work corpus.
    #[must_use]
    pub fn with_sfw(mut self, sfw: PromptCorpus) -> Self {
        self.sfw = Some(sfw);
        self
    }

    #[must_use]
    pub fn get(&self, mode: ContentMode) -> Option<&PromptCorpus> {
        match mode {
            ContentMode::Normal => Some(&self.normal),
            ContentMode::Sfw => self.sfw.as_ref(),
        }
    }

    #[must_use]
    pub fn supports(&self, mode: ContentMode) -> bool {
        self.get(mode).is_some()
    }

    /// Modes this library can serve.
    pub fn modes(&self) -> impl Iterator<Item = ContentMode> + '_ {
        ContentMode::ALL.into_iter().filter(move |mode| self.supports(*mode))
    }
}

impl From<PromptCorpus> for PromptLibrary {
    fn from(normal: PromptCorpus) -> Self {
        Self::new(normal)
    }
}
