//! Prompt deck.
//!
//! - `PromptCorpus`: the validated, fixed set of prompts
//! - `PromptLibrary`: the corpora available per `ContentMode`
//! - `Deck`: shuffled, non-repeating draw over a corpus
//!
//! Placeholder substitution is left to the renderer; see
//! [`crate::core::personalize`].

pub mod corpus;
pub mod library;
pub mod manager;

pub use corpus::PromptCorpus;
pub use library::{ContentMode, PromptLibrary};
pub use manager::Deck;
