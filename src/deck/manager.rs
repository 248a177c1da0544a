//! Deck manager: non-repeating draw over a prompt corpus.
//!
//! The deck keeps a shuffled working order of corpus indices and a cursor
//! into it. Each `draw` returns the prompt under the cursor and advances.
//! When the working order runs out, a fresh permutation is generated and
//! drawing continues from its start, so no prompt is seen twice before
//! every other prompt has been seen once.
//!
//! ## Reshuffle boundary
//!
//! A new permutation is independent of the old one, so on its own it could
//! start with the prompt that was just drawn. If that happens (and there is
//! more than one prompt) the first slot is swapped with a random later
//! slot. A prompt therefore never appears twice in a row.

use tracing::debug;

use super::corpus::PromptCorpus;
use crate::core::rng::GameRng;

/// Shuffled draw pile over a [`PromptCorpus`].
///
/// ## Usage
///
/// ```
/// use aita_engine::core::GameRng;
/// use aita_engine::deck::{Deck, PromptCorpus};
///
/// let corpus = PromptCorpus::from_static(&["a", "b", "c"]).unwrap();
/// let mut deck = Deck::new(corpus, GameRng::new(1));
///
/// let mut seen: Vec<String> = (0..3).map(|_| deck.draw().to_string()).collect();
/// seen.sort();
/// assert_eq!(seen, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    corpus: PromptCorpus,
    /// Working order: a permutation of `0..corpus.len()`.
    order: Vec<usize>,
    /// Next position in `order` to draw.
    cursor: usize,
    /// Corpus index of the most recent draw.
    last: Option<usize>,
    /// Completed reshuffles since the last reset.
    cycle: u32,
    rng: GameRng,
}

impl Deck {
    /// Create a deck with a freshly shuffled working order.
    #[must_use]
    pub fn new(corpus: PromptCorpus, mut rng: GameRng) -> Self {
        let order = Self::shuffle(&corpus, &mut rng);
        Self {
            corpus,
            order,
            cursor: 0,
            last: None,
            cycle: 0,
            rng,
        }
    }

    /// Uniform random permutation of the corpus indices.
    ///
    /// The corpus itself is never reordered.
    #[must_use]
    pub fn shuffle(corpus: &PromptCorpus, rng: &mut GameRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..corpus.len()).collect();
        rng.shuffle(&mut order);
        order
    }

    /// Draw the next prompt, reshuffling first if the working order is spent.
    pub fn draw(&mut self) -> &str {
        if self.cursor >= self.order.len() {
            self.reshuffle();
        }

        let index = self.order[self.cursor];
        self.cursor += 1;
        self.last = Some(index);

        debug!(prompt_index = index, remaining = self.remaining(), "Drew prompt");
        self.corpus.get(index).unwrap_or_default()
    }

    /// Discard the current order and start over with a new permutation.
    ///
    /// Used when a new game starts; the cycle counter and repeat guard are
    /// cleared as well.
    pub fn reset(&mut self) {
        self.order = Self::shuffle(&self.corpus, &mut self.rng);
        self.cursor = 0;
        self.last = None;
        self.cycle = 0;
    }

    /// Switch to a different corpus and start a fresh pass over it.
    pub fn replace_corpus(&mut self, corpus: PromptCorpus) {
        self.corpus = corpus;
        self.reset();
        debug!(prompts = self.corpus.len(), "Deck corpus replaced");
    }

    fn reshuffle(&mut self) {
        let mut order = Self::shuffle(&self.corpus, &mut self.rng);

        if let Some(last) = self.last {
            if order.len() > 1 && order[0] == last {
                let swap_with = self.rng.gen_range_usize(1..order.len());
                order.swap(0, swap_with);
            }
        }

        self.order = order;
        self.cursor = 0;
        self.cycle += 1;
        debug!(cycle = self.cycle, "Deck exhausted, reshuffled");
    }

    /// Prompts left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Number of reshuffles since the last reset.
    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Corpus size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Always false: a deck is built from a non-empty corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// The backing corpus.
    #[must_use]
    pub fn corpus(&self) -> &PromptCorpus {
        &self.corpus
    }
}
