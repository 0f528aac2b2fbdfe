//! Non-repeating random status selection.

use super::catalog::StatusCatalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks random phrases from a catalog, never the same one twice in a row.
#[derive(Debug)]
pub struct StatusRotator<R = StdRng> {
    catalog: StatusCatalog,
    last_selected: Option<String>,
    rng: R,
}

impl StatusRotator<StdRng> {
    /// Creates a rotator seeded from OS entropy.
    pub fn new(catalog: StatusCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl<R: Rng> StatusRotator<R> {
    /// Creates a rotator with an explicit random source.
    pub fn with_rng(catalog: StatusCatalog, rng: R) -> Self {
        Self {
            catalog,
            last_selected: None,
            rng,
        }
    }

    /// Returns a random phrase that differs from the previous pick.
    ///
    /// A single-entry catalog always yields its only phrase, and so does a
    /// catalog whose entries are all the same string.
    pub fn pick(&mut self) -> String {
        let len = self.catalog.len();
        let last = self.last_selected.as_deref();

        let choice = if len == 1 || self.catalog.iter().all(|s| Some(s) == last) {
            self.phrase_at(0)
        } else {
            loop {
                let index = self.rng.gen_range(0..len);
                let candidate = self.phrase_at(index);
                if self.last_selected.as_deref() != Some(candidate.as_str()) {
                    break candidate;
                }
            }
        };

        self.last_selected = Some(choice.clone());
        choice
    }

    /// The most recent pick, if any.
    pub fn peek_last(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    fn phrase_at(&self, index: usize) -> String {
        self.catalog.get(index).unwrap_or_default().to_string()
    }
}
