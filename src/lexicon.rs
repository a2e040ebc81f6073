// Lexicon - the public blocking facade over the store client
//
// Called by the decision-making agent: pattern lookups in, word-use
// confirmations back. The store client underneath is async; this surface
// bridges with util::run_async so callers stay synchronous.

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::pattern;
use crate::store::StoreClient;
use crate::util::run_async;

/// A candidate word returned from a pattern lookup.
///
/// Transient: `frequency` is a snapshot read at query time, not a live
/// view of the entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The matched word
    pub word: String,
    /// The word's use count at query time
    pub frequency: u64,
}

/// Error types for lexicon operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    /// The store could not be reached or the configuration was rejected
    #[error("Could not reach the lexicon store: {0}")]
    Connection(String),
    /// A pattern lookup failed
    #[error("Lookup failed: {0}")]
    Query(String),
    /// Recording a word use failed
    #[error("Failed to record word use: {0}")]
    Update(String),
}

/// Word-frequency lexicon backed by a persistent entries table.
///
/// One instance owns one store connection. All operations are blocking;
/// `close` (or drop) releases the connection on every exit path.
pub struct Lexicon {
    client: StoreClient,
}

impl Lexicon {
    /// Open the lexicon described by `config`: connect, then create or
    /// migrate the entries table as needed.
    pub fn open(config: &StoreConfig) -> Result<Self, LexiconError> {
        let client = StoreClient::connect_blocking(config)
            .map_err(|e| LexiconError::Connection(e.to_string()))?;
        crate::info!(
            "Lexicon store opened at '{}' (table '{}')",
            config.url,
            config.table
        );
        Ok(Self { client })
    }

    /// Open the lexicon with the default configuration.
    pub fn open_default() -> Result<Self, LexiconError> {
        Self::open(&StoreConfig::default())
    }

    /// Look up candidates for every pattern, in input order.
    ///
    /// Each pattern is matched independently and the results are
    /// concatenated; nothing is deduplicated across patterns. A pattern
    /// whose query fails is logged and contributes zero candidates - it
    /// never aborts the rest of the batch.
    pub fn get_matches<S: AsRef<str>>(&self, patterns: &[S]) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for pattern in patterns {
            match self.matches_for(pattern.as_ref()) {
                Ok(mut found) => candidates.append(&mut found),
                Err(e) => {
                    crate::warn!("Skipping pattern '{}': {}", pattern.as_ref(), e);
                }
            }
        }
        candidates
    }

    /// Look up candidates for a single pattern, surfacing the error.
    ///
    /// The pattern is matched case-insensitively; '_' stands for any
    /// single character.
    pub fn matches_for(&self, pattern: &str) -> Result<Vec<Candidate>, LexiconError> {
        let normalized = pattern::normalize(pattern);
        run_async(self.client.match_pattern(&normalized))
            .map_err(|e| LexiconError::Query(e.to_string()))
    }

    /// Record that `word` was chosen as the best candidate.
    ///
    /// Inserts a new entry at frequency 1, or atomically increments the
    /// existing one. Case-insensitive: the word is normalized to lowercase
    /// first.
    pub fn use_word(&self, word: &str) -> Result<(), LexiconError> {
        let normalized = pattern::normalize(word);
        if normalized.is_empty() {
            return Err(LexiconError::Update("cannot record an empty word".to_string()));
        }

        match run_async(self.client.record_use(&normalized)) {
            Ok(freq) => {
                crate::debug!("Recorded use of '{}' (freq now {})", normalized, freq);
                Ok(())
            }
            Err(e) => {
                crate::warn!("Failed to record use of '{}': {}", normalized, e);
                Err(LexiconError::Update(e.to_string()))
            }
        }
    }

    /// Current frequency of a word, or None if it was never recorded.
    pub fn frequency_of(&self, word: &str) -> Result<Option<u64>, LexiconError> {
        let normalized = pattern::normalize(word);
        run_async(self.client.frequency_of(&normalized))
            .map_err(|e| LexiconError::Query(e.to_string()))
    }

    /// Release the store connection. Idempotent; operations on a closed
    /// lexicon return typed errors.
    pub fn close(&self) {
        self.client.close();
    }
}

#[cfg(test)]
#[path = "lexicon_test.rs"]
mod tests;
