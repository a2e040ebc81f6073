// Word-frequency lexicon store.
//
// An external decision-making agent submits partially-known word patterns
// (unknown characters marked with '_') and receives candidate words with
// usage frequencies. When the agent settles on a word it reports it back,
// and the store bumps that word's persisted frequency.

mod config;
mod lexicon;
mod pattern;
mod store;
mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{ConfigError, StoreConfig};
pub use lexicon::{Candidate, Lexicon, LexiconError};
pub use pattern::WILDCARD;
pub use store::{StoreClient, StoreError};
