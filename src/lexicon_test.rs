// Tests for the Lexicon facade
// Test cases follow the store's observable contract:
// - first use -> frequency 1; repeat use -> prior + 1
// - use_word is case-insensitive
// - wildcard lookup, multi-pattern concatenation order, no dedup
// - unmatched pattern -> empty result, not an error
// - close is idempotent; a closed lexicon fails typed, and get_matches
//   degrades to zero candidates without aborting
// - concurrent use_word calls settle at exactly prior + N

use std::sync::Arc;

use super::*;
use tempfile::TempDir;

fn open_test_lexicon() -> (Lexicon, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = StoreConfig {
        url: temp_dir
            .path()
            .join("lexicon.db")
            .to_string_lossy()
            .into_owned(),
        ..StoreConfig::default()
    };
    let lexicon = Lexicon::open(&config).expect("Failed to open lexicon");
    (lexicon, temp_dir)
}

fn seed(lexicon: &Lexicon, word: &str, uses: u64) {
    for _ in 0..uses {
        lexicon.use_word(word).expect("use_word failed");
    }
}

#[test]
fn test_first_use_has_frequency_one() {
    let (lexicon, _temp) = open_test_lexicon();

    lexicon.use_word("cat").unwrap();

    let matches = lexicon.get_matches(&["cat"]);
    assert_eq!(
        matches,
        vec![Candidate {
            word: "cat".to_string(),
            frequency: 1
        }]
    );
}

#[test]
fn test_repeated_use_increments_frequency() {
    let (lexicon, _temp) = open_test_lexicon();

    seed(&lexicon, "cat", 5);
    lexicon.use_word("cat").unwrap();

    assert_eq!(lexicon.frequency_of("cat").unwrap(), Some(6));
}

#[test]
fn test_use_word_is_case_insensitive() {
    let (lexicon, _temp) = open_test_lexicon();

    lexicon.use_word("Cat").unwrap();
    lexicon.use_word("cat").unwrap();
    lexicon.use_word("CAT").unwrap();

    assert_eq!(lexicon.frequency_of("cAt").unwrap(), Some(3));
    // A single entry exists, under the lowercase form
    let matches = lexicon.get_matches(&["c_t"]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "cat");
}

#[test]
fn test_wildcard_lookup_matches_fixed_positions() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 3);
    seed(&lexicon, "car", 1);
    seed(&lexicon, "cup", 2);

    let matches = lexicon.get_matches(&["c_t"]);
    assert_eq!(
        matches,
        vec![Candidate {
            word: "cat".to_string(),
            frequency: 3
        }]
    );
}

#[test]
fn test_multi_pattern_results_concatenate_in_input_order() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 3);
    seed(&lexicon, "car", 1);
    seed(&lexicon, "cup", 2);

    let matches = lexicon.get_matches(&["c_t", "c_p"]);
    let words: Vec<&str> = matches.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, ["cat", "cup"]);
}

#[test]
fn test_no_cross_pattern_deduplication() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 2);

    let matches = lexicon.get_matches(&["cat", "c_t"]);
    let words: Vec<&str> = matches.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, ["cat", "cat"]);
}

#[test]
fn test_unmatched_pattern_yields_empty_not_error() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 1);

    assert!(lexicon.get_matches(&["z_z"]).is_empty());
    assert_eq!(lexicon.matches_for("z_z").unwrap(), vec![]);
}

#[test]
fn test_patterns_are_case_insensitive() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 1);

    let matches = lexicon.get_matches(&["C_T"]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "cat");
}

#[test]
fn test_empty_word_is_rejected() {
    let (lexicon, _temp) = open_test_lexicon();

    let result = lexicon.use_word("   ");
    assert!(matches!(result, Err(LexiconError::Update(_))));
}

#[test]
fn test_close_is_idempotent() {
    let (lexicon, _temp) = open_test_lexicon();

    lexicon.close();
    lexicon.close();
}

#[test]
fn test_closed_lexicon_fails_typed() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 1);
    lexicon.close();

    assert!(matches!(lexicon.use_word("cat"), Err(LexiconError::Update(_))));
    assert!(matches!(lexicon.matches_for("c_t"), Err(LexiconError::Query(_))));
    assert!(matches!(lexicon.frequency_of("cat"), Err(LexiconError::Query(_))));
}

#[test]
fn test_get_matches_survives_failing_patterns() {
    let (lexicon, _temp) = open_test_lexicon();
    lexicon.close();

    // Every pattern fails; the batch still returns (empty) instead of aborting
    let matches = lexicon.get_matches(&["c_t", "c_p"]);
    assert!(matches.is_empty());
}

#[test]
fn test_concurrent_use_word_has_no_lost_updates() {
    let (lexicon, _temp) = open_test_lexicon();
    seed(&lexicon, "cat", 2);

    let lexicon = Arc::new(lexicon);
    let mut handles = Vec::new();
    for _ in 0..4 {
        let lexicon = Arc::clone(&lexicon);
        handles.push(std::thread::spawn(move || {
            for _ in 0..5 {
                lexicon.use_word("cat").expect("use_word failed");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(lexicon.frequency_of("cat").unwrap(), Some(22));
}

#[test]
fn test_candidate_serializes_with_camel_case_fields() {
    let candidate = Candidate {
        word: "cat".to_string(),
        frequency: 3,
    };
    let json = serde_json::to_string(&candidate).unwrap();
    assert_eq!(json, r#"{"word":"cat","frequency":3}"#);

    let back: Candidate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, candidate);
}
