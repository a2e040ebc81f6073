// Entry operations: wildcard match lookup and the frequency upsert
//
// Words reaching this layer are already normalized (lowercase, trimmed)
// by the public facade.

use libsql::params;

use super::client::{StoreClient, StoreError};
use crate::lexicon::Candidate;
use crate::pattern;

impl StoreClient {
    /// Find all entries whose word matches the pattern under
    /// single-character-wildcard semantics.
    ///
    /// Read-only. Matches are returned most-frequent first, ties broken
    /// alphabetically, so the calling agent sees a deterministic order.
    pub async fn match_pattern(&self, pattern: &str) -> Result<Vec<Candidate>, StoreError> {
        let like = pattern::to_like_expression(pattern);
        let sql = format!(
            "SELECT word, freq FROM {} WHERE word LIKE ?1 ESCAPE '\\' ORDER BY freq DESC, word ASC",
            self.table()
        );

        let mut rows = self.query(&sql, params![like]).await?;
        let mut candidates = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            let word: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
            let freq: i64 = row.get(1).map_err(|e| StoreError::Query(e.to_string()))?;
            candidates.push(Candidate {
                word,
                frequency: freq.max(0) as u64,
            });
        }
        Ok(candidates)
    }

    /// Record one use of a word: insert it with frequency 1, or increment
    /// the existing entry.
    ///
    /// A single upsert statement, so concurrent callers cannot lose
    /// updates: the final frequency is always (prior, or 0 if absent) + 1.
    /// Returns the frequency after the increment.
    pub async fn record_use(&self, word: &str) -> Result<u64, StoreError> {
        let created_at = chrono::Utc::now().to_rfc3339();
        let sql = format!(
            "INSERT INTO {} (word, freq, created_at) VALUES (?1, 1, ?2)
             ON CONFLICT(word) DO UPDATE SET freq = freq + 1
             RETURNING freq",
            self.table()
        );

        let mut rows = self.query(&sql, params![word, created_at]).await?;
        match rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            Some(row) => {
                let freq: i64 = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(freq.max(0) as u64)
            }
            None => Err(StoreError::Query(
                "frequency upsert returned no row".to_string(),
            )),
        }
    }

    /// Exact-match read of one entry's frequency. None if the word has
    /// never been recorded.
    pub async fn frequency_of(&self, word: &str) -> Result<Option<u64>, StoreError> {
        let sql = format!("SELECT freq FROM {} WHERE word = ?1", self.table());

        let mut rows = self.query(&sql, params![word]).await?;
        match rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            Some(row) => {
                let freq: i64 = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(Some(freq.max(0) as u64))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "entries_test.rs"]
mod tests;
