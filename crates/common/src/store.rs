use crate::error::StoreError;
use std::collections::HashMap;

/// Durable key-value storage for the best score.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError>;
    fn set(&mut self, key: &str, score: u32) -> Result<(), StoreError>;
}

/// Parses a score the way it is kept in string-valued stores such as
/// `localStorage`.
pub fn parse_score(key: &str, value: &str) -> Result<u32, StoreError> {
    value.trim().parse().map_err(|_| StoreError::Corrupt {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, score: u32) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), score);
        store
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, score: u32) -> Result<(), StoreError> {
        self.writes += 1;
        self.values.insert(key.to_string(), score);
        Ok(())
    }
}
