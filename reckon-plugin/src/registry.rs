//! Operation Registry

use crate::{Operation, OperationMeta};
use reckon_core::CalcError;
use std::collections::HashMap;
use std::sync::Arc;

/// Central mapping from operation name to handler.
///
/// Names are unique; lookup is case-sensitive exact match. Built once at
/// startup by the plugin loader and read-mostly afterwards.
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn Operation>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self { operations: HashMap::new() }
    }

    /// Register an operation under its metadata name.
    ///
    /// Fails with `DuplicateOperation` if the name is taken; the first
    /// registration stays active.
    pub fn register(&mut self, operation: Arc<dyn Operation>) -> Result<(), CalcError> {
        let name = operation.meta().name;
        if self.operations.contains_key(name) {
            return Err(CalcError::duplicate(name));
        }
        self.operations.insert(name.to_string(), operation);
        Ok(())
    }

    /// Look up an operation by exact name
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Operation>, CalcError> {
        self.operations
            .get(name)
            .ok_or_else(|| CalcError::unknown_operation(name, self.find_similar(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Metadata of every registered operation, sorted by name
    pub fn metas(&self) -> Vec<OperationMeta> {
        let mut metas: Vec<OperationMeta> =
            self.operations.values().map(|op| op.meta()).collect();
        metas.sort_unstable_by_key(|m| m.name);
        metas
    }

    /// Find registered names similar to the given name (for error suggestions)
    fn find_similar(&self, name: &str) -> Vec<String> {
        let mut matches: Vec<(String, usize)> = self
            .operations
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(name, candidate);
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(candidate, _)| candidate).collect()
    }

    /// Similarity score between the query and a candidate (higher = closer)
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
