//! Institution synonym table
//!
//! A school appears under many names ("University at Buffalo",
//! "State University of New York at Buffalo"). The table maps an institution
//! key to the set of normalized synonyms that identify it, and is loaded from
//! an external JSON file so new institutions need no code change.

use crate::error::Result;
use crate::normalizer::normalize;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SynonymMap {
    institutions: BTreeMap<String, BTreeSet<String>>,
}

/// On-disk shape: `{ "institution key": ["synonym", ...], ... }`.
#[derive(Debug, Deserialize)]
struct SynonymFile(BTreeMap<String, Vec<String>>);

impl SynonymMap {
    pub fn new() -> Self {
        Self {
            institutions: BTreeMap::new(),
        }
    }

    /// Load a synonym table from a JSON file. Keys and synonyms are
    /// normalized on the way in; empty synonyms are discarded.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: SynonymFile = serde_json::from_str(&content)?;
        let mut map = Self::new();
        for (key, synonyms) in file.0 {
            map.insert(&key, synonyms.iter().map(String::as_str));
        }
        Ok(map)
    }

    pub fn insert<'a>(&mut self, key: &str, synonyms: impl IntoIterator<Item = &'a str>) {
        let entry = self
            .institutions
            .entry(normalize(key))
            .or_insert_with(BTreeSet::new);
        for synonym in synonyms {
            let normalized = normalize(synonym);
            if !normalized.is_empty() {
                entry.insert(normalized);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    /// Synonym set of the institution the record-side school value refers
    /// to. A set matches when any of its synonyms contains, or is contained
    /// in, the normalized record value (the key itself counts as a synonym).
    pub fn synonyms_for(&self, record_school_norm: &str) -> Option<&BTreeSet<String>> {
        if record_school_norm.is_empty() {
            return None;
        }
        self.institutions.iter().find_map(|(key, synonyms)| {
            let key_hits =
                key.contains(record_school_norm) || record_school_norm.contains(key.as_str());
            let synonym_hits = synonyms.iter().any(|s| {
                s.contains(record_school_norm) || record_school_norm.contains(s.as_str())
            });
            if key_hits || synonym_hits {
                Some(synonyms)
            } else {
                None
            }
        })
    }
}

impl Default for SynonymMap {
    /// Ships the home institution so a bare checkout works without a
    /// synonyms file.
    fn default() -> Self {
        let mut map = Self::new();
        map.insert(
            "University at Buffalo",
            [
                "University at Buffalo",
                "State University of New York at Buffalo",
                "SUNY Buffalo",
            ],
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_home_institution() {
        let map = SynonymMap::default();
        let synonyms = map.synonyms_for(&normalize("University at Buffalo")).unwrap();
        assert!(synonyms.contains("universityatbuffalo"));
        assert!(synonyms.contains("stateuniversityofnewyorkatbuffalo"));
    }

    #[test]
    fn test_synonyms_for_partial_record_value() {
        let mut map = SynonymMap::new();
        map.insert(
            "State University College of Arts",
            ["State University", "State University College of Arts"],
        );
        // record value shorter than the stored synonym still resolves
        assert!(map.synonyms_for(&normalize("State University")).is_some());
        // and an unrelated school does not
        assert!(map.synonyms_for(&normalize("Tech Institute")).is_none());
    }

    #[test]
    fn test_empty_record_value_resolves_nothing() {
        let map = SynonymMap::default();
        assert!(map.synonyms_for("").is_none());
    }

    #[test]
    fn test_from_path() {
        let dir = std::env::temp_dir().join("alumni-finder-test-synonyms");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("synonyms.json");
        std::fs::write(
            &path,
            r#"{ "Example University": ["Example University", "EU College"] }"#,
        )
        .unwrap();

        let map = SynonymMap::from_path(&path).unwrap();
        assert_eq!(map.len(), 1);
        let synonyms = map.synonyms_for(&normalize("Example University")).unwrap();
        assert!(synonyms.contains("eucollege"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
