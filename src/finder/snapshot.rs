//! Snapshot provider
//!
//! Replays a captured search session from a versioned JSON file: queries map
//! to snippet lists, links map to scraped profiles. Used for offline runs,
//! development and tests; a live browser-backed provider implements the same
//! trait and is interchangeable.

use crate::error::{AlumniFinderError, Result};
use crate::finder::search::{SearchProvider, SearchSnippet};
use crate::finder::session::Credential;
use crate::matcher::types::ScrapedProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk capture of one search session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Version for compatibility checks.
    pub version: u32,

    /// Account emails the capture accepts at login.
    #[serde(default)]
    pub accepted_accounts: Vec<String>,

    /// Search query -> result snippets. Unknown queries are empty results.
    #[serde(default)]
    pub searches: HashMap<String, Vec<SearchSnippet>>,

    /// Profile link -> scraped profile. Unknown links are structural
    /// failures, like a page whose expected elements are gone.
    #[serde(default)]
    pub profiles: HashMap<String, ScrapedProfile>,
}

impl Snapshot {
    pub const CURRENT_VERSION: u32 = 1;
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            accepted_accounts: Vec::new(),
            searches: HashMap::new(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AlumniFinderError::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        if snapshot.version != Snapshot::CURRENT_VERSION {
            return Err(AlumniFinderError::InvalidSnapshot(format!(
                "version {} (expected {})",
                snapshot.version,
                Snapshot::CURRENT_VERSION
            )));
        }
        Ok(Self { snapshot })
    }
}

impl SearchProvider for SnapshotProvider {
    fn login(&mut self, credential: &Credential) -> Result<bool> {
        Ok(self
            .snapshot
            .accepted_accounts
            .iter()
            .any(|a| a == &credential.email))
    }

    fn search(&mut self, query: &str) -> Result<Vec<SearchSnippet>> {
        // unknown query = the results page rendered nothing: not an error
        Ok(self.snapshot.searches.get(query).cloned().unwrap_or_default())
    }

    fn fetch_profile(&mut self, link: &str) -> Result<ScrapedProfile> {
        self.snapshot
            .profiles
            .get(link)
            .cloned()
            .ok_or_else(|| AlumniFinderError::ElementNotFound(link.to_string()))
    }
}
