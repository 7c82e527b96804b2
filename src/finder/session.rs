//! Credentials and the login retry contract
//!
//! Scraper accounts get blocked; the store holds several and the retry loop
//! walks them until one works. Running out of credentials is fatal to the
//! whole run.

use crate::error::{AlumniFinderError, Result};
use crate::finder::search::SearchProvider;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,

    /// Disabled credentials are skipped without counting as an attempt.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl CredentialStore {
    /// Load a store from a JSON file; a missing file is an empty store so
    /// `credentials add` can bootstrap it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let store: CredentialStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn push(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// Try every enabled credential until one logs in. All rejected (or none
/// enabled) is an exhaustion failure; a broken login page propagates as-is.
pub fn login_with_retry(
    provider: &mut dyn SearchProvider,
    store: &CredentialStore,
) -> Result<()> {
    for credential in store.credentials.iter().filter(|c| c.enabled) {
        if provider.login(credential)? {
            return Ok(());
        }
    }
    Err(AlumniFinderError::LoginExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::search::SearchSnippet;
    use crate::matcher::types::ScrapedProfile;

    /// Accepts one specific email, records every attempt.
    struct FixedLoginProvider {
        accepts: &'static str,
        attempts: Vec<String>,
    }

    impl SearchProvider for FixedLoginProvider {
        fn login(&mut self, credential: &Credential) -> Result<bool> {
            self.attempts.push(credential.email.clone());
            Ok(credential.email == self.accepts)
        }

        fn search(&mut self, _query: &str) -> Result<Vec<SearchSnippet>> {
            Ok(Vec::new())
        }

        fn fetch_profile(&mut self, link: &str) -> Result<ScrapedProfile> {
            Err(AlumniFinderError::ElementNotFound(link.into()))
        }
    }

    fn credential(email: &str, enabled: bool) -> Credential {
        Credential {
            email: email.into(),
            password: "secret".into(),
            enabled,
        }
    }

    #[test]
    fn test_retry_stops_at_first_success() {
        let mut provider = FixedLoginProvider {
            accepts: "second@example.com",
            attempts: Vec::new(),
        };
        let store = CredentialStore {
            credentials: vec![
                credential("first@example.com", true),
                credential("second@example.com", true),
                credential("third@example.com", true),
            ],
        };
        login_with_retry(&mut provider, &store).unwrap();
        assert_eq!(provider.attempts, ["first@example.com", "second@example.com"]);
    }

    #[test]
    fn test_retry_skips_disabled_credentials() {
        let mut provider = FixedLoginProvider {
            accepts: "second@example.com",
            attempts: Vec::new(),
        };
        let store = CredentialStore {
            credentials: vec![
                credential("first@example.com", false),
                credential("second@example.com", true),
            ],
        };
        login_with_retry(&mut provider, &store).unwrap();
        assert_eq!(provider.attempts, ["second@example.com"]);
    }

    #[test]
    fn test_exhaustion_is_fatal() {
        let mut provider = FixedLoginProvider {
            accepts: "nobody@example.com",
            attempts: Vec::new(),
        };
        let store = CredentialStore {
            credentials: vec![credential("first@example.com", true)],
        };
        let err = login_with_retry(&mut provider, &store).unwrap_err();
        assert!(matches!(err, AlumniFinderError::LoginExhausted));
    }

    #[test]
    fn test_empty_store_is_exhausted() {
        let mut provider = FixedLoginProvider {
            accepts: "nobody@example.com",
            attempts: Vec::new(),
        };
        let err = login_with_retry(&mut provider, &CredentialStore::default()).unwrap_err();
        assert!(matches!(err, AlumniFinderError::LoginExhausted));
        assert!(provider.attempts.is_empty());
    }

    #[test]
    fn test_store_roundtrip() {
        let dir = std::env::temp_dir().join("alumni-finder-test-credstore");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cred.json");

        let mut store = CredentialStore::default();
        store.push(credential("scraper@example.com", true));
        store.save(&path).unwrap();

        let loaded = CredentialStore::load(&path).unwrap();
        assert_eq!(loaded.credentials.len(), 1);
        assert_eq!(loaded.credentials[0].email, "scraper@example.com");
        assert!(loaded.credentials[0].enabled);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_store_is_empty() {
        let store =
            CredentialStore::load(Path::new("/nonexistent/alumni-finder/cred.json")).unwrap();
        assert!(store.is_empty());
    }
}
