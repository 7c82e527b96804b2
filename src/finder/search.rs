//! Search provider seam
//!
//! The matching core never touches a page structure; everything
//! browser-shaped sits behind this trait. A live implementation drives a
//! real browser session; [`crate::finder::snapshot::SnapshotProvider`]
//! replays a captured session offline.

use crate::error::Result;
use crate::finder::session::Credential;
use crate::matcher::types::ScrapedProfile;
use serde::{Deserialize, Serialize};

/// One search-result entry as displayed on the results page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    /// Name text as shown on the snippet.
    #[serde(default)]
    pub display_name: String,

    /// Profile link the snippet points at.
    #[serde(default)]
    pub link: String,
}

/// Injected search capability.
///
/// Calls are synchronous and blocking; a provider that waits on page loads
/// does so internally with a bounded timeout. A timed-out wait yields an
/// empty result (transient absence), while a missing required page element
/// is a structural failure surfaced as
/// [`crate::error::AlumniFinderError::ElementNotFound`].
pub trait SearchProvider {
    /// Attempt a login. `Ok(false)` means the credential was rejected;
    /// errors mean the login page itself broke.
    fn login(&mut self, credential: &Credential) -> Result<bool>;

    /// Run one search. An unknown or empty result page is `Ok(vec![])`.
    fn search(&mut self, query: &str) -> Result<Vec<SearchSnippet>>;

    /// Visit a candidate profile and scrape it.
    fn fetch_profile(&mut self, link: &str) -> Result<ScrapedProfile>;
}
