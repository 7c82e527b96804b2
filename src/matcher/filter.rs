//! Two-stage search-result filter
//!
//! A record moves through `SEARCHING -> COARSE_FILTERED -> SCORED ->
//! RECORDED`. The coarse stage is a cheap name check over the search
//! snippets (the search backend returns unrelated results now and then);
//! only its survivors pay for a profile visit and a full scoring pass.

use super::scorer::{score_candidate, ScoreOptions};
use super::synonyms::SynonymMap;
use super::types::{AlumniRecord, MatchResult};
use crate::error::{AlumniFinderError, Result};
use crate::finder::search::{SearchProvider, SearchSnippet};
use crate::normalizer::normalize;
use std::collections::HashSet;

/// Per-record processing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPhase {
    Searching,
    CoarseFiltered,
    Scored,
    Recorded,
}

impl std::fmt::Display for RecordPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordPhase::Searching => write!(f, "searching"),
            RecordPhase::CoarseFiltered => write!(f, "coarse-filtered"),
            RecordPhase::Scored => write!(f, "scored"),
            RecordPhase::Recorded => write!(f, "recorded"),
        }
    }
}

/// A snippet that survived the coarse filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub link: String,
    pub display_name: String,
}

/// Coarse filter: keep a snippet only when the normalized record first AND
/// last name both appear in its displayed name. Duplicate links are kept
/// once; snippet order is preserved.
pub fn coarse_filter(
    snippets: &[SearchSnippet],
    first_name: &str,
    last_name: &str,
) -> Vec<Candidate> {
    let first = normalize(first_name);
    let last = normalize(last_name);
    let mut survivors = Vec::new();
    if first.is_empty() || last.is_empty() {
        return survivors;
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for snippet in snippets {
        let name = normalize(&snippet.display_name);
        if name.contains(&first) && name.contains(&last) && seen.insert(snippet.link.as_str()) {
            survivors.push(Candidate {
                link: snippet.link.clone(),
                display_name: snippet.display_name.clone(),
            });
        }
    }
    survivors
}

/// What the fine filter produced for one record.
#[derive(Debug, Clone, Default)]
pub struct FineFilterOutcome {
    pub results: Vec<MatchResult>,
    /// Candidates whose profile page could not be located. Reported, never
    /// swallowed; the remaining candidates are still scored.
    pub structural_failures: Vec<String>,
}

/// Fine filter: visit every surviving candidate, build its profile, score
/// it, and emit one MatchResult per candidate. No candidate cap. Only
/// non-structural provider errors propagate.
pub fn fine_filter(
    provider: &mut dyn SearchProvider,
    candidates: &[Candidate],
    record: &AlumniRecord,
    synonyms: &SynonymMap,
    options: &ScoreOptions,
) -> Result<FineFilterOutcome> {
    let mut outcome = FineFilterOutcome::default();
    for candidate in candidates {
        let profile = match provider.fetch_profile(&candidate.link) {
            Ok(profile) => profile,
            Err(AlumniFinderError::ElementNotFound(msg)) => {
                outcome
                    .structural_failures
                    .push(format!("{}: {}", candidate.link, msg));
                continue;
            }
            Err(e) => return Err(e),
        };

        let score = score_candidate(record, &profile, synonyms, options);
        let latest = profile.jobs.first();
        outcome.results.push(MatchResult {
            link: candidate.link.clone(),
            display_name: candidate.display_name.clone(),
            accuracy_score: score.total,
            job_adopted: score.job_adopted,
            latest_title: latest.map(|j| j.title.clone()).unwrap_or_default(),
            latest_company: latest.map(|j| j.company.clone()).unwrap_or_default(),
            latest_location: latest.and_then(|j| j.location_hint()).unwrap_or_default(),
        });
    }
    Ok(outcome)
}
