//! Candidate scorer
//!
//! Aggregates the field matchers into one integer accuracy score for an
//! (AlumniRecord, ScrapedProfile) pair. Deliberately a coarse additive
//! heuristic: false positives are cut upstream by the coarse name filter and
//! downstream by whoever reviews the ranked output.

use super::fields;
use super::synonyms::SynonymMap;
use super::types::{AlumniRecord, ScrapedProfile};
use crate::normalizer::normalize;

/// Optional search-side targets that earn the latest job a bonus point each.
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    /// Job position the search is looking for.
    pub target_position: Option<String>,
    /// Geolocation expected in the latest job's description block. When
    /// unset, the record's stored work location stands in.
    pub target_geolocation: Option<String>,
}

/// Score breakdown for one candidate profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    pub total: u32,
    pub job: u32,
    pub education: u32,
    /// True when the record had no stored job title and the scraped latest
    /// job became the record's effective current job instead of being
    /// compared. The numeric score stays 0 for that pass either way.
    pub job_adopted: bool,
    pub adopted_title: String,
    pub adopted_company: String,
}

/// Score one (record, profile) pair. Pure: no hidden state, scoring the same
/// pair twice yields the same result. Missing job or education sections are
/// expected and contribute 0, never an error.
pub fn score_candidate(
    record: &AlumniRecord,
    profile: &ScrapedProfile,
    synonyms: &SynonymMap,
    options: &ScoreOptions,
) -> CandidateScore {
    let (job, job_adopted, adopted_title, adopted_company) =
        score_jobs(record, profile, options);
    let education = score_education(record, profile, synonyms);
    CandidateScore {
        total: job + education,
        job,
        education,
        job_adopted,
        adopted_title,
        adopted_company,
    }
}

/// Job component.
///
/// The latest job is the first entry of the profile's reverse-chronological
/// job list. An empty roster job title triggers the bootstrap case: the
/// latest scraped title/company is adopted, the per-job comparison loop is
/// skipped, and 0 points come out of it. The latest-job bonus against the
/// optional search targets applies in both cases.
fn score_jobs(
    record: &AlumniRecord,
    profile: &ScrapedProfile,
    options: &ScoreOptions,
) -> (u32, bool, String, String) {
    let mut score = 0;
    let mut adopted = false;
    let mut adopted_title = String::new();
    let mut adopted_company = String::new();

    let latest = profile.jobs.first();

    if normalize(&record.work_title).is_empty() {
        if let Some(job) = latest {
            adopted = true;
            adopted_title = job.title.clone();
            adopted_company = job.company.clone();
        }
    } else {
        for job in &profile.jobs {
            if fields::title_matches(&job.title, &record.work_title) {
                score += 1;
            }
            if fields::company_matches(&job.company, &record.work_company) {
                score += 1;
            }
        }
    }

    if let Some(job) = latest {
        if let Some(target) = &options.target_position {
            // one-way on purpose: the scraped title abbreviates the target
            let title = normalize(&job.title);
            let target = normalize(target);
            if !title.is_empty() && !target.is_empty() && target.contains(&title) {
                score += 1;
            }
        }
        let geo_target = options
            .target_geolocation
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                let location = record.work_location.trim();
                (!location.is_empty()).then_some(location)
            });
        if let Some(target) = geo_target {
            if fields::location_matches(&job.description, target) {
                score += 1;
            }
        }
    }

    (score, adopted, adopted_title, adopted_company)
}

/// Education component.
///
/// Every roster education slot with a non-empty school is compared against
/// every scraped education entry: +1 each for school, degree, major and
/// graduation year. Exhaustive on purpose: a profile may list the same
/// school twice or in a different order than the roster, so no positional
/// alignment is assumed and repeated matches all count.
fn score_education(record: &AlumniRecord, profile: &ScrapedProfile, synonyms: &SynonymMap) -> u32 {
    let mut score = 0;
    for slot in &record.education {
        if normalize(&slot.school).is_empty() {
            continue;
        }
        for entry in &profile.education {
            if fields::school_matches(synonyms, &entry.school, &slot.school) {
                score += 1;
            }
            if fields::degree_matches(&entry.major_text, &slot.degree_code) {
                score += 1;
            }
            if fields::major_matches(&entry.major_text, &slot.major) {
                score += 1;
            }
            if fields::grad_year_matches(&entry.grad_year_text, slot.grad_year) {
                score += 1;
            }
        }
    }
    score
}
