//! Row iteration driver
//!
//! Walks the roster sequentially: one search, one coarse+fine filter pass
//! and one result group per record. A bounded random pause sits between
//! records. Each provider session is strictly sequential; parallelism only
//! exists as contiguous shards running independent sequential pipelines
//! whose reports merge back in input order.

pub mod search;
pub mod session;
pub mod snapshot;

use crate::error::Result;
use crate::matcher::filter::{coarse_filter, fine_filter, RecordPhase};
use crate::matcher::scorer::ScoreOptions;
use crate::matcher::synonyms::SynonymMap;
use crate::matcher::types::{AlumniRecord, GroupStatus, MatchGroup};
use indicatif::ProgressBar;
use rand::Rng;
use rayon::prelude::*;
use search::SearchProvider;
use serde::Serialize;
use session::{login_with_retry, CredentialStore};
use std::time::Duration;

/// Pause policy between records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep a random number of seconds in `min_secs..=max_secs`.
    Random { min_secs: u64, max_secs: u64 },
    /// No pause; for tests and offline replays.
    Disabled,
}

impl Pacing {
    fn pause(&self) {
        if let Pacing::Random { min_secs, max_secs } = *self {
            let secs = rand::thread_rng().gen_range(min_secs..=max_secs.max(min_secs));
            std::thread::sleep(Duration::from_secs(secs));
        }
    }
}

#[derive(Debug, Clone)]
pub struct FinderOptions {
    /// Region hint appended to every search query.
    pub region: String,
    pub target_position: Option<String>,
    pub target_geolocation: Option<String>,
    pub pacing: Pacing,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            region: "Buffalo".into(),
            target_position: None,
            target_geolocation: None,
            pacing: Pacing::Random {
                min_secs: 2,
                max_secs: 4,
            },
        }
    }
}

/// Outcome of one full pass over a record slice.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// One group per input record, in input order.
    pub groups: Vec<MatchGroup>,
    pub records_processed: usize,
    pub structural_failures: usize,
}

pub struct Finder<'a> {
    synonyms: &'a SynonymMap,
    options: FinderOptions,
    verbose: bool,
}

impl<'a> Finder<'a> {
    pub fn new(synonyms: &'a SynonymMap, options: FinderOptions) -> Self {
        Self {
            synonyms,
            options,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log in, then process every record in order. A failed record is
    /// recorded in its group and the run continues; only login exhaustion
    /// aborts.
    pub fn run(
        &self,
        provider: &mut dyn SearchProvider,
        credentials: &CredentialStore,
        records: &[AlumniRecord],
        progress: Option<&ProgressBar>,
    ) -> Result<RunReport> {
        login_with_retry(provider, credentials)?;

        let mut report = RunReport::default();
        for (index, record) in records.iter().enumerate() {
            let group = self.process_record(provider, record);
            report.structural_failures += group.failures.len();
            if matches!(group.status, GroupStatus::Failed(_)) {
                report.structural_failures += 1;
            }
            report.groups.push(group);
            report.records_processed += 1;

            if let Some(bar) = progress {
                bar.inc(1);
            }
            if index + 1 < records.len() {
                self.options.pacing.pause();
            }
        }
        Ok(report)
    }

    fn process_record(&self, provider: &mut dyn SearchProvider, record: &AlumniRecord) -> MatchGroup {
        let mut group = MatchGroup {
            row_number: record.row_number,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            status: GroupStatus::Scored,
            results: Vec::new(),
            failures: Vec::new(),
        };

        self.log_phase(record, RecordPhase::Searching);
        let query = self.build_query(record);
        let snippets = match provider.search(&query) {
            Ok(snippets) => snippets,
            Err(e) => {
                group.status = GroupStatus::Failed(e.to_string());
                return group;
            }
        };
        if snippets.is_empty() {
            group.status = GroupStatus::NoSearchResults;
            self.log_phase(record, RecordPhase::Recorded);
            return group;
        }

        let candidates = coarse_filter(&snippets, &record.first_name, &record.last_name);
        self.log_phase(record, RecordPhase::CoarseFiltered);
        if candidates.is_empty() {
            // no survivors: recorded without ever visiting a profile page
            group.status = GroupStatus::NoCoarseSurvivors;
            self.log_phase(record, RecordPhase::Recorded);
            return group;
        }

        let score_options = ScoreOptions {
            target_position: self.options.target_position.clone(),
            target_geolocation: self.options.target_geolocation.clone(),
        };
        match fine_filter(provider, &candidates, record, self.synonyms, &score_options) {
            Ok(outcome) => {
                self.log_phase(record, RecordPhase::Scored);
                group.results = outcome.results;
                group.failures = outcome.structural_failures;
            }
            Err(e) => {
                group.status = GroupStatus::Failed(e.to_string());
            }
        }
        self.log_phase(record, RecordPhase::Recorded);
        group
    }

    fn build_query(&self, record: &AlumniRecord) -> String {
        [
            record.first_name.as_str(),
            record.last_name.as_str(),
            self.options.region.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn log_phase(&self, record: &AlumniRecord, phase: RecordPhase) {
        if self.verbose {
            println!(
                "  [{} {}] {}",
                record.first_name, record.last_name, phase
            );
        }
    }
}

/// Split the roster into `workers` contiguous shards and run an independent
/// sequential pipeline per shard, one provider session each. Shard reports
/// merge in input order, so groups from different shards never interleave.
pub fn run_partitioned<P, F>(
    finder: &Finder<'_>,
    provider_factory: F,
    credentials: &CredentialStore,
    records: &[AlumniRecord],
    workers: usize,
) -> Result<RunReport>
where
    P: SearchProvider,
    F: Fn(usize) -> Result<P> + Sync,
{
    if records.is_empty() {
        return Ok(RunReport::default());
    }
    let workers = workers.max(1);
    if workers == 1 {
        let mut provider = provider_factory(0)?;
        return finder.run(&mut provider, credentials, records, None);
    }

    let chunk = records.len().div_ceil(workers);
    let shards: Vec<&[AlumniRecord]> = records.chunks(chunk).collect();
    let reports = shards
        .par_iter()
        .enumerate()
        .map(|(shard_index, shard)| {
            let mut provider = provider_factory(shard_index)?;
            finder.run(&mut provider, credentials, shard, None)
        })
        .collect::<Result<Vec<RunReport>>>()?;

    let mut merged = RunReport::default();
    for report in reports {
        merged.groups.extend(report.groups);
        merged.records_processed += report.records_processed;
        merged.structural_failures += report.structural_failures;
    }
    Ok(merged)
}
