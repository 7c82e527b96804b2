use serde::{Deserialize, Serialize};

/// One alumni roster row. Read once from the input spreadsheet and never
/// mutated afterwards; the scorer is its only consumer.
#[derive(Debug, Clone, Default)]
pub struct AlumniRecord {
    /// 1-based row number in the input spreadsheet (header is row 1).
    pub row_number: u32,
    pub first_name: String,
    pub last_name: String,
    pub work_title: String,
    pub work_company: String,
    pub work_location: String,
    pub education: Vec<EducationSlot>,
}

/// One of the roster's SCHOOL1..3 / DEGREE_CODE1..3 / MAJOR1..3 /
/// DEGREE_YEAR1..3 column groups. Slots with an empty school are kept but
/// skipped by the scorer.
#[derive(Debug, Clone, Default)]
pub struct EducationSlot {
    pub school: String,
    pub degree_code: String,
    pub major: String,
    pub grad_year: Option<i64>,
}

/// Fields scraped from one candidate profile page. Built fresh for each
/// candidate evaluation and discarded after scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedProfile {
    /// Job entries in page order, which is reverse-chronological: the first
    /// entry is the latest job.
    #[serde(default)]
    pub jobs: Vec<JobEntry>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: String,

    /// Free-text block below the title: company line, dates, location, blurb.
    #[serde(default)]
    pub description: String,
}

impl JobEntry {
    /// Location line from the description block, if the page labeled one.
    pub fn location_hint(&self) -> Option<String> {
        let idx = self.description.find("Location")?;
        let rest = &self.description[idx + "Location".len()..];
        let rest = rest.trim_start_matches([':', ' ', '\n']);
        let line = rest.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub school: String,

    /// Combined degree + major text as shown on the page, e.g.
    /// "Bachelor of Science, Computer Science".
    #[serde(default)]
    pub major_text: String,

    #[serde(default)]
    pub grad_year_text: String,
}

/// One scored candidate. Produced only for candidates that survived the
/// coarse name filter, exactly once per candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub link: String,
    /// Full name as displayed on the search result snippet.
    pub display_name: String,
    pub accuracy_score: u32,
    /// True when the record had no stored job and the scraped latest job was
    /// adopted instead of compared (score contribution 0 either way).
    pub job_adopted: bool,
    pub latest_title: String,
    pub latest_company: String,
    pub latest_location: String,
}

/// All results for one input record, in candidate order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchGroup {
    pub row_number: u32,
    pub first_name: String,
    pub last_name: String,
    pub status: GroupStatus,
    pub results: Vec<MatchResult>,
    /// Structural failures hit while processing this record, e.g. candidate
    /// pages that could not be fetched. Never silently dropped.
    pub failures: Vec<String>,
}

/// Why a group holds the results it holds. Distinguishes "search came back
/// empty" and "results existed but none matched the name" from an actual
/// scoring pass: only the first two short-circuit before any profile visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    NoSearchResults,
    NoCoarseSurvivors,
    Scored,
    Failed(String),
}
