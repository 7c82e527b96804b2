//! Field matchers
//!
//! Independent predicates comparing one scraped field against one roster
//! field. All of them normalize both sides and follow a single edge-case
//! policy: an empty value on either side never matches. Malformed input
//! degrades to `false`, never to an error.

use super::synonyms::SynonymMap;
use crate::normalizer::normalize;

/// School match: the scraped school name must contain one of the synonyms of
/// the institution the record-side value refers to. A record school with no
/// configured institution falls back to plain containment in either
/// direction, so rosters from unconfigured schools degrade gracefully.
pub fn school_matches(synonyms: &SynonymMap, scraped: &str, record_school: &str) -> bool {
    let scraped = normalize(scraped);
    let record = normalize(record_school);
    if scraped.is_empty() || record.is_empty() {
        return false;
    }
    match synonyms.synonyms_for(&record) {
        Some(set) => set.iter().any(|s| scraped.contains(s.as_str())),
        None => scraped.contains(&record) || record.contains(&scraped),
    }
}

/// Degree match against the combined degree/major text scraped from an
/// education entry.
///
/// "bachelor"/"master" + "science" requires a BS/MS degree code,
/// "bachelor"/"master" + "art" requires BA/MA; anything else falls back to
/// looking for the literal degree code inside the scraped text.
pub fn degree_matches(scraped: &str, degree_code: &str) -> bool {
    let text = normalize(scraped);
    let code = normalize(degree_code);
    if text.is_empty() || code.is_empty() {
        return false;
    }
    let graduate = text.contains("bachelor") || text.contains("master");
    if graduate && text.contains("science") {
        code.contains("bs") || code.contains("ms")
    } else if graduate && text.contains("art") {
        code.contains("ba") || code.contains("ma")
    } else {
        text.contains(&code)
    }
}

/// Major match: the roster major must appear inside the scraped major text.
/// Containment rather than equality, so abbreviated roster majors still hit.
pub fn major_matches(scraped: &str, record_major: &str) -> bool {
    let text = normalize(scraped);
    let major = normalize(record_major);
    !text.is_empty() && !major.is_empty() && text.contains(&major)
}

/// Graduation year match: exact equality between the normalized scraped year
/// and the record year's decimal form.
pub fn grad_year_matches(scraped: &str, record_year: Option<i64>) -> bool {
    let year = match record_year {
        Some(y) => y,
        None => return false,
    };
    let scraped = normalize(scraped);
    !scraped.is_empty() && scraped == year.to_string()
}

/// Job title match: either title contains the other, covering abbreviated
/// and expanded forms ("Software Engineer" vs "Sr Software Engineer").
pub fn title_matches(scraped: &str, record_title: &str) -> bool {
    contains_either_way(scraped, record_title)
}

/// Company match, same containment rule as titles.
pub fn company_matches(scraped: &str, record_company: &str) -> bool {
    contains_either_way(scraped, record_company)
}

/// Location match: the target location must appear inside the scraped
/// job-description block.
pub fn location_matches(description: &str, target_location: &str) -> bool {
    let block = normalize(description);
    let target = normalize(target_location);
    !block.is_empty() && !target.is_empty() && block.contains(&target)
}

fn contains_either_way(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_matches_science() {
        assert!(degree_matches("bachelorofscience", "bs"));
        assert!(degree_matches("Master of Science", "MS"));
        assert!(!degree_matches("bachelorofscience", "ba"));
    }

    #[test]
    fn test_degree_matches_arts() {
        assert!(degree_matches("masterofarts", "ma"));
        assert!(degree_matches("Bachelor of Arts, History", "BA"));
        assert!(!degree_matches("masterofarts", "ms"));
    }

    #[test]
    fn test_degree_matches_fallback_containment() {
        assert!(degree_matches("MBA, Finance", "MBA"));
        assert!(!degree_matches("Certificate Program", "PhD"));
    }

    #[test]
    fn test_grad_year_matches() {
        assert!(grad_year_matches("2016", Some(2016)));
        assert!(!grad_year_matches("2016", Some(2017)));
        assert!(!grad_year_matches("", Some(2016)));
        assert!(!grad_year_matches("2016", None));
    }

    #[test]
    fn test_title_matches_either_direction() {
        assert!(title_matches("Sr Software Engineer", "Software Engineer"));
        assert!(title_matches("Software Engineer", "Sr. Software Engineer"));
        assert!(!title_matches("Accountant", "Software Engineer"));
    }

    #[test]
    fn test_company_matches() {
        assert!(company_matches("Acme Corporation", "Acme"));
        assert!(company_matches("Acme", "Acme Corporation"));
        assert!(!company_matches("Acme", "Globex"));
    }

    #[test]
    fn test_major_matches_is_one_directional() {
        assert!(major_matches("Bachelor of Science, Computer Science", "Computer Science"));
        // a roster major longer than the scraped text must not match
        assert!(!major_matches("CS", "Computer Science"));
    }

    #[test]
    fn test_location_matches() {
        let block = "Company Name\nAcme\nLocation\nBuffalo, New York";
        assert!(location_matches(block, "Buffalo"));
        assert!(!location_matches(block, "Rochester"));
    }

    #[test]
    fn test_school_matches_via_synonyms() {
        let map = SynonymMap::default();
        assert!(school_matches(
            &map,
            "State University of New York at Buffalo",
            "University at Buffalo"
        ));
        assert!(!school_matches(&map, "Cornell University", "University at Buffalo"));
    }

    #[test]
    fn test_school_matches_fallback_without_institution() {
        let map = SynonymMap::new();
        assert!(school_matches(&map, "Tech Institute of Testing", "Tech Institute"));
        assert!(!school_matches(&map, "Tech Institute", "Business School"));
    }

    #[test]
    fn test_empty_sides_never_match() {
        let map = SynonymMap::default();
        assert!(!school_matches(&map, "", "University at Buffalo"));
        assert!(!school_matches(&map, "University at Buffalo", ""));
        assert!(!degree_matches("", "bs"));
        assert!(!degree_matches("bachelorofscience", ""));
        assert!(!major_matches("", "cs"));
        assert!(!title_matches("", ""));
        assert!(!company_matches("Acme", ""));
        assert!(!location_matches("", "Buffalo"));
    }
}
