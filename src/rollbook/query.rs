//! # Query Engine
//!
//! Derives the display list from the stored collection and a [`ViewCriteria`].
//! Nothing here mutates the store; the same inputs always give the same output.
//!
//! Steps run in a fixed order: free-text search, department filter, year filter,
//! then a stable sort. Records that compare equal keep their input order, so with
//! [`SortKey::Unsorted`] the result is simply the filtered collection in store order.

use crate::model::{StudentRecord, Year};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    RollAsc,
    RollDesc,
    YearAsc,
    YearDesc,
    #[default]
    Unsorted,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::RollAsc => "roll-asc",
            SortKey::RollDesc => "roll-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::Unsorted => "none",
        }
    }

    fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortKey::NameAsc => collate(&a.name, &b.name),
            SortKey::NameDesc => collate(&b.name, &a.name),
            SortKey::RollAsc => collate(&a.roll_no, &b.roll_no),
            SortKey::RollDesc => collate(&b.roll_no, &a.roll_no),
            SortKey::YearAsc => a.year.cmp(&b.year),
            SortKey::YearDesc => b.year.cmp(&a.year),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

/// Unknown keys fall back to [`SortKey::Unsorted`] rather than failing.
impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value.trim() {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "roll-asc" => SortKey::RollAsc,
            "roll-desc" => SortKey::RollDesc,
            "year-asc" => SortKey::YearAsc,
            "year-desc" => SortKey::YearDesc,
            other => {
                debug!(sort_key = other, "unrecognised sort key, keeping store order");
                SortKey::Unsorted
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current search, filter and sort selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCriteria {
    pub search: String,
    pub department: Option<String>,
    pub year: Option<Year>,
    pub sort: SortKey,
}

impl ViewCriteria {
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.department.is_some() || self.year.is_some()
    }
}

/// Filters and sorts `records` according to `criteria`.
pub fn query<'a>(records: &'a [StudentRecord], criteria: &ViewCriteria) -> Vec<&'a StudentRecord> {
    let needle = criteria.search.trim().to_lowercase();

    let mut listed: Vec<&StudentRecord> = records
        .iter()
        .filter(|s| needle.is_empty() || matches_search(s, &needle))
        .filter(|s| {
            criteria
                .department
                .as_ref()
                .is_none_or(|dept| &s.department == dept)
        })
        .filter(|s| criteria.year.is_none_or(|year| s.year == year))
        .collect();

    // sort_by is stable: equal keys keep store order
    listed.sort_by(|a, b| criteria.sort.compare(a, b));
    listed
}

fn matches_search(student: &StudentRecord, needle: &str) -> bool {
    [
        &student.name,
        &student.roll_no,
        &student.department,
        &student.email,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Root-locale style ordering in three strengths: base letters with accents and
/// case folded away, then accents (unaccented first), then case. The last level
/// compares the raw strings in reverse so lowercase sorts before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn with_accents(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Reference list offered as department suggestions. Not enforced by validation.
pub const KNOWN_DEPARTMENTS: &[&str] = &[
    // Engineering
    "Computer Science & Engineering",
    "Information Technology",
    "Artificial Intelligence & Machine Learning",
    "Data Science",
    "Electronics & Communication",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Biotechnology",
    "Aerospace Engineering",
    "Automobile Engineering",
    "Robotics Engineering",
    "Mechatronics",
    // Medical
    "MBBS - General Medicine",
    "BDS - Dentistry",
    "BAMS - Ayurveda",
    "BHMS - Homeopathy",
    "BPT - Physiotherapy",
    "B.Pharm - Pharmacy",
    "B.Sc Nursing",
    "Medical Laboratory Technology",
    // Arts & Humanities
    "Bachelor of Arts (General)",
    "BA English Literature",
    "BA History",
    "BA Political Science",
    "BA Psychology",
    "BA Sociology",
    "BA Economics",
    "BA Philosophy",
    "BA Fine Arts",
    "BA Music",
    "BA Theatre Arts",
    "BA Journalism & Mass Comm",
    // Science
    "B.Sc Physics",
    "B.Sc Chemistry",
    "B.Sc Mathematics",
    "B.Sc Biology",
    "B.Sc Computer Science",
    "B.Sc Statistics",
    "B.Sc Electronics",
    "B.Sc Environmental Science",
    "B.Sc Microbiology",
    "B.Sc Biotechnology",
    // Commerce
    "B.Com (General)",
    "B.Com (Honors)",
    "BBA - Business Administration",
    "BMS - Management Studies",
    "BBA in Finance",
    "BBA in Marketing",
    "BBA in HR",
    "Bachelor of Financial Markets",
    // Law
    "BA LLB",
    "BBA LLB",
    "LLB (3 Year)",
    // Design & Architecture
    "B.Arch - Architecture",
    "B.Des - Design",
    "BFA - Fine Arts",
    "B.Plan - Planning",
    // Other
    "BCA - Computer Applications",
    "BBA in Aviation",
    "BHM - Hotel Management",
    "B.Sc Agriculture",
    "Bachelor of Education",
    "Bachelor of Social Work",
    "Bachelor of Fashion Tech",
];

/// Known departments plus any free-text ones in use, sorted and deduplicated.
pub fn departments(records: &[StudentRecord]) -> Vec<String> {
    let all: BTreeSet<&str> = KNOWN_DEPARTMENTS
        .iter()
        .copied()
        .chain(records.iter().map(|s| s.department.as_str()))
        .filter(|d| !d.is_empty())
        .collect();
    all.into_iter().map(str::to_string).collect()
}

/// Summary counts shown alongside a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub departments: usize,
    pub listed: usize,
}

impl Stats {
    pub fn compute(records: &[StudentRecord], listed: usize) -> Self {
        let departments: BTreeSet<&str> = records.iter().map(|s| s.department.as_str()).collect();
        Self {
            total: records.len(),
            departments: departments.len(),
            listed,
        }
    }
}
