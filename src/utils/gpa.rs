use std::fmt;
use log::debug;
use serde::Serialize;
use thiserror::Error;
use crate::models::{Classification, CourseEntry, GpaResult, RawCourseRow, ScoredCourse};

// Checked top-down, first threshold the value reaches wins.
const GRADE_POINT_BANDS: [(f64, f64); 5] = [
    (85.0, 4.0),
    (75.0, 3.5),
    (65.0, 3.0),
    (55.0, 2.5),
    (45.0, 2.0),
];
const FAILING_GRADE_POINT: f64 = 0.0;

const CLASSIFICATION_BANDS: [(f64, Classification); 4] = [
    (3.6, Classification::FirstClass),
    (3.0, Classification::UpperSecondClass),
    (2.5, Classification::LowerSecondClass),
    (2.0, Classification::Pass),
];

pub const CREDITS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=6.0;
pub const MARK_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Credits,
    Mark,
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseField::Credits => write!(f, "credits"),
            CourseField::Mark => write!(f, "mark"),
        }
    }
}

/// A row that failed validation, with every field that was out of range.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InvalidEntry {
    pub index: usize,
    pub name: String,
    pub fields: Vec<CourseField>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{} course(s) have credits or marks out of range", .0.len())]
    FieldsOutOfRange(Vec<InvalidEntry>),
    #[error("no courses to compute a GPA from")]
    NoCourses,
}

/// Maps a percentage mark to its grade point. The mark must already be in `[0, 100]`.
pub fn mark_to_grade_point(mark: f64) -> f64 {
    GRADE_POINT_BANDS
        .iter()
        .find(|(threshold, _)| mark >= *threshold)
        .map_or(FAILING_GRADE_POINT, |(_, grade_point)| *grade_point)
}

pub fn grade_point_to_classification(gpa: f64) -> Classification {
    CLASSIFICATION_BANDS
        .iter()
        .find(|(threshold, _)| gpa >= *threshold)
        .map_or(Classification::Fail, |(_, classification)| *classification)
}

// Half away from zero, which is what f64::round does.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn invalid_fields(entry: &CourseEntry) -> Vec<CourseField> {
    let mut fields = Vec::new();
    if !CREDITS_RANGE.contains(&entry.credits) {
        fields.push(CourseField::Credits);
    }
    if !MARK_RANGE.contains(&entry.mark) {
        fields.push(CourseField::Mark);
    }
    fields
}

/// Validates every entry, then computes the credit-weighted GPA and its classification.
///
/// Nothing is computed unless all entries are valid.
pub fn compute_gpa(entries: &[CourseEntry]) -> Result<GpaResult, ValidationError> {
    let invalid: Vec<InvalidEntry> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let fields = invalid_fields(entry);
            (!fields.is_empty()).then(|| InvalidEntry { index, name: entry.name.clone(), fields })
        })
        .collect();

    if !invalid.is_empty() {
        debug!("{} of {} entries failed validation", invalid.len(), entries.len());
        return Err(ValidationError::FieldsOutOfRange(invalid));
    }

    if entries.is_empty() {
        return Err(ValidationError::NoCourses);
    }

    let mut total_weighted = 0.0;
    let mut total_credits = 0.0;
    let mut courses = Vec::with_capacity(entries.len());

    for entry in entries {
        let grade_point = mark_to_grade_point(entry.mark);
        total_weighted += grade_point * entry.credits;
        total_credits += entry.credits;
        courses.push(ScoredCourse {
            name: entry.name.clone(),
            credits: entry.credits,
            mark: entry.mark,
            grade_point,
        });
    }

    // Valid credits are at least 1, so this only guards an empty sum.
    if total_credits <= 0.0 {
        return Err(ValidationError::NoCourses);
    }

    let final_gpa = round_to_hundredths(total_weighted / total_credits);
    let classification = grade_point_to_classification(final_gpa);
    let per_course_summary = courses.iter().map(ScoredCourse::summary).collect();

    debug!("Weighted sum {} over {} credits gives {:.2}", total_weighted, total_credits, final_gpa);

    Ok(GpaResult {
        final_gpa,
        classification,
        per_course_summary,
        courses,
        total_credits,
    })
}

pub fn compute_gpa_from_rows(rows: &[RawCourseRow]) -> Result<GpaResult, ValidationError> {
    let entries: Vec<CourseEntry> = rows
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, row)| row.into_entry(index))
        .collect();
    compute_gpa(&entries)
}
