use serde::{Deserialize, Serialize};

/// One calculator row as typed by the user, before any parsing.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RawCourseRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credits: String,
    #[serde(default)]
    pub mark: String,
}

impl RawCourseRow {
    // `index` is the row's position among all rows, valid or not.
    pub fn into_entry(self, index: usize) -> CourseEntry {
        CourseEntry::new(&self.name, parse_number(&self.credits), parse_number(&self.mark), index)
    }
}

// Parses the leading numeric prefix of a field, NaN when there is none.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return f64::NAN;
    }

    // Optional exponent, only kept when it has digits.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CourseEntry {
    pub name: String,
    pub credits: f64,
    pub mark: f64,
}

impl CourseEntry {
    pub fn new(name: &str, credits: f64, mark: f64, index: usize) -> Self {
        let name = match name.trim() {
            "" => format!("Course {}", index + 1),
            trimmed => trimmed.to_string(),
        };
        CourseEntry { name, credits, mark }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScoredCourse {
    pub name: String,
    pub credits: f64,
    pub mark: f64,
    pub grade_point: f64,
}

impl ScoredCourse {
    pub fn summary(&self) -> String {
        format!("{}: {}% → GPA {:.1} ({} cr)", self.name, self.mark, self.grade_point, self.credits)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    FirstClass,
    UpperSecondClass,
    LowerSecondClass,
    Pass,
    Fail,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::FirstClass => "First Class",
            Classification::UpperSecondClass => "Upper Second Class",
            Classification::LowerSecondClass => "Lower Second Class",
            Classification::Pass => "Pass",
            Classification::Fail => "Fail",
        }
    }

    // Badge background colour.
    pub fn color(&self) -> &'static str {
        match self {
            Classification::FirstClass => "#27632a",
            Classification::UpperSecondClass => "#1a5c80",
            Classification::LowerSecondClass => "#5a3f0d",
            Classification::Pass => "#3d6b4f",
            Classification::Fail => "#842029",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GpaResult {
    pub final_gpa: f64,
    pub classification: Classification,
    pub per_course_summary: Vec<String>,
    pub courses: Vec<ScoredCourse>,
    pub total_credits: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_a_form_field() {
        assert_eq!(parse_number("3"), 3.0);
        assert_eq!(parse_number(" 4.5 "), 4.5);
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("-2"), -2.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number("7e"), 7.0);
        assert!(parse_number("").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
    }

    #[test]
    fn blank_names_use_row_position() {
        let row = RawCourseRow { name: "   ".into(), credits: "3".into(), mark: "70".into() };
        let entry = row.into_entry(2);
        assert_eq!(entry.name, "Course 3");
        assert_eq!(entry.credits, 3.0);
        assert_eq!(entry.mark, 70.0);
    }

    #[test]
    fn names_are_trimmed() {
        let entry = CourseEntry::new("  Databases ", 4.0, 80.0, 0);
        assert_eq!(entry.name, "Databases");
    }

    #[test]
    fn summary_format() {
        let course = ScoredCourse { name: "Math".into(), credits: 3.0, mark: 80.0, grade_point: 3.5 };
        assert_eq!(course.summary(), "Math: 80% → GPA 3.5 (3 cr)");

        let course = ScoredCourse { name: "CS".into(), credits: 4.5, mark: 90.5, grade_point: 4.0 };
        assert_eq!(course.summary(), "CS: 90.5% → GPA 4.0 (4.5 cr)");
    }

    #[test]
    fn classification_badges() {
        assert_eq!(Classification::FirstClass.label(), "First Class");
        assert_eq!(Classification::Fail.color(), "#842029");
    }
}
