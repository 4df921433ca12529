use crate::models::GpaResult;
use crate::utils::gpa::ValidationError;

// Builds the result card text from a computed GPA.
pub fn result_message(result: &GpaResult) -> String {
    let mut message = format!("🎓 GPA: {:.2}\n", result.final_gpa);
    message.push_str(&format!("Classification: {} ({})\n", result.classification.label(), result.classification.color()));
    message.push_str(&result.per_course_summary.join(" | "));
    message
}

// Builds the error banner text, listing the offending rows when there are any.
pub fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::FieldsOutOfRange(invalid) => {
            let mut message = String::from("⚠️ Please fix the highlighted fields. Credits must be 1–6, marks must be 0–100.");
            for entry in invalid {
                let fields: Vec<String> = entry.fields.iter().map(|f| f.to_string()).collect();
                message.push_str(&format!("\n  row {} ({}): {}", entry.index + 1, entry.name, fields.join(", ")));
            }
            message
        }
        ValidationError::NoCourses => {
            String::from("⚠️ Please enter at least one course with valid credits and mark.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseEntry;
    use crate::utils::gpa::{compute_gpa, CourseField, InvalidEntry};

    #[test]
    fn test_result_message() {
        let entries = vec![
            CourseEntry::new("Math", 3.0, 80.0, 0),
            CourseEntry::new("CS", 4.0, 90.0, 1),
        ];
        let result = compute_gpa(&entries).unwrap();
        assert_eq!(
            result_message(&result),
            "🎓 GPA: 3.79\nClassification: First Class (#27632a)\nMath: 80% → GPA 3.5 (3 cr) | CS: 90% → GPA 4.0 (4 cr)"
        );
    }

    #[test]
    fn test_pass_keeps_two_decimals() {
        let result = compute_gpa(&[CourseEntry::new("X", 1.0, 50.0, 0)]).unwrap();
        assert!(result_message(&result).starts_with("🎓 GPA: 2.00\nClassification: Pass"));
    }

    #[test]
    fn test_validation_messages() {
        let error = ValidationError::FieldsOutOfRange(vec![InvalidEntry {
            index: 1,
            name: "Course 2".into(),
            fields: vec![CourseField::Credits, CourseField::Mark],
        }]);
        assert_eq!(
            validation_message(&error),
            "⚠️ Please fix the highlighted fields. Credits must be 1–6, marks must be 0–100.\n  row 2 (Course 2): credits, mark"
        );
        assert_eq!(
            validation_message(&ValidationError::NoCourses),
            "⚠️ Please enter at least one course with valid credits and mark."
        );
    }
}
