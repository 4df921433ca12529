use std::fmt;
use std::sync::OnceLock;
use regex::Regex;
use thiserror::Error;
use crate::models::{ContactField, ContactForm};

const MIN_MESSAGE_LENGTH: usize = 10;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

#[derive(Error, Debug, Clone, PartialEq)]
pub struct ContactErrors(pub Vec<(ContactField, &'static str)>);

impl fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|(_, message)| *message).collect();
        write!(f, "{}", messages.join(" "))
    }
}

// Returns the error message for a single field, or None when it is valid.
pub fn validate_field(field: ContactField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        ContactField::Name if value.is_empty() => Some("Name is required."),
        ContactField::Email if value.is_empty() => Some("Email is required."),
        ContactField::Email if !email_regex().is_match(value) => Some("Please enter a valid email address."),
        ContactField::Subject if value.is_empty() => Some("Subject is required."),
        ContactField::Message if value.chars().count() < MIN_MESSAGE_LENGTH => {
            Some("Message must be at least 10 characters.")
        }
        _ => None,
    }
}

/// Checks every field of the contact form and reports all failures in field order.
pub fn validate_contact(form: &ContactForm) -> Result<(), ContactErrors> {
    let fields = [
        (ContactField::Name, form.name.as_str()),
        (ContactField::Email, form.email.as_str()),
        (ContactField::Subject, form.subject.as_str()),
        (ContactField::Message, form.message.as_str()),
    ];

    let errors: Vec<(ContactField, &'static str)> = fields
        .iter()
        .filter_map(|(field, value)| validate_field(*field, value).map(|message| (*field, message)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ContactErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let form = form("Ada", "ada@example.com", "Hello", "I would like to chat.");
        assert!(validate_contact(&form).is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_contact(&ContactForm::default()).unwrap_err();
        assert_eq!(
            errors.0,
            vec![
                (ContactField::Name, "Name is required."),
                (ContactField::Email, "Email is required."),
                (ContactField::Subject, "Subject is required."),
                (ContactField::Message, "Message must be at least 10 characters."),
            ]
        );
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate_field(ContactField::Email, "ada@example.com"), None);
        assert_eq!(validate_field(ContactField::Email, "  ada@example.com "), None);
        for bad in ["ada", "ada@example", "ada example@x.com", "@example.com", "ada@@x.com"] {
            assert_eq!(
                validate_field(ContactField::Email, bad),
                Some("Please enter a valid email address."),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_message_length_is_trimmed() {
        assert!(validate_field(ContactField::Message, "   short    ").is_some());
        assert_eq!(validate_field(ContactField::Message, "0123456789"), None);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let errors = validate_contact(&form("  ", "ada@example.com", "\t", "long enough message")).unwrap_err();
        assert_eq!(
            errors.0,
            vec![(ContactField::Name, "Name is required."), (ContactField::Subject, "Subject is required.")]
        );
        assert_eq!(errors.to_string(), "Name is required. Subject is required.");
    }
}
