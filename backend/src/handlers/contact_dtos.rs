use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

// A submission that passed validation. Text fields are trimmed and
// HTML-escaped, the email is trimmed and lowercased.
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let chars = value.chars().count();
    if chars < min || chars > max {
        errors.push(FieldError {
            field,
            message: format!(
                "{}{} must be between {} and {} characters",
                field[..1].to_uppercase(),
                &field[1..],
                min,
                max
            ),
        });
    }
}

impl ContactRequest {
    pub fn validate(self) -> Result<ValidContact, Vec<FieldError>> {
        let name = escape_html(self.name.trim());
        let subject = escape_html(self.subject.trim());
        let message = escape_html(self.message.trim());
        let email = self.email.trim().to_lowercase();

        let mut errors = Vec::new();
        check_length(&mut errors, "name", &name, 2, 100);
        check_length(&mut errors, "subject", &subject, 5, 200);
        check_length(&mut errors, "message", &message, 10, 1000);
        if email.chars().count() > 100 || !EMAIL_FORMAT.is_match(&email) {
            errors.push(FieldError {
                field: "email",
                message: "Please provide a valid email address".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(ValidContact {
                name,
                email,
                subject,
                message,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn minimal_valid_submission_passes() {
        let valid = request("Al", "  AL@Example.COM ", "Hello", "hello there")
            .validate()
            .expect("submission at the field minimums should pass");
        assert_eq!(valid.name, "Al");
        assert_eq!(valid.email, "al@example.com");
    }

    #[test]
    fn one_char_name_is_rejected() {
        let errors = request("A", "a@example.com", "Hello", "hello there")
            .validate()
            .unwrap_err();
        assert!(errors.iter().any(|e| e.field == "name"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn fields_are_trimmed_and_escaped_before_length_checks() {
        let valid = request(
            "  <b>Jo</b>  ",
            "jo@example.com",
            "A \"quoted\" subject",
            "it's a message",
        )
        .validate()
        .expect("escaped markup should still validate");
        assert_eq!(valid.name, "&lt;b&gt;Jo&lt;/b&gt;");
        assert_eq!(valid.subject, "A &quot;quoted&quot; subject");
        assert_eq!(valid.message, "it&#x27;s a message");
    }

    #[test]
    fn bad_email_formats_are_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.d", "@example.com", ""] {
            let errors = request("Alice", email, "Hello", "hello there")
                .validate()
                .unwrap_err();
            assert!(
                errors.iter().any(|e| e.field == "email"),
                "{email:?} should fail the email check"
            );
        }
    }

    #[test]
    fn overlong_message_is_rejected() {
        let errors = request("Alice", "a@example.com", "Hello", &"x".repeat(1001))
            .validate()
            .unwrap_err();
        assert!(errors.iter().any(|e| e.field == "message"));
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let errors = request("", "nope", "hi", "short").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        for field in ["name", "email", "subject", "message"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
    }
}
