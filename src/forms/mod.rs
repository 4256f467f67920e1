//! Contact and job application forms
//!
//! Submissions are never transmitted: the form is logged as JSON with a
//! timestamp and then cleared.

use crate::core::{Error, JobPosition, Result};
use serde::{Deserialize, Serialize};

/// Contact section form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Update a field by its input name
    pub fn set_field(&mut self, field: &str, value: &str) {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "message" => self.message = value.to_string(),
            _ => log::debug!("Ignoring unknown contact field '{}'", field),
        }
    }

    /// Log the form and reset it
    pub fn submit(&mut self) -> Result<Submission<ContactForm>> {
        let submission = Submission::new("contact", std::mem::take(self));
        submission.log()?;
        Ok(submission)
    }
}

/// Careers section application form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Id of the selected [`JobPosition`], empty when none is chosen
    pub position: String,
    /// File name of the attached CV; the contents are never read
    pub resume: Option<String>,
}

impl ApplicationForm {
    pub fn set_field(&mut self, field: &str, value: &str) {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "position" => self.position = value.to_string(),
            _ => log::debug!("Ignoring unknown application field '{}'", field),
        }
    }

    pub fn attach_resume(&mut self, file_name: Option<&str>) {
        self.resume = file_name.map(str::to_string);
    }

    pub fn submit(&mut self) -> Result<Submission<ApplicationForm>> {
        let submission = Submission::new("application", std::mem::take(self));
        submission.log()?;
        Ok(submission)
    }
}

/// A logged form submission
#[derive(Debug, Clone, Serialize)]
pub struct Submission<T> {
    pub kind: &'static str,
    /// Unix timestamp
    pub submitted_at: i64,
    pub data: T,
}

impl<T: Serialize> Submission<T> {
    fn new(kind: &'static str, data: T) -> Self {
        Self {
            kind,
            submitted_at: chrono::Utc::now().timestamp(),
            data,
        }
    }

    fn log(&self) -> Result<()> {
        let json = serde_json::to_string(&self.data)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        log::info!("Form submitted ({}): {}", self.kind, json);
        Ok(())
    }
}

/// Expanded/collapsed state of the careers position cards
#[derive(Debug, Clone, Default)]
pub struct PositionSelector {
    selected: Option<String>,
}

impl PositionSelector {
    /// Clicking the open card closes it; clicking another opens that one
    pub fn toggle(&mut self, position: &JobPosition) {
        if self.selected.as_deref() == Some(position.id.as_str()) {
            self.selected = None;
        } else {
            self.selected = Some(position.id.clone());
        }
    }

    pub fn is_selected(&self, position: &JobPosition) -> bool {
        self.selected.as_deref() == Some(position.id.as_str())
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_fields_and_submit() {
        let mut form = ContactForm::default();
        form.set_field("name", "Arta");
        form.set_field("email", "arta@example.com");
        form.set_field("message", "Hello");
        form.set_field("unknown", "ignored");

        let submission = form.submit().unwrap();
        assert_eq!(submission.kind, "contact");
        assert_eq!(submission.data.name, "Arta");
        assert_eq!(submission.data.message, "Hello");
        assert!(submission.submitted_at > 0);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_application_submit() {
        let mut form = ApplicationForm::default();
        form.set_field("name", "Luan");
        form.set_field("phone", "+355 69 000 0000");
        form.set_field("position", "2");
        form.attach_resume(Some("cv.pdf"));

        let submission = form.submit().unwrap();
        assert_eq!(submission.data.position, "2");
        assert_eq!(submission.data.resume.as_deref(), Some("cv.pdf"));
        assert!(form.resume.is_none());
    }

    #[test]
    fn test_position_toggle() {
        let positions = JobPosition::catalog();
        let mut selector = PositionSelector::default();

        selector.toggle(&positions[0]);
        assert!(selector.is_selected(&positions[0]));

        selector.toggle(&positions[1]);
        assert_eq!(selector.selected(), Some("2"));
        assert!(!selector.is_selected(&positions[0]));

        selector.toggle(&positions[1]);
        assert_eq!(selector.selected(), None);
    }
}
