//! Wire payload assembly for signup submission.
//!
//! Flattens a [`DraftRecord`] into the multipart fields the signup endpoint
//! expects: `name`, `email`, `userType`, plus the student's `cv` file or the
//! startup's `companyDescription`/`companyWebsite`. The startup logo is
//! retained locally for the session but is not part of the wire payload.

use litestart_core::attachment::AttachedFile;
use litestart_core::draft::{DraftRecord, Role};
use reqwest::multipart::{Form, Part};

use crate::client::SubmitError;

/// The assembled submission for one draft.
///
/// Built by reference from the draft so a failed submission leaves the
/// draft untouched for retry.
#[derive(Debug)]
pub struct SignupPayload {
    /// Full name: first and last joined by a space for students, the
    /// contact name as entered for startups.
    pub name: String,
    pub email: String,
    pub user_type: Role,
    /// Student CV upload.
    pub cv: Option<AttachedFile>,
    /// Startup company description.
    pub company_description: Option<String>,
    /// Startup company website.
    pub company_website: Option<String>,
}

impl SignupPayload {
    /// Flatten a draft into its wire fields.
    pub fn from_draft(draft: &DraftRecord) -> Self {
        match draft {
            DraftRecord::Student(d) => Self {
                name: format!("{} {}", d.first_name, d.last_name),
                email: d.email.clone(),
                user_type: Role::Student,
                cv: d.cv.clone(),
                company_description: None,
                company_website: None,
            },
            DraftRecord::Startup(d) => Self {
                name: d.contact_name.clone(),
                email: d.email.clone(),
                user_type: Role::Startup,
                cv: None,
                company_description: Some(d.description.clone()),
                company_website: Some(d.website.clone()),
            },
        }
    }

    /// Build the multipart form for the POST body.
    pub fn into_form(self) -> Result<Form, SubmitError> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("email", self.email)
            .text("userType", self.user_type.as_str());

        if let Some(cv) = self.cv {
            let (name, content_type, bytes) = cv.into_parts();
            let part = Part::bytes(bytes)
                .file_name(name)
                .mime_str(&content_type)?;
            form = form.part("cv", part);
        }
        if let Some(description) = self.company_description {
            form = form.text("companyDescription", description);
        }
        if let Some(website) = self.company_website {
            form = form.text("companyWebsite", website);
        }

        Ok(form)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use litestart_core::attachment::{accept_file, FileCandidate, CV_POLICY, LOGO_POLICY};
    use litestart_core::draft::{StartupDraft, StudentDraft};

    fn student_draft() -> DraftRecord {
        let mut d = StudentDraft::default();
        d.first_name = "Ada".to_string();
        d.last_name = "Lovelace".to_string();
        d.email = "ada@bristol.ac.uk".to_string();
        d.cv = Some(
            accept_file(
                FileCandidate {
                    name: "cv.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    bytes: vec![0; 128],
                },
                &CV_POLICY,
            )
            .unwrap(),
        );
        DraftRecord::Student(d)
    }

    fn startup_draft() -> DraftRecord {
        let mut d = StartupDraft::default();
        d.company_name = "Acme".to_string();
        d.contact_name = "Grace Hopper".to_string();
        d.email = "grace@acme-startup.io".to_string();
        d.website = "https://acme-startup.io".to_string();
        d.description = "We make things".to_string();
        d.logo = Some(
            accept_file(
                FileCandidate {
                    name: "logo.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![0; 128],
                },
                &LOGO_POLICY,
            )
            .unwrap(),
        );
        DraftRecord::Startup(d)
    }

    #[test]
    fn student_payload_joins_names_and_carries_cv() {
        let payload = SignupPayload::from_draft(&student_draft());
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@bristol.ac.uk");
        assert_eq!(payload.user_type, Role::Student);
        assert_eq!(payload.cv.as_ref().unwrap().name(), "cv.pdf");
        assert!(payload.company_description.is_none());
        assert!(payload.company_website.is_none());
    }

    #[test]
    fn startup_payload_carries_company_fields_but_no_files() {
        let payload = SignupPayload::from_draft(&startup_draft());
        assert_eq!(payload.name, "Grace Hopper");
        assert_eq!(payload.user_type, Role::Startup);
        assert!(payload.cv.is_none());
        assert_eq!(payload.company_description.as_deref(), Some("We make things"));
        assert_eq!(
            payload.company_website.as_deref(),
            Some("https://acme-startup.io")
        );
    }

    #[test]
    fn from_draft_leaves_draft_usable_for_retry() {
        let draft = student_draft();
        let _first = SignupPayload::from_draft(&draft);
        let second = SignupPayload::from_draft(&draft);
        assert_eq!(second.name, "Ada Lovelace");
        assert!(second.cv.is_some());
    }

    #[test]
    fn form_builds_for_both_variants() {
        assert!(SignupPayload::from_draft(&student_draft()).into_form().is_ok());
        assert!(SignupPayload::from_draft(&startup_draft()).into_form().is_ok());
    }
}
