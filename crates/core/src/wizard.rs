//! Step form state machine for the onboarding wizard.
//!
//! Defines the static step tables for both role variants and the
//! [`WizardState`] that owns the draft record and the current step.
//! Validation is table-driven: each step declares the fields it owns and a
//! predicate over exactly those fields, so a step can always be validated
//! without looking at later steps. `advance` is gated on the current step's
//! predicate; `retreat` never validates.

use crate::draft::{DraftRecord, Role, StartupDraft, StudentDraft};
use crate::email_domains::{is_acceptable_startup_email, is_acceptable_student_email};
use crate::error::CoreError;
use crate::vocab::INDUSTRY_OTHER;

/// First step number (1-based).
pub const MIN_STEP: u8 = 1;

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

/// A single wizard screen: its label, the draft fields it owns, and the
/// predicate that must hold before the user may leave it forward.
pub struct StepDefinition {
    /// Human-readable step title.
    pub label: &'static str,
    /// Display names of the fields this step owns, in render order.
    pub fields: &'static [&'static str],
    validate: fn(&DraftRecord) -> Result<(), CoreError>,
}

/// Step table for the student flow (4 steps).
static STUDENT_STEPS: [StepDefinition; 4] = [
    StepDefinition {
        label: "About you",
        fields: &["first name", "last name", "email"],
        validate: validate_student_identity,
    },
    StepDefinition {
        label: "Your studies",
        fields: &["university", "major", "graduation year"],
        validate: validate_student_studies,
    },
    StepDefinition {
        label: "Skills & CV",
        fields: &["skills", "CV"],
        validate: validate_student_skills,
    },
    StepDefinition {
        label: "Availability",
        fields: &["availability", "portfolio URL"],
        validate: validate_student_availability,
    },
];

/// Step table for the startup flow (3 steps).
static STARTUP_STEPS: [StepDefinition; 3] = [
    StepDefinition {
        label: "Company basics",
        fields: &["company name", "contact name", "email", "website", "logo"],
        validate: validate_startup_basics,
    },
    StepDefinition {
        label: "Company profile",
        fields: &["industry", "company size", "description", "location"],
        validate: validate_startup_profile,
    },
    StepDefinition {
        label: "Finishing touches",
        fields: &["founding year", "LinkedIn URL"],
        validate: validate_startup_finish,
    },
];

/// The ordered step table for a role.
pub fn steps_for(role: Role) -> &'static [StepDefinition] {
    match role {
        Role::Student => &STUDENT_STEPS,
        Role::Startup => &STARTUP_STEPS,
    }
}

// ---------------------------------------------------------------------------
// Step predicates
// ---------------------------------------------------------------------------

/// Record `label` as missing if `value` is empty or whitespace-only.
fn require(missing: &mut Vec<&'static str>, label: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(label);
    }
}

/// Turn a list of missing field names into a blocking validation error.
fn check_missing(missing: Vec<&'static str>) -> Result<(), CoreError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Please fill in all required fields: {}",
        missing.join(", ")
    )))
}

fn expect_student(draft: &DraftRecord) -> Result<&StudentDraft, CoreError> {
    draft.as_student().ok_or_else(|| {
        CoreError::Validation("Student step evaluated against a startup draft".to_string())
    })
}

fn expect_startup(draft: &DraftRecord) -> Result<&StartupDraft, CoreError> {
    draft.as_startup().ok_or_else(|| {
        CoreError::Validation("Startup step evaluated against a student draft".to_string())
    })
}

fn validate_student_identity(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_student(draft)?;

    let mut missing = Vec::new();
    require(&mut missing, "first name", &d.first_name);
    require(&mut missing, "last name", &d.last_name);
    require(&mut missing, "email", &d.email);
    check_missing(missing)?;

    if !is_acceptable_student_email(&d.email) {
        return Err(CoreError::Validation(
            "Please use your university email address".to_string(),
        ));
    }
    Ok(())
}

fn validate_student_studies(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_student(draft)?;

    let mut missing = Vec::new();
    require(&mut missing, "university", &d.university);
    require(&mut missing, "major", &d.major);
    require(&mut missing, "graduation year", &d.graduation_year);
    check_missing(missing)
}

fn validate_student_skills(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_student(draft)?;

    let mut missing = Vec::new();
    if d.skills.is_empty() {
        missing.push("at least one skill");
    }
    if d.cv.is_none() {
        missing.push("CV upload");
    }
    check_missing(missing)
}

fn validate_student_availability(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_student(draft)?;

    // Portfolio URL is optional and never format-checked.
    let mut missing = Vec::new();
    require(&mut missing, "availability", &d.availability);
    check_missing(missing)
}

fn validate_startup_basics(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_startup(draft)?;

    let mut missing = Vec::new();
    require(&mut missing, "company name", &d.company_name);
    require(&mut missing, "contact name", &d.contact_name);
    require(&mut missing, "email", &d.email);
    require(&mut missing, "website", &d.website);
    if d.logo.is_none() {
        missing.push("logo upload");
    }
    check_missing(missing)?;

    if !is_acceptable_startup_email(&d.email) {
        return Err(CoreError::Validation(
            "Please use your work email address, not a personal one".to_string(),
        ));
    }
    Ok(())
}

fn validate_startup_profile(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_startup(draft)?;

    let mut missing = Vec::new();
    require(&mut missing, "industry", &d.industry);
    if d.industry == INDUSTRY_OTHER {
        require(&mut missing, "industry description", &d.industry_other);
    }
    require(&mut missing, "company size", &d.company_size);
    require(&mut missing, "description", &d.description);
    require(&mut missing, "location", &d.location);
    check_missing(missing)
}

fn validate_startup_finish(draft: &DraftRecord) -> Result<(), CoreError> {
    let d = expect_startup(draft)?;

    // LinkedIn URL is optional and never format-checked.
    let mut missing = Vec::new();
    require(&mut missing, "founding year", &d.founding_year);
    check_missing(missing)
}

// ---------------------------------------------------------------------------
// WizardState
// ---------------------------------------------------------------------------

/// Owns the draft record and the 1-based current step for one session.
///
/// The only mutators are `draft_mut` (field edits), `advance`, and
/// `retreat`; step state never lives anywhere else. The intro/welcome
/// screen that precedes step 1 carries no fields and is the host's concern.
#[derive(Debug)]
pub struct WizardState {
    draft: DraftRecord,
    current: u8,
}

impl WizardState {
    /// Start a new session at step 1 with an empty draft.
    pub fn new(role: Role) -> Self {
        Self {
            draft: DraftRecord::new(role),
            current: MIN_STEP,
        }
    }

    pub fn role(&self) -> Role {
        self.draft.role()
    }

    /// Number of steps in this role's flow.
    pub fn step_count(&self) -> u8 {
        steps_for(self.role()).len() as u8
    }

    /// Current step (1-based).
    pub fn current_step(&self) -> u8 {
        self.current
    }

    pub fn is_final_step(&self) -> bool {
        self.current == self.step_count()
    }

    /// Completion ratio for the progress indicator.
    pub fn progress(&self) -> f32 {
        f32::from(self.current) / f32::from(self.step_count())
    }

    /// The definition of the current step.
    pub fn current_definition(&self) -> &'static StepDefinition {
        &steps_for(self.role())[usize::from(self.current) - 1]
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftRecord {
        &mut self.draft
    }

    /// Evaluate step `n`'s predicate against the current draft.
    ///
    /// Never mutates the draft. Errs on out-of-range step numbers.
    pub fn validate_step(&self, n: u8) -> Result<(), CoreError> {
        let steps = steps_for(self.role());
        let step = steps
            .get(usize::from(n).wrapping_sub(1))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Step {n} is out of range ({MIN_STEP}..{})",
                    steps.len()
                ))
            })?;
        (step.validate)(&self.draft)
    }

    /// Move forward one step after validating the current one.
    ///
    /// On validation failure the step does not change and the error carries
    /// the blocking message to surface. At the final step this is a no-op on
    /// `current`; the host maps the final primary action to submission
    /// instead of advancement.
    pub fn advance(&mut self) -> Result<(), CoreError> {
        self.validate_step(self.current)?;

        if self.current < self.step_count() {
            let from = self.current;
            self.current += 1;
            tracing::debug!(
                role = self.role().as_str(),
                from_step = from,
                to_step = self.current,
                "Wizard advanced"
            );
        }
        Ok(())
    }

    /// Move back one step. Never validated; a no-op at step 1.
    pub fn retreat(&mut self) {
        if self.current > MIN_STEP {
            let from = self.current;
            self.current -= 1;
            tracing::debug!(
                role = self.role().as_str(),
                from_step = from,
                to_step = self.current,
                "Wizard went back"
            );
        }
    }

    /// Whether the session is ready to submit: on the final step with the
    /// final step's predicate satisfied.
    pub fn can_submit(&self) -> Result<(), CoreError> {
        if !self.is_final_step() {
            return Err(CoreError::Validation(format!(
                "Cannot submit from step {}: complete all {} steps first",
                self.current,
                self.step_count()
            )));
        }
        self.validate_step(self.current)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{accept_file, FileCandidate, CV_POLICY, LOGO_POLICY};
    use assert_matches::assert_matches;

    fn pdf(name: &str, size: usize) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0; size],
        }
    }

    fn png(name: &str, size: usize) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0; size],
        }
    }

    /// A startup draft that satisfies every step predicate.
    fn complete_startup() -> WizardState {
        let mut wizard = WizardState::new(Role::Startup);
        let d = wizard.draft_mut().as_startup_mut().unwrap();
        d.company_name = "Acme".to_string();
        d.contact_name = "Grace Hopper".to_string();
        d.email = "grace@acme-startup.io".to_string();
        d.website = "https://acme-startup.io".to_string();
        d.logo = Some(accept_file(png("logo.png", 2048), &LOGO_POLICY).unwrap());
        d.industry = "Fintech".to_string();
        d.company_size = "1-10".to_string();
        d.description = "We make things".to_string();
        d.location = "London".to_string();
        d.founding_year = "2024".to_string();
        wizard
    }

    // -- step tables --

    #[test]
    fn step_counts_per_role() {
        assert_eq!(WizardState::new(Role::Student).step_count(), 4);
        assert_eq!(WizardState::new(Role::Startup).step_count(), 3);
    }

    #[test]
    fn step_labels_and_fields_are_nonempty() {
        for role in [Role::Student, Role::Startup] {
            for step in steps_for(role) {
                assert!(!step.label.is_empty());
                assert!(!step.fields.is_empty());
            }
        }
    }

    #[test]
    fn validate_step_rejects_out_of_range() {
        let wizard = WizardState::new(Role::Startup);
        assert!(wizard.validate_step(0).is_err());
        assert!(wizard.validate_step(4).is_err());
    }

    // -- student predicates --

    #[test]
    fn empty_student_step1_fails_naming_fields() {
        let wizard = WizardState::new(Role::Student);
        let err = wizard.validate_step(1).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("first name"));
    }

    #[test]
    fn student_step1_rejects_personal_email() {
        let mut wizard = WizardState::new(Role::Student);
        let d = wizard.draft_mut().as_student_mut().unwrap();
        d.first_name = "Ada".to_string();
        d.last_name = "Lovelace".to_string();
        d.email = "ada@gmail.com".to_string();

        let err = wizard.validate_step(1).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("university email"));
    }

    #[test]
    fn student_step3_requires_skills_and_cv() {
        let mut wizard = WizardState::new(Role::Student);
        assert!(wizard.validate_step(3).is_err());

        wizard
            .draft_mut()
            .as_student_mut()
            .unwrap()
            .skills
            .toggle("Data Science");
        assert!(wizard.validate_step(3).is_err());

        let cv = accept_file(pdf("cv.pdf", 2 * 1024 * 1024), &CV_POLICY).unwrap();
        wizard.draft_mut().set_attachment(cv);
        assert!(wizard.validate_step(3).is_ok());
    }

    #[test]
    fn student_step4_ignores_portfolio_url() {
        let mut wizard = WizardState::new(Role::Student);
        let d = wizard.draft_mut().as_student_mut().unwrap();
        d.availability = "10-15 hours/week".to_string();
        d.portfolio_url = "definitely not a url".to_string();
        assert!(wizard.validate_step(4).is_ok());
    }

    // -- startup predicates --

    #[test]
    fn startup_step1_rejects_personal_email() {
        let mut wizard = complete_startup();
        wizard.draft_mut().as_startup_mut().unwrap().email = "founder@gmail.com".to_string();
        assert!(wizard.validate_step(1).is_err());
    }

    #[test]
    fn startup_step1_requires_logo() {
        let mut wizard = complete_startup();
        wizard.draft_mut().as_startup_mut().unwrap().logo = None;
        let err = wizard.validate_step(1).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("logo"));
    }

    #[test]
    fn startup_other_industry_needs_description() {
        let mut wizard = complete_startup();
        {
            let d = wizard.draft_mut().as_startup_mut().unwrap();
            d.industry = INDUSTRY_OTHER.to_string();
        }
        assert!(wizard.validate_step(2).is_err());

        wizard.draft_mut().as_startup_mut().unwrap().industry_other =
            "Space logistics".to_string();
        assert!(wizard.validate_step(2).is_ok());
    }

    #[test]
    fn startup_step3_requires_founding_year_only() {
        let mut wizard = complete_startup();
        assert!(wizard.validate_step(3).is_ok());

        wizard.draft_mut().as_startup_mut().unwrap().founding_year = String::new();
        assert!(wizard.validate_step(3).is_err());
    }

    // -- transitions --

    #[test]
    fn advance_blocked_by_invalid_step() {
        let mut wizard = WizardState::new(Role::Student);
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn advance_moves_forward_by_exactly_one() {
        let mut wizard = complete_startup();
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), 2);
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), 3);
    }

    #[test]
    fn advance_clamps_at_final_step() {
        let mut wizard = complete_startup();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert!(wizard.is_final_step());

        // Valid final step: advance is a no-op on the step counter.
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), 3);
    }

    #[test]
    fn retreat_is_noop_at_first_step() {
        let mut wizard = WizardState::new(Role::Student);
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn retreat_never_validates() {
        let mut wizard = complete_startup();
        wizard.advance().unwrap();

        // Invalidate step 1, then go back to it anyway.
        wizard.draft_mut().as_startup_mut().unwrap().company_name = String::new();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn retreat_does_not_mutate_draft() {
        let mut wizard = complete_startup();
        wizard.advance().unwrap();
        wizard.retreat();
        assert_eq!(
            wizard.draft().as_startup().unwrap().company_name,
            "Acme"
        );
    }

    // -- progress & submission gating --

    #[test]
    fn progress_is_proportional() {
        let mut wizard = complete_startup();
        assert!((wizard.progress() - 1.0 / 3.0).abs() < f32::EPSILON);
        wizard.advance().unwrap();
        assert!((wizard.progress() - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn cannot_submit_before_final_step() {
        let wizard = complete_startup();
        assert!(wizard.can_submit().is_err());
    }

    #[test]
    fn can_submit_on_valid_final_step() {
        let mut wizard = complete_startup();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert!(wizard.can_submit().is_ok());
    }

    #[test]
    fn validate_step_does_not_mutate() {
        let wizard = WizardState::new(Role::Student);
        let _ = wizard.validate_step(1);
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.draft().as_student().unwrap().first_name.is_empty());
    }

    // -- end-to-end (student happy path, per the observed flow) --

    #[test]
    fn student_happy_path_reaches_submittable_state() {
        let mut wizard = WizardState::new(Role::Student);
        {
            let d = wizard.draft_mut().as_student_mut().unwrap();
            d.first_name = "Ada".to_string();
            d.last_name = "Lovelace".to_string();
            d.email = "ada@bristol.ac.uk".to_string();
        }
        wizard.advance().unwrap();

        {
            let d = wizard.draft_mut().as_student_mut().unwrap();
            d.university = "Bristol".to_string();
            d.major = "Maths".to_string();
            d.graduation_year = "2026".to_string();
        }
        wizard.advance().unwrap();

        {
            let d = wizard.draft_mut().as_student_mut().unwrap();
            d.skills.toggle("Data Science");
        }
        let cv = accept_file(pdf("cv.pdf", 2 * 1024 * 1024), &CV_POLICY).unwrap();
        wizard.draft_mut().set_attachment(cv);
        wizard.advance().unwrap();

        wizard.draft_mut().as_student_mut().unwrap().availability =
            "10-15 hours/week".to_string();
        assert!(wizard.can_submit().is_ok());
    }
}
