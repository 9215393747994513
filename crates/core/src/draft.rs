//! Draft records for an onboarding session.
//!
//! A [`DraftRecord`] holds the in-progress form data for one wizard session.
//! The role variant is fixed at creation and never changes; fields are plain
//! strings mutated in place as the user types, with the empty string meaning
//! "not filled in yet". Nothing is pre-filled, so an untouched field is
//! indistinguishable from a cleared one and no placeholder-sentinel
//! comparison is needed.

use serde::{Deserialize, Serialize};

use crate::attachment::AttachedFile;
use crate::skills::SkillSet;

/// Which onboarding flow a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Startup,
}

impl Role {
    /// Wire value used in the `userType` submission field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Startup => "startup",
        }
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Form data for the student flow.
#[derive(Debug, Clone, Default)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university: String,
    pub major: String,
    /// One of [`vocab::GRADUATION_YEARS`](crate::vocab::GRADUATION_YEARS).
    pub graduation_year: String,
    pub skills: SkillSet,
    /// Optional; never validated for format.
    pub portfolio_url: String,
    /// One of [`vocab::AVAILABILITY_OPTIONS`](crate::vocab::AVAILABILITY_OPTIONS).
    pub availability: String,
    /// Required before the skills step can be left.
    pub cv: Option<AttachedFile>,
}

/// Form data for the startup flow.
#[derive(Debug, Clone, Default)]
pub struct StartupDraft {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub website: String,
    /// Required before the company-details step can be left.
    pub logo: Option<AttachedFile>,
    /// One of [`vocab::INDUSTRY_OPTIONS`](crate::vocab::INDUSTRY_OPTIONS).
    pub industry: String,
    /// Free-text industry, required only when `industry` is `Other`.
    pub industry_other: String,
    pub company_size: String,
    pub description: String,
    pub location: String,
    /// Optional; never validated for format.
    pub linkedin_url: String,
    pub founding_year: String,
}

/// The in-progress form data for one wizard session.
///
/// Created empty when the wizard mounts, mutated in place on every field
/// change, flattened into a wire payload on final-step confirmation, and
/// dropped (attachment included) when the session ends without submitting.
#[derive(Debug, Clone)]
pub enum DraftRecord {
    Student(StudentDraft),
    Startup(StartupDraft),
}

impl DraftRecord {
    /// Create an empty draft for the given role.
    pub fn new(role: Role) -> Self {
        match role {
            Role::Student => Self::Student(StudentDraft::default()),
            Role::Startup => Self::Startup(StartupDraft::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Startup(_) => Role::Startup,
        }
    }

    /// The role's required attachment slot (CV or logo).
    pub fn attachment(&self) -> Option<&AttachedFile> {
        match self {
            Self::Student(d) => d.cv.as_ref(),
            Self::Startup(d) => d.logo.as_ref(),
        }
    }

    /// Replace the role's attachment. Callers gate the file through
    /// [`accept_file`](crate::attachment::accept_file) first; a rejected
    /// candidate must leave the previous attachment in place.
    pub fn set_attachment(&mut self, file: AttachedFile) {
        match self {
            Self::Student(d) => d.cv = Some(file),
            Self::Startup(d) => d.logo = Some(file),
        }
    }

    /// The student variant, if this is one.
    pub fn as_student(&self) -> Option<&StudentDraft> {
        match self {
            Self::Student(d) => Some(d),
            Self::Startup(_) => None,
        }
    }

    pub fn as_student_mut(&mut self) -> Option<&mut StudentDraft> {
        match self {
            Self::Student(d) => Some(d),
            Self::Startup(_) => None,
        }
    }

    /// The startup variant, if this is one.
    pub fn as_startup(&self) -> Option<&StartupDraft> {
        match self {
            Self::Student(_) => None,
            Self::Startup(d) => Some(d),
        }
    }

    pub fn as_startup_mut(&mut self) -> Option<&mut StartupDraft> {
        match self {
            Self::Student(_) => None,
            Self::Startup(d) => Some(d),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
