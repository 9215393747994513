//! Domain logic for the LiteStart onboarding wizard.
//!
//! Pure, I/O-free building blocks: email domain classification, skill tag
//! selection, file attachment gating, draft records, and the step form
//! state machine. Submission over the network lives in `litestart-submit`;
//! presentation coordination lives in `litestart-wizard`.

pub mod attachment;
pub mod draft;
pub mod email_domains;
pub mod error;
pub mod skills;
pub mod vocab;
pub mod wizard;

pub use attachment::{accept_file, AttachedFile, AttachmentPolicy, FileCandidate, FileRejection};
pub use draft::{DraftRecord, Role, StartupDraft, StudentDraft};
pub use error::CoreError;
pub use skills::SkillSet;
pub use wizard::{steps_for, StepDefinition, WizardState};
