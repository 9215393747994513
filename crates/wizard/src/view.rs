//! Render model for the wizard shell.
//!
//! A [`WizardView`] is a cheap snapshot of everything a front end needs to
//! draw one frame of the wizard: progress, the current step's fields, the
//! navigation button states, and any blocking notification. Front ends stay
//! free of role tables and validation logic.

use litestart_core::draft::Role;

/// Primary button label on non-final steps.
pub const LABEL_NEXT: &str = "Next";

/// Primary button label on the final step, where the action submits.
pub const LABEL_COMPLETE: &str = "Complete";

/// One frame of wizard presentation state.
#[derive(Debug, Clone)]
pub struct WizardView {
    pub role: Role,
    /// Current step (1-based).
    pub step: u8,
    /// Total steps for this role.
    pub step_count: u8,
    /// Title of the current step.
    pub step_label: &'static str,
    /// Display names of the fields the current step owns, in render order.
    pub fields: &'static [&'static str],
    /// Completion ratio in `(0, 1]` for the progress indicator.
    pub progress: f32,
    /// False on step 1, where the back button is disabled.
    pub back_enabled: bool,
    /// [`LABEL_NEXT`], or [`LABEL_COMPLETE`] on the final step.
    pub primary_label: &'static str,
    /// True while a submission is in flight; the primary button should be
    /// disabled and show a pending indicator.
    pub submitting: bool,
    /// True once the endpoint has accepted the submission.
    pub completed: bool,
    /// Blocking message to surface, if the last action failed validation,
    /// file acceptance, or submission.
    pub notification: Option<String>,
}
