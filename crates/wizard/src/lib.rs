//! Wizard shell for the LiteStart onboarding flow.
//!
//! UI-toolkit-agnostic coordination: owns the step form state machine and
//! the submission transport, and exposes a render model plus event handlers
//! for any front end to drive.

pub mod shell;
pub mod view;

pub use shell::WizardShell;
pub use view::{WizardView, LABEL_COMPLETE, LABEL_NEXT};
