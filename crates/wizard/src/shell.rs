//! Presentation-layer coordinator for one onboarding session.
//!
//! [`WizardShell`] owns the step form state machine and the submission
//! transport, translating UI events (next, back, file selection, complete)
//! into state transitions. Validation and file-gating failures never escape:
//! they become the blocking notification in the next [`WizardView`]. Only
//! submission crosses the external boundary.

use std::sync::Arc;

use litestart_core::attachment::{accept_file, FileCandidate, CV_POLICY, LOGO_POLICY};
use litestart_core::draft::{DraftRecord, Role};
use litestart_core::wizard::{WizardState, MIN_STEP};
use litestart_submit::{SignupPayload, SignupTransport};

use crate::view::{WizardView, LABEL_COMPLETE, LABEL_NEXT};

/// Coordinates one wizard session from mount to submission.
///
/// Dropping the shell drops the draft and any retained attachment.
pub struct WizardShell {
    state: WizardState,
    transport: Arc<dyn SignupTransport>,
    submitting: bool,
    completed: bool,
    notification: Option<String>,
}

impl WizardShell {
    /// Mount a new session for `role`, starting at step 1 with an empty
    /// draft.
    pub fn new(role: Role, transport: Arc<dyn SignupTransport>) -> Self {
        Self {
            state: WizardState::new(role),
            transport,
            submitting: false,
            completed: false,
            notification: None,
        }
    }

    /// Snapshot the current presentation state.
    pub fn view(&self) -> WizardView {
        let step = self.state.current_step();
        let definition = self.state.current_definition();
        WizardView {
            role: self.state.role(),
            step,
            step_count: self.state.step_count(),
            step_label: definition.label,
            fields: definition.fields,
            progress: self.state.progress(),
            back_enabled: step > MIN_STEP,
            primary_label: if self.state.is_final_step() {
                LABEL_COMPLETE
            } else {
                LABEL_NEXT
            },
            submitting: self.submitting,
            completed: self.completed,
            notification: self.notification.clone(),
        }
    }

    /// The draft, for rendering current field values.
    pub fn draft(&self) -> &DraftRecord {
        self.state.draft()
    }

    /// The draft, for binding field edits.
    pub fn draft_mut(&mut self) -> &mut DraftRecord {
        self.state.draft_mut()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Take the pending blocking notification, clearing it.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    /// Handle the "Next" action: validate the current step and advance.
    ///
    /// On validation failure the step is unchanged and the error becomes
    /// the blocking notification. Returns whether the wizard advanced.
    pub fn next(&mut self) -> bool {
        match self.state.advance() {
            Ok(()) => {
                self.notification = None;
                true
            }
            Err(e) => {
                self.notification = Some(e.to_string());
                false
            }
        }
    }

    /// Handle the "Back" action. Never validates; a no-op on step 1.
    pub fn back(&mut self) {
        self.notification = None;
        self.state.retreat();
    }

    /// Handle a file selection for the role's upload slot (CV or logo).
    ///
    /// The candidate is gated by the role's policy. On rejection the
    /// previous attachment, if any, is left untouched and the rejection
    /// becomes the blocking notification. Returns whether the file was
    /// retained.
    pub fn attach_file(&mut self, candidate: FileCandidate) -> bool {
        let policy = match self.state.role() {
            Role::Student => &CV_POLICY,
            Role::Startup => &LOGO_POLICY,
        };

        match accept_file(candidate, policy) {
            Ok(file) => {
                tracing::debug!(
                    name = file.name(),
                    size = file.size(),
                    "Attachment accepted"
                );
                self.state.draft_mut().set_attachment(file);
                self.notification = None;
                true
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Attachment rejected");
                self.notification = Some(rejection.to_string());
                false
            }
        }
    }

    /// Handle the "Complete" action: package the draft and hand it to the
    /// submission transport.
    ///
    /// Only reachable from a valid final step; otherwise the failure
    /// becomes the blocking notification. While a submission is in flight
    /// further calls are refused, and once one has succeeded the session is
    /// closed. On transport failure the draft is preserved unchanged so the
    /// user may retry. Returns the endpoint's JSON body on success.
    pub async fn submit(&mut self) -> Option<serde_json::Value> {
        if self.submitting {
            tracing::warn!("Submission already in flight; ignoring duplicate request");
            return None;
        }
        if self.completed {
            tracing::warn!("Session already completed; ignoring submit");
            return None;
        }

        if let Err(e) = self.state.can_submit() {
            self.notification = Some(e.to_string());
            return None;
        }

        let payload = SignupPayload::from_draft(self.state.draft());

        self.submitting = true;
        let result = self.transport.submit(payload).await;
        self.submitting = false;

        match result {
            Ok(body) => {
                tracing::info!(role = self.state.role().as_str(), "Signup completed");
                self.completed = true;
                self.notification = None;
                Some(body)
            }
            Err(e) => {
                let message = if e.is_timeout() {
                    "The signup service took too long to respond. Please try again.".to_string()
                } else {
                    format!("Signup could not be submitted: {e}. Please try again.")
                };
                tracing::warn!(error = %e, "Signup submission failed");
                self.notification = Some(message);
                None
            }
        }
    }
}
