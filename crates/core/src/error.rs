/// Domain-level error type for the onboarding core.
///
/// Every failure here is recoverable: the wizard stays on the same step
/// with its draft intact, and the message is surfaced to the user as a
/// blocking notification. File gating has its own reason type,
/// [`FileRejection`](crate::attachment::FileRejection), and submission
/// failures live with the transport in `litestart-submit`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
