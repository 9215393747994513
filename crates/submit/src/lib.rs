//! Signup submission boundary for the LiteStart onboarding wizard.
//!
//! Turns a completed draft into a multipart POST against the external
//! signup endpoint. The [`SignupTransport`] trait is the seam the wizard
//! shell depends on; [`SignupClient`] is the reqwest-backed implementation.

pub mod client;
pub mod config;
pub mod payload;

pub use client::{SignupClient, SignupTransport, SubmitError};
pub use config::SubmitConfig;
pub use payload::SignupPayload;
