// ABOUTME: Error types for the onboarding wizard and pricing calculator
// Validation errors block a transition; everything else is surfaced as a notice

use thiserror::Error;

/// Reasons a wizard transition was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a value before continuing")]
    EmptyCredential,
    #[error("Choose a sign-in method first")]
    NoMethodSelected,
    #[error("Move the slider to choose a plan")]
    PlanNotSelected,
    #[error("Submit your account details to get an API key")]
    CredentialNotSubmitted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Message volume {volume} is outside the supported range")]
    InvalidInput { volume: u64 },
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
    /// Reserved for a networked key issuer; the stub never returns it
    #[error("Network error: {0}")]
    Network(String),
    /// Reserved for a networked key issuer; the stub never returns it
    #[error("Authentication failed: {0}")]
    AuthFailure(String),
}

impl WizardError {
    /// Validation failures are expected user mistakes, not faults
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
