// ABOUTME: Onboarding wizard module for new chatbot accounts
// Guides users through plan selection, account creation and API key issuance

pub mod component;
pub mod credential;
pub mod state;
pub mod token;

pub use component::OnboardingComponent;
pub use credential::{AuthMethod, CredentialCapture, CredentialEvent, CredentialPhase, SubmittedCredential};
pub use state::{OnboardingState, OnboardingStep, OnboardingSummary, WizardAction, WizardEvent};
pub use token::{IssuedToken, KeyIssuer, StubKeyIssuer};
