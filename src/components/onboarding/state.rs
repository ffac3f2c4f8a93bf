// ABOUTME: State management for the onboarding wizard
// Tracks the current step, the chosen plan, the account credential and the issued key

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::credential::{AuthMethod, CredentialCapture, CredentialEvent, CredentialOutcome};
use super::token::{IssuedToken, KeyIssuer};
use crate::error::{ValidationError, WizardError};
use crate::integration::SnippetLanguage;
use crate::pricing::{PricingCalculator, PricingSlider, Quote, SliderEvent};

/// Steps in the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    Plan,
    Account,
    ApiKey,
}

impl OnboardingStep {
    /// Get all steps in order
    pub const fn all() -> &'static [Self] {
        &[Self::Plan, Self::Account, Self::ApiKey]
    }

    /// Get the step number (1-indexed for display)
    pub const fn number(self) -> usize {
        match self {
            Self::Plan => 1,
            Self::Account => 2,
            Self::ApiKey => 3,
        }
    }

    pub const fn total() -> usize {
        3
    }

    /// Short label for the progress bar
    pub const fn title(self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::Account => "Account",
            Self::ApiKey => "API Key",
        }
    }

    /// Heading shown above the step content
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Plan => "Choose Your Plan",
            Self::Account => "Create Your Account",
            Self::ApiKey => "Get Your API Key",
        }
    }

    /// Can we go to the next step?
    pub fn can_advance(self, state: &OnboardingState) -> Result<(), ValidationError> {
        match self {
            Self::Plan if state.plan.is_none() => Err(ValidationError::PlanNotSelected),
            Self::Account if state.token.is_none() => Err(ValidationError::CredentialNotSubmitted),
            _ => Ok(()),
        }
    }

    /// Next step, if any. There is no way back.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Plan => Some(Self::Account),
            Self::Account => Some(Self::ApiKey),
            Self::ApiKey => None,
        }
    }
}

/// Input to the wizard reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Slider(SliderEvent),
    Credential(CredentialEvent),
    /// The step's Continue control
    Continue,
    CopyToken,
    CycleSnippet,
}

/// Effects the shell performs on behalf of the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    CopyToClipboard(String),
    Finished(OnboardingSummary),
}

/// Outcome of a completed flow. Deliberately excludes the key and the credential value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingSummary {
    pub flow_id: Uuid,
    pub messages: u64,
    pub price: u64,
    pub rate_limit_per_minute: u64,
    pub method: AuthMethod,
}

/// Full onboarding wizard state
#[derive(Debug)]
pub struct OnboardingState {
    /// Correlates log lines from one pass through the wizard
    pub flow_id: Uuid,
    /// Current step in the wizard
    pub current_step: OnboardingStep,
    pub slider: PricingSlider,
    /// Selected plan, set once the slider has been moved
    pub plan: Option<Quote>,
    pub credential: CredentialCapture,
    pub token: Option<IssuedToken>,
    pub snippet_language: SnippetLanguage,
    /// Error message to display
    pub error_message: Option<String>,
    /// Set once the user confirms the final step
    pub finished: bool,
}

impl OnboardingState {
    pub fn new(calculator: PricingCalculator) -> Self {
        Self {
            flow_id: Uuid::new_v4(),
            current_step: OnboardingStep::Plan,
            slider: PricingSlider::new(calculator),
            plan: None,
            credential: CredentialCapture::new(),
            token: None,
            snippet_language: SnippetLanguage::default(),
            error_message: None,
            finished: false,
        }
    }

    /// Apply one event. Refused transitions leave the state untouched apart from
    /// the displayed error message.
    pub fn apply(
        &mut self,
        event: WizardEvent,
        issuer: &mut dyn KeyIssuer,
    ) -> Result<Vec<WizardAction>, WizardError> {
        match self.transition(event, issuer) {
            Ok(actions) => {
                self.error_message = None;
                Ok(actions)
            }
            Err(err) => {
                debug!(flow_id = %self.flow_id, step = ?self.current_step, "Wizard event refused: {}", err);
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn transition(
        &mut self,
        event: WizardEvent,
        issuer: &mut dyn KeyIssuer,
    ) -> Result<Vec<WizardAction>, WizardError> {
        match (self.current_step, event) {
            (OnboardingStep::Plan, WizardEvent::Slider(slider_event)) => {
                self.plan = Some(self.slider.apply(slider_event));
                Ok(Vec::new())
            }
            (OnboardingStep::Account, WizardEvent::Credential(credential_event)) => {
                self.apply_credential(credential_event, issuer)?;
                Ok(Vec::new())
            }
            (OnboardingStep::ApiKey, WizardEvent::CycleSnippet) => {
                self.snippet_language = self.snippet_language.next();
                Ok(Vec::new())
            }
            (OnboardingStep::Account | OnboardingStep::ApiKey, WizardEvent::CopyToken) => {
                Ok(self
                    .token
                    .as_ref()
                    .map(|token| vec![WizardAction::CopyToClipboard(token.as_str().to_string())])
                    .unwrap_or_default())
            }
            (OnboardingStep::ApiKey, WizardEvent::Continue) => Ok(self.finish()),
            (step, WizardEvent::Continue) => {
                self.advance(step)?;
                Ok(Vec::new())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Submission is committed only once a key has been issued, so a failing
    /// issuer leaves the form editable.
    fn apply_credential(
        &mut self,
        event: CredentialEvent,
        issuer: &mut dyn KeyIssuer,
    ) -> Result<(), WizardError> {
        let mut next = self.credential.clone();
        if let CredentialOutcome::Submitted(submitted) = next.apply(event)? {
            let token = issuer.issue(&submitted)?;
            info!(flow_id = %self.flow_id, method = ?submitted.method, "Credential submitted");
            self.token = Some(token);
        }
        self.credential = next;
        Ok(())
    }

    fn advance(&mut self, step: OnboardingStep) -> Result<(), WizardError> {
        step.can_advance(self)?;
        if let Some(next) = step.next() {
            info!(flow_id = %self.flow_id, from = ?step, to = ?next, "Wizard step advanced");
            self.current_step = next;
        }
        Ok(())
    }

    fn finish(&mut self) -> Vec<WizardAction> {
        if self.finished {
            return Vec::new();
        }
        let Some(summary) = self.summary() else {
            return Vec::new();
        };
        self.finished = true;
        info!(flow_id = %self.flow_id, "Onboarding finished");
        vec![WizardAction::Finished(summary)]
    }

    pub fn summary(&self) -> Option<OnboardingSummary> {
        let plan = self.plan?;
        let method = self.credential.method()?;
        Some(OnboardingSummary {
            flow_id: self.flow_id,
            messages: plan.volume,
            price: plan.price,
            rate_limit_per_minute: plan.rate_limit_per_minute,
            method,
        })
    }

    /// Whether the current step's Continue control is enabled
    pub fn can_continue(&self) -> bool {
        self.current_step.can_advance(self).is_ok()
    }

    /// The account step is taking text input
    pub fn is_text_input_active(&self) -> bool {
        self.current_step == OnboardingStep::Account && self.credential.is_editing()
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.current_step == OnboardingStep::ApiKey
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new(PricingCalculator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::onboarding::token::StubKeyIssuer;
    use crate::config::TokenConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn issuer() -> StubKeyIssuer<StdRng> {
        StubKeyIssuer::with_rng(TokenConfig::default(), StdRng::seed_from_u64(42))
    }

    struct FailingIssuer;

    impl KeyIssuer for FailingIssuer {
        fn issue(
            &mut self,
            _credential: &super::super::credential::SubmittedCredential,
        ) -> Result<IssuedToken, WizardError> {
            Err(WizardError::Network("connection refused".to_string()))
        }
    }

    fn at_account_step(issuer: &mut dyn KeyIssuer) -> OnboardingState {
        let mut state = OnboardingState::default();
        state.apply(WizardEvent::Slider(SliderEvent::Increase), issuer).unwrap();
        state.apply(WizardEvent::Continue, issuer).unwrap();
        state
    }

    fn type_text(state: &mut OnboardingState, issuer: &mut dyn KeyIssuer, text: &str) {
        for c in text.chars() {
            state
                .apply(WizardEvent::Credential(CredentialEvent::InputChar(c)), issuer)
                .unwrap();
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(OnboardingStep::Plan.next(), Some(OnboardingStep::Account));
        assert_eq!(OnboardingStep::Account.next(), Some(OnboardingStep::ApiKey));
        assert_eq!(OnboardingStep::ApiKey.next(), None);
        assert_eq!(OnboardingStep::ApiKey.number(), OnboardingStep::total());
    }

    #[test]
    fn test_state_initialization() {
        let state = OnboardingState::default();
        assert_eq!(state.current_step, OnboardingStep::Plan);
        assert!(state.plan.is_none());
        assert!(state.credential.method().is_none());
        assert!(state.token.is_none());
        assert!(!state.can_continue());
    }

    #[test]
    fn test_continue_without_plan_is_refused() {
        let mut issuer = issuer();
        let mut state = OnboardingState::default();
        let err = state.apply(WizardEvent::Continue, &mut issuer).unwrap_err();
        assert_eq!(err, WizardError::Validation(ValidationError::PlanNotSelected));
        assert_eq!(state.current_step, OnboardingStep::Plan);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_account_continue_requires_submitted_credential() {
        let mut issuer = issuer();
        let mut state = at_account_step(&mut issuer);
        state
            .apply(WizardEvent::Credential(CredentialEvent::Select(AuthMethod::Email)), &mut issuer)
            .unwrap();
        type_text(&mut state, &mut issuer, "a@b.com");

        let err = state.apply(WizardEvent::Continue, &mut issuer).unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationError::CredentialNotSubmitted)
        );
        assert_eq!(state.current_step, OnboardingStep::Account);
    }

    #[test]
    fn test_submit_issues_token_once() {
        let mut issuer = issuer();
        let mut state = at_account_step(&mut issuer);
        state
            .apply(WizardEvent::Credential(CredentialEvent::Select(AuthMethod::Email)), &mut issuer)
            .unwrap();
        type_text(&mut state, &mut issuer, "a@b.com");
        state
            .apply(WizardEvent::Credential(CredentialEvent::Submit), &mut issuer)
            .unwrap();

        let first = state.token.clone().unwrap();
        assert!(first.as_str().starts_with("sk-"));
        assert_eq!(state.current_step, OnboardingStep::Account);

        state
            .apply(WizardEvent::Credential(CredentialEvent::Submit), &mut issuer)
            .unwrap();
        assert_eq!(state.token, Some(first));
    }

    #[test]
    fn test_failed_issuance_keeps_form_editable() {
        let mut issuer = FailingIssuer;
        let mut state = at_account_step(&mut issuer);
        state
            .apply(WizardEvent::Credential(CredentialEvent::Select(AuthMethod::Phone)), &mut issuer)
            .unwrap();
        type_text(&mut state, &mut issuer, "555");

        let err = state
            .apply(WizardEvent::Credential(CredentialEvent::Submit), &mut issuer)
            .unwrap_err();
        assert!(matches!(err, WizardError::Network(_)));
        assert!(state.credential.is_editing());
        assert!(state.token.is_none());
        assert_eq!(state.current_step, OnboardingStep::Account);
    }

    #[test]
    fn test_events_for_other_steps_are_ignored() {
        let mut issuer = issuer();
        let mut state = OnboardingState::default();
        let actions = state
            .apply(WizardEvent::Credential(CredentialEvent::Select(AuthMethod::Email)), &mut issuer)
            .unwrap();
        assert!(actions.is_empty());
        assert!(state.credential.method().is_none());

        let actions = state.apply(WizardEvent::CopyToken, &mut issuer).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_finish_emits_summary_once() {
        let mut issuer = issuer();
        let mut state = at_account_step(&mut issuer);
        state
            .apply(WizardEvent::Credential(CredentialEvent::Select(AuthMethod::GitHub)), &mut issuer)
            .unwrap();
        type_text(&mut state, &mut issuer, "octocat");
        state
            .apply(WizardEvent::Credential(CredentialEvent::Submit), &mut issuer)
            .unwrap();
        state.apply(WizardEvent::Continue, &mut issuer).unwrap();
        assert!(state.is_final_step());

        let actions = state.apply(WizardEvent::Continue, &mut issuer).unwrap();
        let [WizardAction::Finished(summary)] = actions.as_slice() else {
            panic!("expected a single Finished action, got {actions:?}");
        };
        assert_eq!(summary.messages, 2_000);
        assert_eq!(summary.price, 58);
        assert_eq!(summary.method, AuthMethod::GitHub);

        assert!(state.apply(WizardEvent::Continue, &mut issuer).unwrap().is_empty());
        assert_eq!(state.current_step, OnboardingStep::ApiKey);
    }
}
