// ABOUTME: End-to-end onboarding wizard flows driven through the key handler

mod helpers;

use botdesk::app::state::NotificationType;
use botdesk::app::View;
use botdesk::components::onboarding::{
    AuthMethod, CredentialEvent, OnboardingState, OnboardingStep, WizardEvent,
};
use botdesk::config::AppConfig;
use botdesk::error::{ValidationError, WizardError};
use botdesk::pricing::SliderEvent;
use crossterm::event::KeyCode;
use helpers::{
    app_state, app_state_with, press, seeded_issuer, submit_email, type_string, MockClipboard,
    UnreachableIssuer,
};
use pretty_assertions::assert_eq;

#[test]
fn test_continue_without_moving_slider_stays_on_plan() {
    let mut state = app_state();
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.onboarding.current_step, OnboardingStep::Plan);
    assert_eq!(
        state.onboarding.error_message.as_deref(),
        Some("Move the slider to choose a plan")
    );
}

#[test]
fn test_slider_extremes_price_the_plan() {
    let mut state = app_state();

    press(&mut state, KeyCode::End);
    let plan = state.onboarding.plan.unwrap();
    assert_eq!((plan.volume, plan.price), (100_000, 2_900));

    press(&mut state, KeyCode::Home);
    let plan = state.onboarding.plan.unwrap();
    assert_eq!((plan.volume, plan.price), (1_000, 29));
    assert!((plan.per_message_rate - 0.029).abs() < 1e-12);

    // Already at the floor; the plan is still chosen
    press(&mut state, KeyCode::Left);
    assert_eq!(state.onboarding.plan.unwrap().volume, 1_000);
}

#[test]
fn test_empty_email_submit_is_rejected() {
    let mut state = app_state();
    submit_email(&mut state, "");

    assert_eq!(state.onboarding.current_step, OnboardingStep::Account);
    assert!(state.onboarding.token.is_none());
    assert!(state.onboarding.credential.is_editing());
    assert_eq!(
        state.onboarding.error_message.as_deref(),
        Some(ValidationError::EmptyCredential.to_string().as_str())
    );
}

#[test]
fn test_whitespace_credential_is_rejected_for_every_method() {
    for method in AuthMethod::all() {
        let mut issuer = seeded_issuer();
        let mut wizard = OnboardingState::default();
        wizard
            .apply(WizardEvent::Slider(SliderEvent::Max), &mut issuer)
            .unwrap();
        wizard.apply(WizardEvent::Continue, &mut issuer).unwrap();
        wizard
            .apply(WizardEvent::Credential(CredentialEvent::Select(*method)), &mut issuer)
            .unwrap();
        wizard
            .apply(WizardEvent::Credential(CredentialEvent::Paste("   ".to_string())), &mut issuer)
            .unwrap();

        let err = wizard
            .apply(WizardEvent::Credential(CredentialEvent::Submit), &mut issuer)
            .unwrap_err();
        assert_eq!(err, WizardError::Validation(ValidationError::EmptyCredential), "{method:?}");
    }
}

#[test]
fn test_email_submit_issues_key_and_stays_on_account() {
    let mut state = app_state();
    submit_email(&mut state, "a@b.com");

    let token = state.onboarding.token.clone().unwrap();
    let suffix = token.as_str().strip_prefix("sk-").unwrap();
    assert_eq!(suffix.len(), 13);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert_eq!(state.onboarding.current_step, OnboardingStep::Account);
    assert_eq!(state.onboarding.credential.method(), Some(AuthMethod::Email));
}

#[test]
fn test_continue_before_submit_is_rejected() {
    let mut state = app_state();
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter); // pick Twitter
    type_string(&mut state, "@botdesk");
    press(&mut state, KeyCode::Esc); // back to the chooser, value dropped

    let mut issuer = seeded_issuer();
    let err = state
        .onboarding
        .apply(WizardEvent::Continue, &mut issuer)
        .unwrap_err();
    assert_eq!(err, WizardError::Validation(ValidationError::CredentialNotSubmitted));
    assert_eq!(state.onboarding.current_step, OnboardingStep::Account);
}

#[test]
fn test_steps_only_move_forward_one_at_a_time() {
    let mut state = app_state();
    let mut seen = vec![state.onboarding.current_step];
    let mut record = |state: &botdesk::app::AppState| {
        let step = state.onboarding.current_step;
        if seen.last() != Some(&step) {
            seen.push(step);
        }
    };

    for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Enter, KeyCode::Enter] {
        press(&mut state, code);
        record(&state);
    }
    type_string(&mut state, "someone");
    for code in [KeyCode::Enter, KeyCode::Enter, KeyCode::Char('s'), KeyCode::Enter] {
        press(&mut state, code);
        record(&state);
    }

    assert_eq!(
        seen,
        vec![OnboardingStep::Plan, OnboardingStep::Account, OnboardingStep::ApiKey]
    );
}

#[test]
fn test_full_flow_lands_on_dashboard() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_set_text()
        .withf(|text| text.starts_with("sk-") && text.len() == 16)
        .times(2)
        .returning(|_| Ok(()));

    let mut state = app_state_with(AppConfig::default(), clipboard);
    submit_email(&mut state, "dev@example.com");
    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.onboarding.current_step, OnboardingStep::ApiKey);

    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.current_view, View::Dashboard);
    let summary = state.completed.clone().unwrap();
    assert_eq!(summary.messages, 2_000);
    assert_eq!(summary.price, 58);
    assert_eq!(summary.rate_limit_per_minute, 120);
    assert_eq!(summary.method, AuthMethod::Email);
}

#[test]
fn test_clipboard_failure_leaves_wizard_untouched() {
    let mut clipboard = MockClipboard::new();
    clipboard
        .expect_set_text()
        .times(1)
        .returning(|_| Err(WizardError::Clipboard("no display server".to_string())));

    let mut state = app_state_with(AppConfig::default(), clipboard);
    submit_email(&mut state, "dev@example.com");
    let token_before = state.onboarding.token.clone();

    press(&mut state, KeyCode::Char('c'));

    assert_eq!(state.onboarding.token, token_before);
    assert_eq!(state.onboarding.current_step, OnboardingStep::Account);
    assert!(state.onboarding.error_message.is_none());
    let notes = state.get_current_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].notification_type, NotificationType::Error);
}

#[test]
fn test_unreachable_issuer_keeps_form_editable() {
    let mut state = botdesk::app::AppState::with_services(
        AppConfig::default(),
        Box::new(UnreachableIssuer),
        Box::new(MockClipboard::new()),
    );
    submit_email(&mut state, "dev@example.com");

    assert!(state.onboarding.token.is_none());
    assert!(state.onboarding.credential.is_editing());
    assert_eq!(state.onboarding.credential.value(), "dev@example.com");
    assert_eq!(state.get_current_notifications().len(), 1);

    // Still typing into the field, not quitting
    press(&mut state, KeyCode::Char('q'));
    assert!(!state.should_quit);
    assert_eq!(state.onboarding.credential.value(), "dev@example.comq");
}
