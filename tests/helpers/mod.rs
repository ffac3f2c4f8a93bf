// ABOUTME: Shared fixtures for integration tests: seeded key issuer, mock clipboard, key helpers

#![allow(dead_code)]

use botdesk::app::{AppState, EventHandler};
use botdesk::clipboard::ClipboardSink;
use botdesk::components::onboarding::{IssuedToken, KeyIssuer, StubKeyIssuer, SubmittedCredential};
use botdesk::config::{AppConfig, TokenConfig};
use botdesk::error::WizardError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;
use rand::rngs::StdRng;
use rand::SeedableRng;

mock! {
    pub Clipboard {}

    impl ClipboardSink for Clipboard {
        fn set_text(&mut self, text: &str) -> Result<(), WizardError>;
    }
}

/// Issuer whose backend is unreachable
pub struct UnreachableIssuer;

impl KeyIssuer for UnreachableIssuer {
    fn issue(&mut self, _credential: &SubmittedCredential) -> Result<IssuedToken, WizardError> {
        Err(WizardError::Network("connection refused".to_string()))
    }
}

pub fn seeded_issuer() -> StubKeyIssuer<StdRng> {
    StubKeyIssuer::with_rng(TokenConfig::default(), StdRng::seed_from_u64(2024))
}

pub fn app_state() -> AppState {
    app_state_with(AppConfig::default(), MockClipboard::new())
}

pub fn app_state_with(config: AppConfig, clipboard: MockClipboard) -> AppState {
    AppState::with_services(config, Box::new(seeded_issuer()), Box::new(clipboard))
}

pub const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Map a key through the handler and apply it, as the main loop does
pub fn press(state: &mut AppState, code: KeyCode) {
    press_event(state, create_key_event(code));
}

pub fn press_event(state: &mut AppState, key_event: KeyEvent) {
    if let Some(event) = EventHandler::handle_key_event(key_event, state) {
        EventHandler::process_event(event, state);
    }
}

pub fn type_string(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

/// Drive the wizard from launch to a submitted email credential on step 2
pub fn submit_email(state: &mut AppState, email: &str) {
    press(state, KeyCode::Right); // 2,000 messages
    press(state, KeyCode::Enter);
    press(state, KeyCode::Down); // Twitter -> GitHub
    press(state, KeyCode::Down); // GitHub -> Email
    press(state, KeyCode::Enter);
    type_string(state, email);
    press(state, KeyCode::Enter);
}
