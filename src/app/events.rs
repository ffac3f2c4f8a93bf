// ABOUTME: Event handling system mapping keyboard input to wizard and dashboard events

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{AppState, View};
use crate::components::dashboard::DashboardEvent;
use crate::components::onboarding::{CredentialEvent, CredentialPhase, OnboardingStep, WizardEvent};
use crate::models::TimeRange;
use crate::pricing::SliderEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    /// Flip between the wizard and the dashboard
    SwitchView,
    Wizard(WizardEvent),
    Dashboard(DashboardEvent),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits, even mid-input
        if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if !state.is_text_input_active() {
            match key_event.code {
                KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
                KeyCode::Char('q') | KeyCode::Esc => return Some(AppEvent::Quit),
                KeyCode::Tab => return Some(AppEvent::SwitchView),
                _ => {}
            }
        }

        match state.current_view {
            View::Onboarding => Self::handle_onboarding_keys(key_event, state).map(AppEvent::Wizard),
            View::Dashboard => Self::handle_dashboard_keys(key_event).map(AppEvent::Dashboard),
        }
    }

    /// Bracketed paste goes straight into the credential field
    pub fn handle_paste(text: String, state: &AppState) -> Option<AppEvent> {
        state
            .is_text_input_active()
            .then(|| AppEvent::Wizard(WizardEvent::Credential(CredentialEvent::Paste(text))))
    }

    fn handle_onboarding_keys(key_event: KeyEvent, state: &AppState) -> Option<WizardEvent> {
        match state.onboarding.current_step {
            OnboardingStep::Plan => Self::handle_plan_keys(key_event),
            OnboardingStep::Account => Self::handle_account_keys(key_event, state),
            OnboardingStep::ApiKey => match key_event.code {
                KeyCode::Char('c') => Some(WizardEvent::CopyToken),
                KeyCode::Char('s') => Some(WizardEvent::CycleSnippet),
                KeyCode::Enter => Some(WizardEvent::Continue),
                _ => None,
            },
        }
    }

    fn handle_plan_keys(key_event: KeyEvent) -> Option<WizardEvent> {
        let slider = match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => SliderEvent::Decrease,
            KeyCode::Right | KeyCode::Char('l') => SliderEvent::Increase,
            KeyCode::Home => SliderEvent::Min,
            KeyCode::End => SliderEvent::Max,
            KeyCode::Enter => return Some(WizardEvent::Continue),
            _ => return None,
        };
        Some(WizardEvent::Slider(slider))
    }

    fn handle_account_keys(key_event: KeyEvent, state: &AppState) -> Option<WizardEvent> {
        let credential = match state.onboarding.credential.phase() {
            CredentialPhase::Unselected => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => CredentialEvent::PreviousMethod,
                KeyCode::Down | KeyCode::Char('j') => CredentialEvent::NextMethod,
                KeyCode::Enter => CredentialEvent::ChooseHighlighted,
                _ => return None,
            },
            CredentialPhase::Selecting { .. } => match key_event.code {
                KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    CredentialEvent::Clear
                }
                KeyCode::Char(c)
                    if !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    CredentialEvent::InputChar(c)
                }
                KeyCode::Backspace => CredentialEvent::Backspace,
                KeyCode::Enter => CredentialEvent::Submit,
                KeyCode::Esc => CredentialEvent::ChangeMethod,
                _ => return None,
            },
            CredentialPhase::Submitted { .. } => {
                return match key_event.code {
                    KeyCode::Char('c') => Some(WizardEvent::CopyToken),
                    KeyCode::Enter => Some(WizardEvent::Continue),
                    _ => None,
                };
            }
        };
        Some(WizardEvent::Credential(credential))
    }

    fn handle_dashboard_keys(key_event: KeyEvent) -> Option<DashboardEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => Some(DashboardEvent::PreviousRange),
            KeyCode::Right | KeyCode::Char('l') => Some(DashboardEvent::NextRange),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c.to_digit(10)? as usize - 1;
                TimeRange::all().get(idx).copied().map(DashboardEvent::SelectRange)
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::SwitchView => state.switch_view(),
            AppEvent::Wizard(wizard_event) => state.apply_wizard(wizard_event),
            AppEvent::Dashboard(dashboard_event) => state.apply_dashboard(dashboard_event),
        }
    }
}
