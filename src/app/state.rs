// ABOUTME: Application state management and view switching for the botdesk TUI
// Owns the wizard and dashboard state plus the injected key issuer and clipboard

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::components::dashboard::{DashboardEvent, DashboardState};
use crate::components::onboarding::{
    KeyIssuer, OnboardingState, OnboardingSummary, StubKeyIssuer, WizardAction, WizardEvent,
};
use crate::config::{AppConfig, StartView};
use crate::pricing::PricingCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Onboarding,
    Dashboard,
}

impl From<StartView> for View {
    fn from(start: StartView) -> Self {
        match start {
            StartView::Onboarding => Self::Onboarding,
            StartView::Dashboard => Self::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

/// Short-lived toast shown in the top-right corner
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

pub struct AppState {
    pub current_view: View,
    pub help_visible: bool,
    pub should_quit: bool,
    pub config: AppConfig,
    pub onboarding: OnboardingState,
    pub dashboard: DashboardState,
    pub notifications: Vec<Notification>,
    /// Set once the wizard has been finished in this session
    pub completed: Option<OnboardingSummary>,
    issuer: Box<dyn KeyIssuer>,
    clipboard: Box<dyn ClipboardSink>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let issuer = Box::new(StubKeyIssuer::new(config.token.clone()));
        Self::with_services(config, issuer, Box::new(SystemClipboard::new()))
    }

    /// Build state with explicit collaborators; tests inject fakes here
    pub fn with_services(
        config: AppConfig,
        issuer: Box<dyn KeyIssuer>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let onboarding = OnboardingState::new(PricingCalculator::new(config.pricing.clone()));
        let dashboard = DashboardState::new(&config.dashboard);

        Self {
            current_view: config.ui_preferences.start_view.into(),
            help_visible: config.ui_preferences.show_help_on_start,
            should_quit: false,
            config,
            onboarding,
            dashboard,
            notifications: Vec::new(),
            completed: None,
            issuer,
            clipboard,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn switch_view(&mut self) {
        self.current_view = match self.current_view {
            View::Onboarding => View::Dashboard,
            View::Dashboard => View::Onboarding,
        };
        info!(view = ?self.current_view, "Switched view");
    }

    /// Feed one event to the wizard and carry out the actions it asks for.
    /// Validation failures are already on the wizard's error line; anything
    /// else also raises a toast.
    pub fn apply_wizard(&mut self, event: WizardEvent) {
        match self.onboarding.apply(event, self.issuer.as_mut()) {
            Ok(actions) => {
                for action in actions {
                    self.perform(action);
                }
            }
            Err(err) if err.is_validation() => {}
            Err(err) => {
                warn!(flow_id = %self.onboarding.flow_id, "Wizard operation failed: {}", err);
                self.add_error_notification(err.to_string());
            }
        }
    }

    pub fn apply_dashboard(&mut self, event: DashboardEvent) {
        self.dashboard.apply(event);
    }

    fn perform(&mut self, action: WizardAction) {
        match action {
            WizardAction::CopyToClipboard(text) => match self.clipboard.set_text(&text) {
                Ok(()) => self.add_success_notification("API key copied to clipboard".to_string()),
                Err(e) => {
                    warn!("Copy to clipboard failed: {}", e);
                    self.add_error_notification(e.to_string());
                }
            },
            WizardAction::Finished(summary) => {
                info!(
                    flow_id = %summary.flow_id,
                    messages = summary.messages,
                    price = summary.price,
                    method = ?summary.method,
                    "Onboarding complete, opening dashboard"
                );
                self.completed = Some(summary);
                self.current_view = View::Dashboard;
                self.add_success_notification("You're all set! Welcome to your dashboard".to_string());
            }
        }
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn add_success_notification(&mut self, message: String) {
        self.add_notification(Notification::success(message));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        self.add_notification(Notification::info(message));
    }

    /// Remove expired notifications
    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get current notifications (non-expired)
    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }

    /// Keys are read as text rather than shortcuts
    pub fn is_text_input_active(&self) -> bool {
        self.current_view == View::Onboarding && self.onboarding.is_text_input_active()
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn tick(&mut self) {
        self.state.cleanup_expired_notifications();
    }
}
