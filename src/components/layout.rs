// ABOUTME: Main layout component routing the current view and drawing overlays

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::theme::{CORNFLOWER_BLUE, ERROR_RED, PANEL_BG, SELECTION_GREEN};
use super::{DashboardComponent, HelpComponent, OnboardingComponent};
use crate::app::state::{AppState, NotificationType, View};

pub struct LayoutComponent {
    onboarding: OnboardingComponent,
    dashboard: DashboardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            onboarding: OnboardingComponent::new(api_base_url),
            dashboard: DashboardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        match state.current_view {
            View::Onboarding => self.onboarding.render(frame, area, &state.onboarding),
            View::Dashboard => self.dashboard.render(frame, area, &state.dashboard),
        }

        if state.help_visible {
            self.help.render(frame, area);
        }

        self.render_notifications(frame, area, state);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Top-right corner, 3 rows per toast
        let notification_width = 50.min(area.width);
        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: area.height.saturating_sub(2),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let Ok(index) = u16::try_from(i) else {
                break;
            };
            let y_offset = index.saturating_mul(3);
            if y_offset >= notification_area.height {
                break;
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Error => ("✗ ", ERROR_RED),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(Clear, single_notification_area);
            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new(crate::config::IntegrationConfig::default().api_base_url)
    }
}
