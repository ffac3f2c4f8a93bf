// ABOUTME: Help overlay component displaying keyboard shortcuts for the wizard and dashboard

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};

use super::theme::{CORNFLOWER_BLUE, GOLD, PANEL_BG, SOFT_WHITE};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            ListItem::new(title).style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        };

        let help_items = vec![
            section("Choose Your Plan:"),
            ListItem::new("  h/←  l/→   Adjust monthly messages"),
            ListItem::new("  Home/End   Smallest / largest plan"),
            ListItem::new("  Enter      Continue"),
            ListItem::new(""),
            section("Create Your Account:"),
            ListItem::new("  k/↑  j/↓   Highlight sign-in method"),
            ListItem::new("  Enter      Choose method / submit / continue"),
            ListItem::new("  Ctrl+U     Clear the field"),
            ListItem::new("  Esc        Pick a different method"),
            ListItem::new("  c          Copy API key"),
            ListItem::new(""),
            section("Get Your API Key:"),
            ListItem::new("  c          Copy API key"),
            ListItem::new("  s          Switch snippet language"),
            ListItem::new("  Enter      Finish and open the dashboard"),
            ListItem::new(""),
            section("Dashboard:"),
            ListItem::new("  h/←  l/→   Previous / next time range"),
            ListItem::new("  1-4        24h, 7d, 30d, 90d"),
            ListItem::new(""),
            section("General:"),
            ListItem::new("  Tab        Switch between onboarding and dashboard"),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items)
            .style(Style::default().fg(SOFT_WHITE))
            .block(
                Block::default()
                    .title(" Help - Press ? or Esc to close ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(PANEL_BG)),
            );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
