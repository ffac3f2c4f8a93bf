// ABOUTME: Main onboarding wizard component
// Renders the plan, account and API key steps with a progress header and nav footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

use super::credential::{AuthMethod, CredentialPhase};
use super::state::{OnboardingState, OnboardingStep};
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::integration::{self, SnippetLanguage};
use crate::pricing::group_thousands;

/// The main onboarding wizard component
pub struct OnboardingComponent {
    api_base_url: String,
}

impl OnboardingComponent {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        // Main layout: header, content, error line, footer
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(12),   // Main content
                Constraint::Length(1), // Validation message
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        match state.current_step {
            OnboardingStep::Plan => self.render_plan(frame, layout[1], state),
            OnboardingStep::Account => self.render_account(frame, layout[1], state),
            OnboardingStep::ApiKey => self.render_api_key(frame, layout[1], state),
        }
        self.render_error(frame, layout[2], state);
        self.render_navigation(frame, layout[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                state.current_step.heading(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (step {} of {})", state.current_step.number(), OnboardingStep::total()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Step progress dots; completed and current steps are filled
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let steps = OnboardingStep::all();
        let current_idx = state.current_step.number() - 1;

        let mut spans = vec![Span::raw("  ")];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    fn panel(title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::panel("Pricing");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Volume label
                Constraint::Length(3), // Slider
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Price
                Constraint::Min(2),    // Instructions
            ])
            .split(inner);

        let quote = state.slider.quote();

        let volume = Paragraph::new(Span::styled(quote.volume_label(), Style::default().fg(SOFT_WHITE)))
            .alignment(Alignment::Center);
        frame.render_widget(volume, content_layout[0]);

        let slider = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(GOLD))
                    .style(Style::default().bg(DARK_BG)),
            )
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(DARK_BG))
            .ratio(state.slider.ratio())
            .label(format!("{} msgs", group_thousands(quote.volume)));
        frame.render_widget(slider, content_layout[1]);

        let price = Paragraph::new(vec![
            Line::from(Span::styled(
                quote.price_label(),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(quote.rate_label(), Style::default().fg(MUTED_GRAY))),
            Line::from(Span::styled(
                format!("{} API requests / minute", group_thousands(quote.rate_limit_per_minute)),
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(price, content_layout[3]);

        let hint = if state.plan.is_some() {
            "Press Enter to continue with this plan"
        } else {
            "Use ←/→ to choose your monthly volume"
        };
        let instructions = Paragraph::new(Span::styled(hint, Style::default().fg(MUTED_GRAY)))
            .alignment(Alignment::Center);
        frame.render_widget(instructions, content_layout[4]);
    }

    fn render_account(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::panel("Get Started Now");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match state.credential.phase() {
            CredentialPhase::Unselected => self.render_method_selection(frame, inner, state),
            CredentialPhase::Selecting { method, value } => {
                self.render_credential_input(frame, inner, *method, value, state.credential.is_valid());
            }
            CredentialPhase::Submitted { .. } => self.render_token(frame, inner, state),
        }
    }

    fn render_method_selection(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let highlighted = state.credential.highlighted();

        let items: Vec<ListItem> = AuthMethod::all()
            .iter()
            .map(|method| {
                let is_selected = *method == highlighted;
                let icon = if is_selected { "▶" } else { " " };
                let style = if is_selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                let bg = if is_selected {
                    Style::default().bg(HIGHLIGHT_BG)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(icon, Style::default().fg(SELECTION_GREEN)),
                    Span::raw(" "),
                    Span::styled(method.button_label(), style),
                ]))
                .style(bg)
            })
            .collect();

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(area);

        let list = List::new(items).style(Style::default().bg(PANEL_BG));
        frame.render_widget(list, content_layout[0]);

        let hint = Paragraph::new(Span::styled(
            "Use ↑/↓ to choose, Enter to select",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, content_layout[1]);
    }

    fn render_credential_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        method: AuthMethod,
        value: &str,
        is_valid: bool,
    ) {
        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(1), // Submit
                Constraint::Min(1),    // Hint
            ])
            .split(area);

        let label = Paragraph::new(Span::styled(method.field_label(), Style::default().fg(SOFT_WHITE)));
        frame.render_widget(label, content_layout[0]);

        let input_line = if value.is_empty() {
            Line::from(vec![
                Span::styled("│", Style::default().fg(GOLD)),
                Span::styled(method.placeholder(), Style::default().fg(MUTED_GRAY)),
            ])
        } else {
            Line::from(vec![
                Span::styled(value.to_string(), Style::default().fg(SOFT_WHITE)),
                Span::styled("│", Style::default().fg(GOLD)),
            ])
        };
        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(GOLD))
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(input, content_layout[1]);

        let submit_style = if is_valid {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };
        let submit = Paragraph::new(Span::styled("[ Continue ]", submit_style)).alignment(Alignment::Center);
        frame.render_widget(submit, content_layout[2]);

        let hint = Paragraph::new(Span::styled(
            "Enter to submit • Esc to choose another method",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, content_layout[3]);
    }

    fn token_lines(state: &OnboardingState) -> Vec<Line<'_>> {
        let Some(token) = &state.token else {
            return Vec::new();
        };
        vec![
            Line::from(vec![
                Span::styled("🔑 ", Style::default()),
                Span::styled(
                    "Your API Key has been generated. Keep it secure!",
                    Style::default().fg(SOFT_WHITE),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(token.as_str(), Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled("   [c] Copy", Style::default().fg(MUTED_GRAY)),
            ]),
        ]
    }

    fn render_token(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let mut lines = vec![Line::from("")];
        lines.extend(Self::token_lines(state));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(MUTED_GRAY),
        )));

        let text = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(text, area);
    }

    fn render_api_key(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Self::panel("Setup Complete");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Success message
                Constraint::Length(4), // Key
                Constraint::Length(2), // Plan summary
                Constraint::Min(6),    // Snippet
            ])
            .split(inner);

        let success = Paragraph::new(vec![
            Line::from(Span::styled(
                "You're All Set!",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your chatbot is ready to use. Start integrating it with the key below.",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(success, content_layout[0]);

        let key = Paragraph::new(Self::token_lines(state)).alignment(Alignment::Center);
        frame.render_widget(key, content_layout[1]);

        if let Some(summary) = state.summary() {
            let plan = Paragraph::new(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled("Plan: ", Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    format!(
                        "{} messages • ${}/month • {} req/min",
                        group_thousands(summary.messages),
                        group_thousands(summary.price),
                        group_thousands(summary.rate_limit_per_minute)
                    ),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(plan, content_layout[2]);
        }

        if let Some(token) = &state.token {
            self.render_snippet(frame, content_layout[3], state.snippet_language, token.as_str());
        }
    }

    fn render_snippet(&self, frame: &mut Frame, area: Rect, language: SnippetLanguage, key: &str) {
        let tabs: Vec<Span> = SnippetLanguage::all()
            .iter()
            .flat_map(|candidate| {
                let style = if *candidate == language {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MUTED_GRAY)
                };
                [Span::styled(candidate.label(), style), Span::raw("  ")]
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG))
            .title(Line::from(tabs))
            .title(
                Title::from(Span::styled(" [s] switch language ", Style::default().fg(MUTED_GRAY)))
                    .position(Position::Bottom),
            );

        let code: Vec<Line> = integration::snippet(language, key, &self.api_base_url)
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(SOFT_WHITE))))
            .collect();

        let snippet = Paragraph::new(code).block(block).wrap(Wrap { trim: false });
        frame.render_widget(snippet, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        if let Some(message) = &state.error_message {
            let error = Paragraph::new(Span::styled(
                format!("⚠ {message}"),
                Style::default().fg(ERROR_RED),
            ))
            .alignment(Alignment::Center)
            .style(Style::default().bg(DARK_BG));
            frame.render_widget(error, area);
        }
    }

    /// Render navigation footer. Continue is dimmed while its gate is closed.
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &OnboardingState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let can_continue = state.can_continue();
        let button_text = if state.is_final_step() { " Finish" } else { " Continue" };
        let enabled = |style: Style| if can_continue { style } else { Style::default().fg(MUTED_GRAY) };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Enter", enabled(Style::default().fg(GOLD))),
            Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(button_text, enabled(Style::default().fg(SOFT_WHITE))),
        ];

        if !state.is_text_input_active() {
            spans.extend([
                Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Tab", Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Dashboard", Style::default().fg(MUTED_GRAY)),
                Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("q", Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Quit", Style::default().fg(MUTED_GRAY)),
            ]);
        }

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new(crate::config::IntegrationConfig::default().api_base_url)
    }
}
