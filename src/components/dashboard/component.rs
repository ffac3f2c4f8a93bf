// ABOUTME: Analytics dashboard component
// KPI cards, a message volume line chart and the response-type breakdown

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Clear, Dataset,
        GraphType, Paragraph, Tabs,
    },
    Frame,
};

use super::state::DashboardState;
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SERIES_COLORS,
    SOFT_WHITE, SUBDUED_BORDER, WARNING_YELLOW,
};
use crate::models::{TimeRange, UsageSummary, RESPONSE_TYPES};
use crate::pricing::group_thousands;

const MIN_BAR_WIDTH: usize = 4;

pub struct DashboardComponent;

impl DashboardComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and range tabs
                Constraint::Length(5), // KPI cards
                Constraint::Min(10),   // Charts
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_cards(frame, layout[1], &state.summary());

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        self.render_volume_chart(frame, charts[0], state);
        self.render_response_types(frame, charts[1]);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("←/→ or 1-4", Style::default().fg(GOLD)),
            Span::styled(" range  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Tab", Style::default().fg(GOLD)),
            Span::styled(" onboarding  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("?", Style::default().fg(GOLD)),
            Span::styled(" help  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("q", Style::default().fg(GOLD)),
            Span::styled(" quit", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(Span::styled(
                " Analytics Dashboard ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ));

        let titles: Vec<Line> = TimeRange::all().iter().map(|r| Line::from(r.label())).collect();
        let selected = TimeRange::all()
            .iter()
            .position(|r| *r == state.range)
            .unwrap_or_default();

        let tabs = Tabs::new(titles)
            .block(block)
            .select(selected)
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(DARK_BG).bg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD))
            .divider(Span::styled("│", Style::default().fg(SUBDUED_BORDER)));
        frame.render_widget(tabs, area);
    }

    fn card(title: &str, value: String, detail: String, accent: ratatui::style::Color) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(MUTED_GRAY))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(PANEL_BG))
                .title(Span::styled(format!(" {title} "), Style::default().fg(accent))),
        )
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, summary: &UsageSummary) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let trend = summary.message_trend.map_or_else(
            || format!("{} day(s) of data", summary.days_with_data),
            |t| format!("{t:+.1}% vs previous {}", summary.range.label()),
        );

        let cards = [
            Self::card("Total Messages", group_thousands(summary.total_messages), trend, CORNFLOWER_BLUE),
            Self::card(
                "Active Users",
                group_thousands(summary.active_users),
                "on the latest day".to_string(),
                SELECTION_GREEN,
            ),
            Self::card(
                "Success Rate",
                format!("{:.1}%", summary.success_rate),
                format!("{} failed", group_thousands(summary.failed_messages)),
                WARNING_YELLOW,
            ),
            Self::card(
                "API Usage",
                format!("{:.1}%", summary.limit_used),
                "of monthly limit".to_string(),
                SERIES_COLORS[3],
            ),
        ];

        for (card, cell) in cards.into_iter().zip(cells.iter()) {
            frame.render_widget(card, *cell);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_volume_chart(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let window = state.window();
        let points: Vec<(f64, f64)> = window
            .iter()
            .enumerate()
            .map(|(idx, p)| (idx as f64, p.messages as f64))
            .collect();

        let max_messages = window.iter().map(|p| p.messages).max().unwrap_or(0);
        // Headroom above the tallest point, rounded up to the next 500
        let y_max = (max_messages / 500 + 1) * 500;
        let x_max = window.len().saturating_sub(1).max(1) as f64;

        let x_labels: Vec<Span> = match (window.first(), window.last()) {
            (Some(first), Some(last)) if window.len() > 1 => vec![
                Span::raw(first.date.format("%m-%d").to_string()),
                Span::raw(last.date.format("%m-%d").to_string()),
            ],
            (Some(only), _) => vec![Span::raw(only.date.format("%m-%d").to_string())],
            _ => Vec::new(),
        };

        let dataset = Dataset::default()
            .name("messages")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SERIES_COLORS[0]))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(PANEL_BG))
                    .title(Span::styled(" Message Volume ", Style::default().fg(GOLD))),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(MUTED_GRAY))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(MUTED_GRAY))
                    .bounds([0.0, y_max as f64])
                    .labels(vec![Span::raw("0"), Span::raw(group_thousands(y_max))]),
            );
        frame.render_widget(chart, area);
    }

    fn render_response_types(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(Span::styled(" Response Types ", Style::default().fg(GOLD)));

        // Horizontal bars need the label column plus room for a bar
        let label_width = RESPONSE_TYPES
            .iter()
            .map(|share| share.name.chars().count())
            .max()
            .unwrap_or(0);
        if usize::from(block.inner(area).width) <= label_width + MIN_BAR_WIDTH {
            let lines: Vec<Line> = RESPONSE_TYPES
                .iter()
                .zip(SERIES_COLORS.iter())
                .map(|(share, color)| {
                    Line::from(vec![
                        Span::styled(share.name, Style::default().fg(*color)),
                        Span::styled(format!(" {}%", share.value), Style::default().fg(SOFT_WHITE)),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }

        let bars: Vec<Bar> = RESPONSE_TYPES
            .iter()
            .zip(SERIES_COLORS.iter())
            .map(|(share, color)| {
                Bar::default()
                    .label(Line::from(share.name))
                    .value(share.value)
                    .text_value(format!("{}%", share.value))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(DARK_BG).bg(*color))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
