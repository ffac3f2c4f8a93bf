// ABOUTME: Dashboard view state: selected time range over the read-only usage series

use crate::config::DashboardConfig;
use crate::models::{TimeRange, UsagePoint, UsageSeries, UsageSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    NextRange,
    PreviousRange,
    SelectRange(TimeRange),
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub range: TimeRange,
    series: UsageSeries,
    monthly_limit: u64,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_series(config, UsageSeries::sample())
    }

    pub fn with_series(config: &DashboardConfig, series: UsageSeries) -> Self {
        Self {
            range: config.default_range,
            series,
            monthly_limit: config.monthly_message_limit,
        }
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        let range = match event {
            DashboardEvent::NextRange => self.range.next(),
            DashboardEvent::PreviousRange => self.range.previous(),
            DashboardEvent::SelectRange(range) => range,
        };
        if range != self.range {
            tracing::debug!(from = self.range.label(), to = range.label(), "Dashboard range changed");
            self.range = range;
        }
    }

    /// Points visible for the selected range
    pub fn window(&self) -> &[UsagePoint] {
        self.series.window(self.range)
    }

    pub fn summary(&self) -> UsageSummary {
        self.series.summary(self.range, self.monthly_limit)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_from_config() {
        let config = DashboardConfig {
            default_range: TimeRange::Last30d,
            ..DashboardConfig::default()
        };
        assert_eq!(DashboardState::new(&config).range, TimeRange::Last30d);
    }

    #[test]
    fn test_range_selection_filters_window() {
        let mut state = DashboardState::default();
        assert_eq!(state.window().len(), 7);

        state.apply(DashboardEvent::SelectRange(TimeRange::Last24h));
        assert_eq!(state.window().len(), 1);
        assert_eq!(state.summary().total_messages, 1_900);

        state.apply(DashboardEvent::PreviousRange);
        assert_eq!(state.range, TimeRange::Last90d);
        state.apply(DashboardEvent::NextRange);
        assert_eq!(state.range, TimeRange::Last24h);
    }
}
