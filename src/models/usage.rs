// ABOUTME: Usage analytics data model: daily message series, response-type shares and KPIs
// Data is a fixed sample; the time range slices the series by date

use chrono::{Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Dashboard time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    Last24h,
    #[default]
    #[serde(rename = "7d")]
    #[value(name = "7d")]
    Last7d,
    #[serde(rename = "30d")]
    #[value(name = "30d")]
    Last30d,
    #[serde(rename = "90d")]
    #[value(name = "90d")]
    Last90d,
}

impl TimeRange {
    pub const fn all() -> &'static [Self] {
        &[Self::Last24h, Self::Last7d, Self::Last30d, Self::Last90d]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Last24h => "24h",
            Self::Last7d => "7d",
            Self::Last30d => "30d",
            Self::Last90d => "90d",
        }
    }

    /// Calendar days covered, counting the newest day
    pub const fn days(self) -> i64 {
        match self {
            Self::Last24h => 1,
            Self::Last7d => 7,
            Self::Last30d => 30,
            Self::Last90d => 90,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Last24h => Self::Last7d,
            Self::Last7d => Self::Last30d,
            Self::Last30d => Self::Last90d,
            Self::Last90d => Self::Last24h,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Last24h => Self::Last90d,
            Self::Last7d => Self::Last24h,
            Self::Last30d => Self::Last7d,
            Self::Last90d => Self::Last30d,
        }
    }
}

/// One day of traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsagePoint {
    pub date: NaiveDate,
    pub messages: u64,
    pub users: u64,
    pub success: u64,
    pub failed: u64,
}

/// Share of replies by response type, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseShare {
    pub name: &'static str,
    pub value: u64,
}

/// The fixed response-type breakdown; values sum to 100
pub const RESPONSE_TYPES: [ResponseShare; 4] = [
    ResponseShare { name: "Quick Replies", value: 45 },
    ResponseShare { name: "Text Responses", value: 30 },
    ResponseShare { name: "Rich Media", value: 15 },
    ResponseShare { name: "Actions", value: 10 },
];

/// Date-ordered daily usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSeries {
    points: Vec<UsagePoint>,
}

impl UsageSeries {
    /// Builds a series, sorting by date
    pub fn new(mut points: Vec<UsagePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// The canned week of traffic shown until a real data source is wired in
    pub fn sample() -> Self {
        const ROWS: [(u32, u64, u64, u64, u64); 7] = [
            (1, 1200, 450, 1150, 50),
            (2, 1500, 480, 1450, 50),
            (3, 1300, 510, 1250, 50),
            (4, 1800, 550, 1700, 100),
            (5, 2000, 600, 1900, 100),
            (6, 1700, 620, 1650, 50),
            (7, 1900, 650, 1850, 50),
        ];

        let points = ROWS
            .iter()
            .filter_map(|&(day, messages, users, success, failed)| {
                Some(UsagePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, day)?,
                    messages,
                    users,
                    success,
                    failed,
                })
            })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[UsagePoint] {
        &self.points
    }

    /// Points inside `range`, ending at the newest point
    pub fn window(&self, range: TimeRange) -> &[UsagePoint] {
        let Some(latest) = self.points.last().map(|p| p.date) else {
            return &[];
        };
        let cutoff = latest - Duration::days(range.days() - 1);
        let start = self.points.partition_point(|p| p.date < cutoff);
        &self.points[start..]
    }

    /// The equally long window immediately before `window(range)`
    fn preceding_window(&self, range: TimeRange) -> &[UsagePoint] {
        let Some(latest) = self.points.last().map(|p| p.date) else {
            return &[];
        };
        let end = latest - Duration::days(range.days());
        let start = end - Duration::days(range.days() - 1);
        let from = self.points.partition_point(|p| p.date < start);
        let to = self.points.partition_point(|p| p.date <= end);
        &self.points[from..to]
    }

    pub fn summary(&self, range: TimeRange, monthly_limit: u64) -> UsageSummary {
        UsageSummary::from_points(range, self.window(range), self.preceding_window(range), monthly_limit)
    }
}

/// KPI card values for one time range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSummary {
    pub range: TimeRange,
    pub days_with_data: usize,
    pub total_messages: u64,
    pub failed_messages: u64,
    /// Users on the newest day in the window
    pub active_users: u64,
    /// Percent of messages answered successfully
    pub success_rate: f64,
    /// Percent of the monthly message limit consumed by this window
    pub limit_used: f64,
    /// Percent change in messages against the preceding window, when it has data
    pub message_trend: Option<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

impl UsageSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_points(
        range: TimeRange,
        points: &[UsagePoint],
        previous: &[UsagePoint],
        monthly_limit: u64,
    ) -> Self {
        let total_messages: u64 = points.iter().map(|p| p.messages).sum();
        let success: u64 = points.iter().map(|p| p.success).sum();
        let previous_total: u64 = previous.iter().map(|p| p.messages).sum();

        let message_trend = (previous_total > 0).then(|| {
            (total_messages as f64 - previous_total as f64) * 100.0 / previous_total as f64
        });

        Self {
            range,
            days_with_data: points.len(),
            total_messages,
            failed_messages: points.iter().map(|p| p.failed).sum(),
            active_users: points.last().map_or(0, |p| p.users),
            success_rate: percent(success, total_messages),
            limit_used: percent(total_messages, monthly_limit),
            message_trend,
        }
    }
}
