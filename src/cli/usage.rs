// ABOUTME: CLI usage command: the dashboard's KPI summary as text or JSON

use anyhow::{Context, Result};

use super::{OutputFormat, UsageArgs};
use crate::config::AppConfig;
use crate::models::{UsageSeries, UsageSummary, RESPONSE_TYPES};
use crate::pricing::group_thousands;

/// Execute the usage command
pub fn execute(args: &UsageArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let range = args.range.unwrap_or(config.dashboard.default_range);
    let summary = UsageSeries::sample().summary(range, config.dashboard.monthly_message_limit);
    println!("{}", render(&summary, format)?);
    Ok(())
}

pub fn render(summary: &UsageSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": summary,
                "response_types": RESPONSE_TYPES,
            });
            serde_json::to_string_pretty(&output).context("Failed to serialize usage summary")
        }
        OutputFormat::Text => {
            let trend = summary
                .message_trend
                .map_or_else(|| "n/a".to_string(), |t| format!("{t:+.1}%"));

            let mut lines = vec![
                format!("Usage ({})", summary.range.label()),
                "━".repeat(32),
                format!("Days with data:  {}", summary.days_with_data),
                format!("Total messages:  {}", group_thousands(summary.total_messages)),
                format!("Trend:           {trend}"),
                format!("Active users:    {}", group_thousands(summary.active_users)),
                format!("Success rate:    {:.1}%", summary.success_rate),
                format!("Limit used:      {:.1}%", summary.limit_used),
                String::new(),
                "Response types:".to_string(),
            ];
            lines.extend(
                RESPONSE_TYPES
                    .iter()
                    .map(|share| format!("  {:<16} {:>3}%", share.name, share.value)),
            );
            Ok(lines.join("\n"))
        }
    }
}
