// ABOUTME: Core data models for botdesk analytics

pub mod usage;

pub use usage::{ResponseShare, TimeRange, UsagePoint, UsageSeries, UsageSummary, RESPONSE_TYPES};
