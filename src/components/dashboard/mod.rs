// ABOUTME: Read-only analytics dashboard over the sample usage series

pub mod component;
pub mod state;

pub use component::DashboardComponent;
pub use state::{DashboardEvent, DashboardState};
