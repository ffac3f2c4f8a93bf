// ABOUTME: UI components for the TUI: onboarding wizard, analytics dashboard, help overlay

pub mod dashboard;
pub mod help;
pub mod layout;
pub mod onboarding;
pub mod theme;

pub use dashboard::DashboardComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
