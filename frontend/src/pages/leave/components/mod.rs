pub mod ai_insight;
pub mod balances;
pub mod quick_apply;
pub mod recent_requests;
pub mod team_availability;

pub use ai_insight::AiInsightBanner;
pub use balances::BalancesSection;
pub use quick_apply::QuickApplyForm;
pub use recent_requests::RecentRequestsPanel;
pub use team_availability::TeamAvailabilityStrip;
