use crate::pages::leave::{
    repository::{
        self, LeaveBalanceCard, RecentRequest, TeamMemberAvailability, DAYS_PER_WEEK,
    },
    utils::week_day_labels,
};
use leptos::*;

/// Everything the leave page shows, built once per render from the static
/// repository data.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaveViewModel {
    pub balances: Vec<LeaveBalanceCard>,
    pub month_label: &'static str,
    pub week_labels: [String; DAYS_PER_WEEK],
    pub team: Vec<TeamMemberAvailability>,
    pub requests: Vec<RecentRequest>,
    pub insight: &'static str,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        Self {
            balances: repository::leave_balances(),
            month_label: repository::AVAILABILITY_MONTH_LABEL,
            week_labels: week_day_labels(repository::availability_week_start()),
            team: repository::team_availability(),
            requests: repository::recent_requests(),
            insight: repository::AI_INSIGHT_TEXT,
        }
    }
}

impl Default for LeaveViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
