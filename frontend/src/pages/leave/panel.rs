use crate::pages::leave::{
    components::{
        AiInsightBanner, BalancesSection, QuickApplyForm, RecentRequestsPanel,
        TeamAvailabilityStrip,
    },
    layout::LeaveFrame,
    view_model::use_leave_view_model,
};
use leptos::*;
use leptos_meta::Title;

pub const PAGE_TITLE: &str = "Leave Management";
pub const DOCUMENT_TITLE: &str = "Leave Management - ZenX Connect";
const PAGE_SUBTITLE: &str = "Track your balances, peer availability, and manage requests.";

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();

    view! {
        <Title text={DOCUMENT_TITLE} />
        <LeaveFrame>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{PAGE_TITLE}</h1>
                    <p class="mt-1 text-sm text-fg-muted">{PAGE_SUBTITLE}</p>
                </div>
                <BalancesSection balances={vm.balances} />
                <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                    <div class="space-y-6 lg:col-span-2">
                        <QuickApplyForm />
                        <TeamAvailabilityStrip
                            month_label={vm.month_label}
                            week_labels={vm.week_labels}
                            team={vm.team}
                        />
                    </div>
                    <div class="space-y-6">
                        <RecentRequestsPanel requests={vm.requests} />
                        <AiInsightBanner text={vm.insight} />
                    </div>
                </div>
            </div>
        </LeaveFrame>
    }
}
