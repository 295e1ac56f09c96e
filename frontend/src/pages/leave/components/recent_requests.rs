use crate::components::common::{Button, ButtonVariant};
use crate::pages::leave::repository::RecentRequest;
use leptos::*;

#[component]
pub fn RecentRequestsPanel(requests: Vec<RecentRequest>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-clock text-action-primary-bg"></i>
                <h3 class="text-base font-semibold text-fg">{"Recent Requests"}</h3>
            </div>
            <ul class="divide-y divide-border">
                {requests
                    .into_iter()
                    .map(|request| {
                        let status = request.status;
                        view! {
                            <li
                                class="py-4 first:pt-0 space-y-1"
                                data-testid="recent-request"
                                data-status={status.label().to_lowercase()}
                            >
                                <div class="flex items-center justify-between gap-4">
                                    <span class=format!(
                                        "px-2 py-0.5 rounded-full border text-xs font-bold tracking-wider {}",
                                        status.badge_classes()
                                    )>{status.label()}</span>
                                    <span class="text-xs text-fg-muted">{request.submitted}</span>
                                </div>
                                <p class="text-sm font-medium text-fg">{request.leave_type}</p>
                                <p class="text-sm text-fg-muted">{request.date_range}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Button variant={ButtonVariant::Ghost} class="mt-3 px-0">{"View all history"}</Button>
        </div>
    }
}
