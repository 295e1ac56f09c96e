use crate::components::common::{Button, ButtonVariant};
use crate::pages::leave::layout::SectionHeading;
use leptos::*;

const LEAVE_TYPES: [&str; 3] = ["Earned Leave", "Sick Leave", "Casual Leave"];
const DEFAULT_LEAVE_TYPE: &str = "Earned Leave";

// Mock form: nothing here is bound to a handler or a signal.
#[component]
pub fn QuickApplyForm() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" role="form" aria-label="Quick apply">
            <SectionHeading title="Quick Apply" />
            <div class="flex flex-wrap items-center gap-3">
                <label class="flex items-center gap-2">
                    <span class="text-xs text-fg-muted whitespace-nowrap">{"Leave Type"}</span>
                    <select class="block border rounded px-2 py-1 text-sm">
                        {LEAVE_TYPES
                            .into_iter()
                            .map(|leave_type| {
                                view! {
                                    <option value={leave_type} selected={leave_type == DEFAULT_LEAVE_TYPE}>
                                        {leave_type}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="flex items-center gap-2">
                    <span class="text-xs text-fg-muted whitespace-nowrap">{"Duration"}</span>
                    <input type="date" class="block border rounded px-2 py-1 text-sm" aria-label="Start date" />
                    <span class="text-xs text-fg-muted">{"to"}</span>
                    <input type="date" class="block border rounded px-2 py-1 text-sm" aria-label="End date" />
                </div>
                <label class="flex flex-1 items-center gap-2 min-w-[8rem]">
                    <span class="text-xs text-fg-muted whitespace-nowrap">{"Reason"}</span>
                    <input type="text" class="block w-full border rounded px-2 py-1 text-sm" placeholder="Briefly describe..." />
                </label>
                <Button variant={ButtonVariant::Primary}>{"Submit Request"}</Button>
            </div>
        </div>
    }
}
