use crate::pages::leave::{
    repository::{TeamMemberAvailability, DAYS_PER_WEEK},
    utils::avatar_classes,
};
use leptos::*;

#[component]
pub fn TeamAvailabilityStrip(
    month_label: &'static str,
    week_labels: [String; DAYS_PER_WEEK],
    team: Vec<TeamMemberAvailability>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <i class="fas fa-calendar-days text-action-primary-bg"></i>
                    <h3 class="text-base font-semibold text-fg">{"Team Availability"}</h3>
                </div>
                <div class="flex items-center gap-1">
                    <button type="button" class="p-1 rounded text-fg hover:bg-action-ghost-bg-hover" aria-label="Previous month">
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <span class="text-sm font-semibold text-fg" data-testid="month-label">{month_label}</span>
                    <button type="button" class="p-1 rounded text-fg hover:bg-action-ghost-bg-hover" aria-label="Next month">
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            </div>
            <div class="overflow-x-auto">
                <div class="grid grid-cols-[2fr_repeat(5,1fr)] gap-2 text-xs font-medium text-fg-muted min-w-[26rem]">
                    <span>{"Team Member"}</span>
                    {week_labels
                        .into_iter()
                        .map(|label| view! { <span class="text-center">{label}</span> })
                        .collect_view()}
                </div>
                <ul class="space-y-2 mt-2 min-w-[26rem]">
                    {team
                        .into_iter()
                        .map(|member| view! { <MemberRow member={member} /> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn MemberRow(member: TeamMemberAvailability) -> impl IntoView {
    view! {
        <li class="grid grid-cols-[2fr_repeat(5,1fr)] gap-2 items-center" data-testid="team-member">
            <div class="flex items-center gap-3 min-w-0">
                <span
                    class=format!("w-9 h-9 flex items-center justify-center rounded-full text-xs font-bold {}", avatar_classes(&member.avatar_color))
                    data-testid="member-avatar"
                >
                    {member.initials}
                </span>
                <span class="text-sm text-fg truncate">{member.name}</span>
            </div>
            {member
                .day_markers
                .into_iter()
                .map(|marker| {
                    view! {
                        <span
                            class=format!("h-3 w-7 mx-auto rounded border {}", marker.classes())
                            title={marker.title()}
                            data-testid="day-marker"
                            data-away={marker.is_away().to_string()}
                        ></span>
                    }
                })
                .collect_view()}
        </li>
    }
}
