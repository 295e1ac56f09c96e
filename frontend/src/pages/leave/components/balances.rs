use crate::pages::leave::{
    repository::{LeaveBalanceCard, BALANCE_CAPTION},
    utils::{balance_accent_classes, balance_bar_classes},
};
use leptos::*;

#[component]
pub fn BalancesSection(balances: Vec<LeaveBalanceCard>) -> impl IntoView {
    view! {
        <section class="grid grid-cols-1 gap-4 md:grid-cols-3" aria-label="Leave balances">
            {balances
                .into_iter()
                .map(|card| view! { <BalanceCard card={card} /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn BalanceCard(card: LeaveBalanceCard) -> impl IntoView {
    let accent = balance_accent_classes(&card.color);
    let bar = balance_bar_classes(&card.color);
    let progress = card.progress_percent.min(100);
    view! {
        <div
            class="flex flex-col p-6 rounded-2xl bg-surface-elevated border border-border shadow-premium"
            data-testid="leave-balance-card"
        >
            <div class="flex items-start justify-between mb-3">
                <div class=format!("w-12 h-12 flex items-center justify-center rounded-xl border {}", accent)>
                    <i class=format!("fas {} text-lg", card.icon)></i>
                </div>
                <p class="text-xs font-display font-bold uppercase tracking-widest text-fg">{card.label}</p>
            </div>
            <p class="text-3xl font-display font-extrabold text-fg">{card.value}</p>
            <p class="text-sm text-fg-muted mb-3">{BALANCE_CAPTION}</p>
            <div
                class="h-1.5 w-full rounded-full bg-surface-muted mb-2"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={progress.to_string()}
            >
                <div class=format!("h-1.5 rounded-full {}", bar) style=format!("width: {}%", progress)></div>
            </div>
            <p class="text-xs text-fg-muted">{card.used}</p>
        </div>
    }
}
